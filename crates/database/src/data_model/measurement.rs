use chrono::NaiveDate;
use model::measurement::{
    PrecipitationObservation, TemperatureObservation, TemperatureStats,
};
use sqlx::prelude::FromRow;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct PrecipitationRow {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

impl DatabaseRow for PrecipitationRow {
    type Model = PrecipitationObservation;

    fn to_model(self) -> Self::Model {
        PrecipitationObservation {
            date: self.date,
            prcp: self.prcp,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TemperatureRow {
    pub date: NaiveDate,
    pub tobs: f64,
}

impl DatabaseRow for TemperatureRow {
    type Model = TemperatureObservation;

    fn to_model(self) -> Self::Model {
        TemperatureObservation {
            date: self.date,
            tobs: self.tobs,
        }
    }
}

/// Aggregates over zero rows come back as a single row of NULLs.
#[derive(Debug, Clone, FromRow)]
pub struct TemperatureStatsRow {
    pub min_tobs: Option<f64>,
    pub avg_tobs: Option<f64>,
    pub max_tobs: Option<f64>,
}

impl DatabaseRow for TemperatureStatsRow {
    type Model = TemperatureStats;

    fn to_model(self) -> Self::Model {
        TemperatureStats {
            min: self.min_tobs,
            avg: self.avg_tobs,
            max: self.max_tobs,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct StationActivityRow {
    pub station: String,
    pub observations: i64,
}
