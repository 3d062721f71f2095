use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// One daily reading of a station. `station` refers to `Station::station`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    #[serde(with = "utility::serde::date")]
    pub date: NaiveDate,
    /// Missing readings stay `None`, they are not zero rainfall.
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl Measurement {
    pub fn precipitation(&self) -> PrecipitationObservation {
        PrecipitationObservation {
            date: self.date,
            prcp: self.prcp,
        }
    }

    pub fn temperature(&self) -> TemperatureObservation {
        TemperatureObservation {
            date: self.date,
            tobs: self.tobs,
        }
    }
}

impl ExampleData for Measurement {
    fn example_data() -> Self {
        Self {
            id: 2724,
            station: "USC00519281".to_owned(),
            date: NaiveDate::from_ymd_opt(2017, 8, 18).unwrap_or_default(),
            prcp: Some(0.06),
            tobs: 79.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationObservation {
    #[serde(with = "utility::serde::date")]
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    #[serde(with = "utility::serde::date")]
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Aggregate of `tobs` over a date range. All three are `None` when no
/// measurement matched, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_serialize_as_nulls() {
        let json = serde_json::to_string(&TemperatureStats::default()).unwrap();
        assert_eq!(json, r#"{"min":null,"avg":null,"max":null}"#);
        assert!(TemperatureStats::default().is_empty());
    }

    #[test]
    fn measurement_projections() {
        let measurement = Measurement::example_data();
        assert_eq!(measurement.precipitation().prcp, Some(0.06));
        assert_eq!(measurement.temperature().tobs, 79.0);
        assert_eq!(measurement.temperature().date, measurement.date);
    }
}
