use std::{error, fmt, result};

use async_trait::async_trait;
use chrono::NaiveDate;
use model::{
    measurement::{PrecipitationObservation, TemperatureObservation, TemperatureStats},
    station::Station,
    DateRange,
};

#[derive(Debug)]
pub enum DatabaseError {
    /// No connection to the storage could be acquired.
    Unavailable(Box<dyn error::Error + Send + Sync>),
    /// A statement failed to execute or its rows could not be decoded.
    Query(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(why) => write!(f, "storage unavailable: {}", why),
            Self::Query(why) => write!(f, "query failed: {}", why),
        }
    }
}

impl error::Error for DatabaseError {}

pub type Result<T> = result::Result<T, DatabaseError>;

/// A read-only climate data source handing out one session per request.
#[async_trait]
pub trait Database: Clone + Send + Sync + 'static {
    type Session: ClimateRepo + Send;

    /// Acquires a session. The underlying resources are released when the
    /// session is dropped.
    async fn session(&self) -> Result<Self::Session>;
}

#[async_trait]
pub trait ClimateRepo {
    /// Every measurement on or after `cutoff`, all stations, ordered by date.
    async fn precipitation_since(
        &mut self,
        cutoff: NaiveDate,
    ) -> Result<Vec<PrecipitationObservation>>;

    /// Unique station codes, ascending.
    async fn distinct_stations(&mut self) -> Result<Vec<String>>;

    /// Temperature observations of exactly one station on or after `cutoff`.
    async fn temperatures_for_station(
        &mut self,
        station: &str,
        cutoff: NaiveDate,
    ) -> Result<Vec<TemperatureObservation>>;

    /// Minimum, average and maximum `tobs` within `range`.
    async fn temperature_stats(&mut self, range: DateRange) -> Result<TemperatureStats>;

    /// The station with the most measurements, ties broken by the lower code.
    async fn most_active_station(&mut self) -> Result<Option<String>>;

    async fn all_stations(&mut self) -> Result<Vec<Station>>;
}
