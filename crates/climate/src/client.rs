use std::sync::Arc;

use chrono::NaiveDate;
use model::{
    measurement::{PrecipitationObservation, TemperatureObservation, TemperatureStats},
    station::Station,
    DateRange,
};

use crate::{
    config::{ClimateConfig, FALLBACK_MOST_ACTIVE_STATION},
    database::{ClimateRepo, Database},
    RequestResult,
};

/// Entry point for everything the api serves.
///
/// Every call acquires its own session and drops it before returning, so
/// storage resources never outlive a request, whether it succeeds or not.
#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database,
{
    database: D,
    reference_date: NaiveDate,
    cutoff_date: NaiveDate,
    most_active_station: Arc<str>,
}

impl<D> Client<D>
where
    D: Database,
{
    /// Builds a client, resolving the most active station once if the
    /// configuration does not pin one.
    pub async fn new(database: D, config: ClimateConfig) -> RequestResult<Self> {
        let most_active_station = match config.most_active_station.clone() {
            Some(station) => {
                log::info!("using configured most active station {}", station);
                station
            }
            None => match database.session().await?.most_active_station().await? {
                Some(station) => {
                    log::info!("computed most active station {}", station);
                    station
                }
                None => {
                    log::warn!(
                        "no measurements found, falling back to station {}",
                        FALLBACK_MOST_ACTIVE_STATION
                    );
                    FALLBACK_MOST_ACTIVE_STATION.to_owned()
                }
            },
        };

        Ok(Self {
            database,
            reference_date: config.reference_date,
            cutoff_date: config.cutoff_date(),
            most_active_station: most_active_station.into(),
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn cutoff_date(&self) -> NaiveDate {
        self.cutoff_date
    }

    pub fn most_active_station(&self) -> &str {
        &self.most_active_station
    }

    pub async fn precipitation_last_year(
        &self,
    ) -> RequestResult<Vec<PrecipitationObservation>> {
        let mut session = self.database.session().await?;
        Ok(session.precipitation_since(self.cutoff_date).await?)
    }

    /// Full station records, for diagnostics rather than the api.
    pub async fn station_inventory(&self) -> RequestResult<Vec<Station>> {
        let mut session = self.database.session().await?;
        Ok(session.all_stations().await?)
    }

    pub async fn stations(&self) -> RequestResult<Vec<String>> {
        let mut session = self.database.session().await?;
        Ok(session.distinct_stations().await?)
    }

    /// Last twelve months of temperature observations of the most active
    /// station.
    pub async fn most_active_temperatures(
        &self,
    ) -> RequestResult<Vec<TemperatureObservation>> {
        let mut session = self.database.session().await?;
        Ok(session
            .temperatures_for_station(&self.most_active_station, self.cutoff_date)
            .await?)
    }

    pub async fn temperature_stats(
        &self,
        range: DateRange,
    ) -> RequestResult<TemperatureStats> {
        let mut session = self.database.session().await?;
        Ok(session.temperature_stats(range).await?)
    }
}
