use std::{env, error::Error, str::FromStr};

use async_trait::async_trait;
use chrono::NaiveDate;
use climate::{
    config::ConfigError,
    database::{ClimateRepo, Database, DatabaseError},
};
use model::{
    measurement::{PrecipitationObservation, TemperatureObservation, TemperatureStats},
    station::Station,
    DateRange,
};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite,
};

pub mod data_model;
pub mod queries;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConnectionInfo {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `DATABASE_URL` takes precedence over `DATABASE_PATH`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| {
            let path = lookup("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_owned());
            format!("sqlite://{}", path)
        });

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value,
                        reason: "expected a positive number".to_owned(),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    pool: sqlx::SqlitePool,
}

/// One pooled connection. Returned to the pool on drop.
pub struct SqliteSession {
    connection: PoolConnection<Sqlite>,
}

impl SqliteDatabase {
    /// Opens the dataset read-only. The schema is expected to exist already.
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> Result<Self, Box<dyn Error>> {
        let options = SqliteConnectOptions::from_str(&database_connection_info.url)?
            .read_only(true)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(database_connection_info.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    type Session = SqliteSession;

    async fn session(&self) -> climate::database::Result<Self::Session> {
        self.pool
            .acquire()
            .await
            .map(|connection| SqliteSession { connection })
            .map_err(|why| DatabaseError::Unavailable(Box::new(why)))
    }
}

#[async_trait]
impl ClimateRepo for SqliteSession {
    async fn precipitation_since(
        &mut self,
        cutoff: NaiveDate,
    ) -> climate::database::Result<Vec<PrecipitationObservation>> {
        queries::measurement::precipitation_since(&mut *self.connection, cutoff).await
    }

    async fn distinct_stations(&mut self) -> climate::database::Result<Vec<String>> {
        queries::station::distinct_codes(&mut *self.connection).await
    }

    async fn temperatures_for_station(
        &mut self,
        station: &str,
        cutoff: NaiveDate,
    ) -> climate::database::Result<Vec<TemperatureObservation>> {
        queries::measurement::temperatures_for_station(
            &mut *self.connection,
            station,
            cutoff,
        )
        .await
    }

    async fn temperature_stats(
        &mut self,
        range: DateRange,
    ) -> climate::database::Result<TemperatureStats> {
        queries::measurement::temperature_stats(&mut *self.connection, range).await
    }

    async fn most_active_station(&mut self) -> climate::database::Result<Option<String>> {
        queries::measurement::most_active_station(&mut *self.connection).await
    }

    async fn all_stations(&mut self) -> climate::database::Result<Vec<Station>> {
        queries::station::get_all(&mut *self.connection).await
    }
}
