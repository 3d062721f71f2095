//! A small in-memory copy of the Hawaii dataset for tests.
//!
//! The fixtures are shaped around the edges of the default reporting
//! window (2016-08-23 to 2017-08-23): a reading the day before the cutoff,
//! several stations reporting on the same day, a missing precipitation
//! value and readings on the reference date itself.

use chrono::NaiveDate;
use model::{measurement::Measurement, station::Station, ExampleData};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::SqliteDatabase;

const CREATE_STATION: &str = "
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
";

const CREATE_MEASUREMENT: &str = "
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
";

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn stations() -> Vec<Station> {
    vec![
        Station {
            id: 1,
            station: "USC00519397".to_owned(),
            name: "WAIKIKI 717.2, HI US".to_owned(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            id: 2,
            station: "USC00513117".to_owned(),
            name: "KANEOHE 838.1, HI US".to_owned(),
            latitude: 21.4234,
            longitude: -157.8015,
            elevation: 14.6,
        },
        Station {
            id: 6,
            station: "USC00516128".to_owned(),
            name: "MANOA LYON ARBO 785.2, HI US".to_owned(),
            latitude: 21.3331,
            longitude: -157.8025,
            elevation: 152.4,
        },
        Station::example_data(),
    ]
}

pub fn measurements() -> Vec<Measurement> {
    let measurement = |id: i64, station: &str, date: NaiveDate, prcp: Option<f64>, tobs: f64| {
        Measurement {
        id,
        station: station.to_owned(),
        date,
            prcp,
            tobs,
        }
    };

    vec![
        measurement(1, "USC00519397", day(2010, 1, 1), Some(0.08), 65.0),
        measurement(2, "USC00519397", day(2016, 8, 22), Some(0.0), 80.0),
        measurement(3, "USC00519397", day(2016, 8, 23), Some(0.08), 81.0),
        measurement(4, "USC00513117", day(2016, 8, 23), Some(0.15), 76.0),
        measurement(5, "USC00519281", day(2016, 8, 23), Some(1.79), 77.0),
        measurement(6, "USC00519281", day(2016, 8, 24), Some(2.15), 77.0),
        measurement(7, "USC00519281", day(2017, 8, 18), None, 79.0),
        measurement(8, "USC00516128", day(2017, 8, 23), Some(0.45), 76.0),
        measurement(9, "USC00519281", day(2017, 8, 23), Some(0.0), 81.0),
    ]
}

/// Pool over a private in-memory database. A single connection that never
/// expires keeps the data alive for the lifetime of the pool.
pub async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_STATION).execute(pool).await?;
    sqlx::query(CREATE_MEASUREMENT).execute(pool).await?;
    Ok(())
}

pub async fn insert_station(pool: &SqlitePool, station: &Station) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        INSERT INTO station(id, station, name, latitude, longitude, elevation)
        VALUES (?, ?, ?, ?, ?, ?);
        ",
    )
    .bind(station.id)
    .bind(&station.station)
    .bind(&station.name)
    .bind(station.latitude)
    .bind(station.longitude)
    .bind(station.elevation)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_measurement(
    pool: &SqlitePool,
    measurement: &Measurement,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        INSERT INTO measurement(id, station, date, prcp, tobs)
        VALUES (?, ?, ?, ?, ?);
        ",
    )
    .bind(measurement.id)
    .bind(&measurement.station)
    .bind(measurement.date)
    .bind(measurement.prcp)
    .bind(measurement.tobs)
    .execute(pool)
    .await?;
    Ok(())
}

/// Schema only, no rows.
pub async fn empty_memory_database() -> Result<SqliteDatabase, sqlx::Error> {
    let pool = memory_pool().await?;
    create_schema(&pool).await?;
    Ok(SqliteDatabase::from_pool(pool))
}

/// Schema plus the fixtures from [`stations`] and [`measurements`].
pub async fn memory_database() -> Result<SqliteDatabase, sqlx::Error> {
    let database = empty_memory_database().await?;
    for station in stations() {
        insert_station(database.pool(), &station).await?;
    }
    for measurement in measurements() {
        insert_measurement(database.pool(), &measurement).await?;
    }
    Ok(database)
}
