use chrono::NaiveDate;
use climate::database::Result;
use model::{
    measurement::{PrecipitationObservation, TemperatureObservation, TemperatureStats},
    DateRange,
};
use sqlx::{Executor, Sqlite};
use utility::let_also::LetAlso;

use crate::data_model::{
    measurement::{PrecipitationRow, StationActivityRow, TemperatureRow, TemperatureStatsRow},
    to_models, DatabaseRow,
};

use super::convert_error;

// Numeric columns are cast to REAL so that integer-typed cells decode as f64.

pub async fn precipitation_since<'c, E>(
    executor: E,
    cutoff: NaiveDate,
) -> Result<Vec<PrecipitationObservation>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT date, CAST(prcp AS REAL) AS prcp
        FROM measurement
        WHERE date >= ?
        ORDER BY date ASC, id ASC;
        ",
    )
    .bind(cutoff)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<PrecipitationRow>| Ok(to_models(rows)))
}

pub async fn temperatures_for_station<'c, E>(
    executor: E,
    station: &str,
    cutoff: NaiveDate,
) -> Result<Vec<TemperatureObservation>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT date, CAST(tobs AS REAL) AS tobs
        FROM measurement
        WHERE station = ? AND date >= ?
        ORDER BY date ASC, id ASC;
        ",
    )
    .bind(station)
    .bind(cutoff)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<TemperatureRow>| Ok(to_models(rows)))
}

pub async fn temperature_stats<'c, E>(
    executor: E,
    range: DateRange,
) -> Result<TemperatureStats>
where
    E: Executor<'c, Database = Sqlite>,
{
    let query = match range.end {
        Some(end) => sqlx::query_as::<_, TemperatureStatsRow>(
            "
            SELECT
                CAST(MIN(tobs) AS REAL) AS min_tobs,
                CAST(AVG(tobs) AS REAL) AS avg_tobs,
                CAST(MAX(tobs) AS REAL) AS max_tobs
            FROM measurement
            WHERE date >= ? AND date <= ?;
            ",
        )
        .bind(range.start)
        .bind(end),
        None => sqlx::query_as::<_, TemperatureStatsRow>(
            "
            SELECT
                CAST(MIN(tobs) AS REAL) AS min_tobs,
                CAST(AVG(tobs) AS REAL) AS avg_tobs,
                CAST(MAX(tobs) AS REAL) AS max_tobs
            FROM measurement
            WHERE date >= ?;
            ",
        )
        .bind(range.start),
    };

    query
        .fetch_one(executor)
        .await
        .map(DatabaseRow::to_model)
        .map_err(convert_error)
}

pub async fn most_active_station<'c, E>(executor: E) -> Result<Option<String>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT station, COUNT(*) AS observations
        FROM measurement
        GROUP BY station
        ORDER BY observations DESC, station ASC
        LIMIT 1;
        ",
    )
    .fetch_optional(executor)
    .await
    .map(|row: Option<StationActivityRow>| {
        row.map(|row| {
            log::debug!(
                "station {} has {} observations",
                row.station,
                row.observations
            );
            row.station
        })
    })
    .map_err(convert_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be present");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[tokio::test]
    async fn precipitation_includes_cutoff_and_missing_values() {
        let database = testing::memory_database().await.unwrap();
        let rows = precipitation_since(database.pool(), day(2016, 8, 23))
            .await
            .unwrap();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].date, day(2016, 8, 23));
        assert!(rows.iter().all(|row| row.date >= day(2016, 8, 23)));
        assert!(rows
            .iter()
            .any(|row| row.date == day(2017, 8, 18) && row.prcp.is_none()));
        // same-day rows keep their insertion order
        assert_eq!(
            rows.iter()
                .filter(|row| row.date == day(2016, 8, 23))
                .map(|row| row.prcp)
                .collect::<Vec<_>>(),
            vec![Some(0.08), Some(0.15), Some(1.79)]
        );
    }

    #[tokio::test]
    async fn temperatures_are_limited_to_one_station() {
        let database = testing::memory_database().await.unwrap();
        let rows =
            temperatures_for_station(database.pool(), "USC00519281", day(2016, 8, 23))
                .await
                .unwrap();

        assert_eq!(
            rows.iter().map(|row| (row.date, row.tobs)).collect::<Vec<_>>(),
            vec![
                (day(2016, 8, 23), 77.0),
                (day(2016, 8, 24), 77.0),
                (day(2017, 8, 18), 79.0),
                (day(2017, 8, 23), 81.0),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_station_has_no_temperatures() {
        let database = testing::memory_database().await.unwrap();
        let rows = temperatures_for_station(database.pool(), "NOPE", day(2000, 1, 1))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn open_ended_stats() {
        let database = testing::memory_database().await.unwrap();
        let stats = temperature_stats(database.pool(), DateRange::since(day(2017, 1, 1)))
            .await
            .unwrap();

        assert_close(stats.min, 76.0);
        assert_close(stats.avg, (79.0 + 76.0 + 81.0) / 3.0);
        assert_close(stats.max, 81.0);
    }

    #[tokio::test]
    async fn bounded_stats_include_the_end_date() {
        let database = testing::memory_database().await.unwrap();
        let stats = temperature_stats(
            database.pool(),
            DateRange::between(day(2017, 8, 20), day(2017, 8, 23)),
        )
        .await
        .unwrap();

        assert_close(stats.min, 76.0);
        assert_close(stats.avg, 78.5);
        assert_close(stats.max, 81.0);
    }

    #[tokio::test]
    async fn stats_without_matches_are_null() {
        let database = testing::memory_database().await.unwrap();

        let after = temperature_stats(database.pool(), DateRange::since(day(2018, 1, 1)))
            .await
            .unwrap();
        assert_eq!(after, TemperatureStats::default());

        let reversed = temperature_stats(
            database.pool(),
            DateRange::between(day(2017, 8, 23), day(2016, 1, 1)),
        )
        .await
        .unwrap();
        assert_eq!(reversed, TemperatureStats::default());
    }

    #[tokio::test]
    async fn most_active_station_by_row_count() {
        let database = testing::memory_database().await.unwrap();
        assert_eq!(
            most_active_station(database.pool()).await.unwrap().as_deref(),
            Some("USC00519281")
        );
    }

    #[tokio::test]
    async fn most_active_station_ties_prefer_lower_code() {
        let database = testing::empty_memory_database().await.unwrap();
        for (id, station) in [(1, "USC00519397"), (2, "USC00513117")] {
            let measurement = model::measurement::Measurement {
                id,
                station: station.to_owned(),
                date: day(2017, 1, 1),
                prcp: None,
                tobs: 70.0,
            };
            testing::insert_measurement(database.pool(), &measurement)
                .await
                .unwrap();
        }

        assert_eq!(
            most_active_station(database.pool()).await.unwrap().as_deref(),
            Some("USC00513117")
        );
    }

    #[tokio::test]
    async fn empty_table_has_no_most_active_station() {
        let database = testing::empty_memory_database().await.unwrap();
        assert_eq!(most_active_station(database.pool()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_table_is_a_query_error() {
        let pool = testing::memory_pool().await.unwrap();
        let result = precipitation_since(&pool, day(2016, 8, 23)).await;
        assert!(matches!(
            result,
            Err(climate::database::DatabaseError::Query(_))
        ));
    }
}
