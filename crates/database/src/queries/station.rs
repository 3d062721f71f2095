use climate::database::Result;
use model::station::Station;
use sqlx::{Executor, Sqlite};
use utility::let_also::LetAlso;

use crate::data_model::{station::StationRow, to_models};

use super::convert_error;

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<Station>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT
            id,
            station,
            name,
            CAST(latitude AS REAL) AS latitude,
            CAST(longitude AS REAL) AS longitude,
            CAST(elevation AS REAL) AS elevation
        FROM station
        ORDER BY station ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<StationRow>| Ok(to_models(rows)))
}

pub async fn distinct_codes<'c, E>(executor: E) -> Result<Vec<String>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_scalar(
        "
        SELECT DISTINCT station
        FROM station
        ORDER BY station ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)
}
