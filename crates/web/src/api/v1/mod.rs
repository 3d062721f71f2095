use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
    routing::{get, on},
    Json, Router,
};
use chrono::NaiveDate;
use climate::RequestError;
use model::{measurement::TemperatureStats, DateRange};
use utility::date::parse_date;

use crate::{
    common::{route_not_found, RouteErrorResponse, RouteResult, METHOD_FILTER_ALL},
    mapper::{self, PrecipitationByDate, TemperaturePair},
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::resource!("/v1.0{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/precipitation", get(precipitation))
        .route("/stations", get(stations))
        .route("/tobs", get(tobs))
        .route("/:start", get(temperature_stats_since))
        .route("/:start/:end", get(temperature_stats_between))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

pub(crate) fn route_listing() -> Vec<String> {
    vec![
        resource!("/precipitation"),
        resource!("/stations"),
        resource!("/tobs"),
        resource!("/<start>"),
        resource!("/<start>/<end>"),
    ]
}

fn data_source_error(why: RequestError, uri: &str) -> RouteErrorResponse {
    RouteErrorResponse::from(why)
        .with_method(&Method::GET)
        .with_uri(uri)
}

fn path_date(raw: &str, uri: &str) -> RouteResult<NaiveDate> {
    parse_date(raw).map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(uri)
    })
}

/// Last twelve months of precipitation, keyed by date.
async fn precipitation(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { climate_client, .. }): State<WebState>,
) -> RouteResult<Json<PrecipitationByDate>> {
    climate_client
        .precipitation_last_year()
        .await
        .map(|rows| Json(mapper::precipitation_by_date(rows)))
        .map_err(|why| data_source_error(why, original_uri.path()))
}

async fn stations(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { climate_client, .. }): State<WebState>,
) -> RouteResult<Json<Vec<String>>> {
    climate_client
        .stations()
        .await
        .map(|codes| Json(mapper::station_codes(codes)))
        .map_err(|why| data_source_error(why, original_uri.path()))
}

/// Last twelve months of temperatures at the most active station.
async fn tobs(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { climate_client, .. }): State<WebState>,
) -> RouteResult<Json<Vec<TemperaturePair>>> {
    climate_client
        .most_active_temperatures()
        .await
        .map(|rows| Json(mapper::temperature_pairs(rows)))
        .map_err(|why| data_source_error(why, original_uri.path()))
}

async fn temperature_stats_since(
    OriginalUri(original_uri): OriginalUri,
    Path(start): Path<String>,
    State(WebState { climate_client, .. }): State<WebState>,
) -> RouteResult<Json<Vec<TemperatureStats>>> {
    let start = path_date(&start, original_uri.path())?;
    temperature_stats(&climate_client, DateRange::since(start), original_uri.path()).await
}

async fn temperature_stats_between(
    OriginalUri(original_uri): OriginalUri,
    Path((start, end)): Path<(String, String)>,
    State(WebState { climate_client, .. }): State<WebState>,
) -> RouteResult<Json<Vec<TemperatureStats>>> {
    let start = path_date(&start, original_uri.path())?;
    let end = path_date(&end, original_uri.path())?;
    temperature_stats(
        &climate_client,
        DateRange::between(start, end),
        original_uri.path(),
    )
    .await
}

async fn temperature_stats(
    climate_client: &climate::client::Client<database::SqliteDatabase>,
    range: DateRange,
    uri: &str,
) -> RouteResult<Json<Vec<TemperatureStats>>> {
    if range.is_empty() {
        tracing::debug!("{} ends before it starts, nothing can match", uri);
    }
    climate_client
        .temperature_stats(range)
        .await
        .map(|stats| Json(mapper::temperature_summary(stats)))
        .map_err(|why| data_source_error(why, uri))
}
