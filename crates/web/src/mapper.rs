//! Shapes query results into the json bodies the api promises.

use std::collections::BTreeMap;

use model::measurement::{
    PrecipitationObservation, TemperatureObservation, TemperatureStats,
};
use utility::date::format_date;

/// `{ "YYYY-MM-DD": prcp }`, keys ascending.
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// `["YYYY-MM-DD", tobs]`, serialized as a two element array.
pub type TemperaturePair = (String, f64);

/// Keys the observations by date.
///
/// This is lossy: when several stations report on the same day only the
/// last row of that day survives. Nothing is summed or averaged.
pub fn precipitation_by_date(rows: Vec<PrecipitationObservation>) -> PrecipitationByDate {
    let mut by_date = PrecipitationByDate::new();
    for row in rows {
        by_date.insert(format_date(&row.date), row.prcp);
    }
    by_date
}

pub fn station_codes(mut codes: Vec<String>) -> Vec<String> {
    codes.sort_unstable();
    codes.dedup();
    codes
}

pub fn temperature_pairs(rows: Vec<TemperatureObservation>) -> Vec<TemperaturePair> {
    rows.into_iter()
        .map(|row| (format_date(&row.date), row.tobs))
        .collect()
}

/// Always exactly one element, even when nothing matched.
pub fn temperature_summary(stats: TemperatureStats) -> Vec<TemperatureStats> {
    vec![stats]
}
