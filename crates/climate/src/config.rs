use std::{env, error, fmt};

use chrono::NaiveDate;
use utility::date::{days_before, parse_date};

/// Station used for the temperature endpoint when none is configured and
/// the dataset is empty. It is the most active station of the Hawaii snapshot.
pub const FALLBACK_MOST_ACTIVE_STATION: &str = "USC00519281";

pub const DEFAULT_LOOKBACK_DAYS: u64 = 365;

/// Last day covered by the Hawaii snapshot.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 8, 23).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value `{}` for {}: {}", self.value, self.key, self.reason)
    }
}

impl error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateConfig {
    /// The "today" all last-twelve-months queries are relative to.
    pub reference_date: NaiveDate,
    pub lookback_days: u64,
    /// Fixed station for the temperature endpoint. Computed from the data
    /// at startup when `None`.
    pub most_active_station: Option<String>,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            most_active_station: None,
        }
    }
}

impl ClimateConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CLIMATE_REFERENCE_DATE") {
            config.reference_date = parse_date(&value).map_err(|why| ConfigError {
                key: "CLIMATE_REFERENCE_DATE",
                value: value.clone(),
                reason: why.to_string(),
            })?;
        }

        if let Some(value) = lookup("CLIMATE_LOOKBACK_DAYS") {
            config.lookback_days = value.parse().map_err(|_| ConfigError {
                key: "CLIMATE_LOOKBACK_DAYS",
                value: value.clone(),
                reason: "expected a non-negative number of days".to_owned(),
            })?;
        }

        config.most_active_station = lookup("CLIMATE_MOST_ACTIVE_STATION")
            .map(|station| station.trim().to_owned())
            .filter(|station| !station.is_empty());

        Ok(config)
    }

    /// Earliest day included in a last-twelve-months query.
    pub fn cutoff_date(&self) -> NaiveDate {
        days_before(self.reference_date, self.lookback_days)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_reproduce_the_snapshot_window() {
        let config = ClimateConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClimateConfig::default());
        assert_eq!(
            config.cutoff_date(),
            NaiveDate::from_ymd_opt(2016, 8, 23).unwrap()
        );
        assert_eq!(config.most_active_station, None);
    }

    #[test]
    fn reads_overrides() {
        let config = ClimateConfig::from_lookup(lookup(&[
            ("CLIMATE_REFERENCE_DATE", "2020-03-01"),
            ("CLIMATE_LOOKBACK_DAYS", "30"),
            ("CLIMATE_MOST_ACTIVE_STATION", " USC00513117 "),
        ]))
        .unwrap();
        assert_eq!(
            config.cutoff_date(),
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
        );
        assert_eq!(config.most_active_station.as_deref(), Some("USC00513117"));
    }

    #[test]
    fn blank_station_counts_as_unset() {
        let config =
            ClimateConfig::from_lookup(lookup(&[("CLIMATE_MOST_ACTIVE_STATION", "  ")]))
                .unwrap();
        assert_eq!(config.most_active_station, None);
    }

    #[test]
    fn rejects_malformed_values() {
        let why =
            ClimateConfig::from_lookup(lookup(&[("CLIMATE_REFERENCE_DATE", "23.08.2017")]))
                .unwrap_err();
        assert_eq!(why.key, "CLIMATE_REFERENCE_DATE");

        let why = ClimateConfig::from_lookup(lookup(&[("CLIMATE_LOOKBACK_DAYS", "-1")]))
            .unwrap_err();
        assert_eq!(why.key, "CLIMATE_LOOKBACK_DAYS");
    }
}
