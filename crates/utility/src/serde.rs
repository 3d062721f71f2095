/// Serde adapter for `NaiveDate` fields that must round-trip as strict
/// `YYYY-MM-DD` strings. Use with `#[serde(with = "utility::serde::date")]`.
pub mod date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize as _, Deserializer, Serializer};

    use crate::date::{format_date, parse_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Day {
        #[serde(with = "super::date")]
        date: NaiveDate,
    }

    #[test]
    fn serializes_as_plain_date() {
        let day = Day {
            date: NaiveDate::from_ymd_opt(2017, 8, 1).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&day).unwrap(),
            r#"{"date":"2017-08-01"}"#
        );
    }

    #[test]
    fn rejects_unpadded_dates() {
        let result = serde_json::from_str::<Day>(r#"{"date":"2017-8-1"}"#);
        assert!(result.is_err());
    }
}
