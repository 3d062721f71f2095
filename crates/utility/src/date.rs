use std::{error, fmt};

use chrono::{Days, NaiveDate};

/// Wire format of every calendar date in the api, e.g. `2017-08-23`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// The input is not shaped like `YYYY-MM-DD`.
    Format(String),
    /// Shaped correctly, but no such day exists (e.g. `2017-13-40`).
    OutOfRange(String),
}

impl DateParseError {
    pub fn input(&self) -> &str {
        match self {
            Self::Format(input) | Self::OutOfRange(input) => input,
        }
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(input) => write!(
                f,
                "`{}` is not a date in the format YYYY-MM-DD",
                input
            ),
            Self::OutOfRange(input) => {
                write!(f, "`{}` is not a valid calendar date", input)
            }
        }
    }
}

impl error::Error for DateParseError {}

/// Parses a date strictly as `YYYY-MM-DD`.
///
/// Unlike a plain `NaiveDate::parse_from_str`, this rejects unpadded fields
/// (`2017-8-3`), signed or overlong years and surrounding whitespace.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DateParseError::Format(input.to_owned()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DateParseError::OutOfRange(input.to_owned()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `date` minus `days` calendar days, clamped to `NaiveDate::MIN`.
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_dates() {
        assert_eq!(
            parse_date("2017-08-23"),
            Ok(NaiveDate::from_ymd_opt(2017, 8, 23).unwrap())
        );
        assert_eq!(
            parse_date("2016-02-29"),
            Ok(NaiveDate::from_ymd_opt(2016, 2, 29).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "2017-8-23", "2017/08/23", "17-08-23", " 2017-08-23", "+2017-08-2", "start"] {
            assert_eq!(
                parse_date(input),
                Err(DateParseError::Format(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn rejects_impossible_days() {
        assert_eq!(
            parse_date("2017-13-40"),
            Err(DateParseError::OutOfRange("2017-13-40".to_owned()))
        );
        assert!(matches!(
            parse_date("2017-02-29"),
            Err(DateParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn error_message_names_the_input() {
        let why = parse_date("2017-13-40").unwrap_err();
        assert_eq!(why.input(), "2017-13-40");
        assert_eq!(why.to_string(), "`2017-13-40` is not a valid calendar date");
    }

    #[test]
    fn year_before_reference_date() {
        let reference = NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();
        assert_eq!(
            days_before(reference, 365),
            NaiveDate::from_ymd_opt(2016, 8, 23).unwrap()
        );
    }

    #[test]
    fn formats_as_wire_date() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(format_date(&date), "2010-01-01");
    }
}
