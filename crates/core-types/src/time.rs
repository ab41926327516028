use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts seen in broker exports, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d"];

/// Parses a trade timestamp into a naive (exchange-local) date-time.
///
/// RFC 3339 values are normalized to UTC. A bare date resolves to midnight.
/// Anything unrecognized is reported as a `CoreError::Parse` naming `field`;
/// there is no fallback to the epoch or the current time.
pub fn parse_timestamp(field: &str, value: &str) -> Result<NaiveDateTime, CoreError> {
    let raw = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt);
            }
        }
    }

    Err(CoreError::Parse {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parses_bare_date_as_midnight() {
        let dt = parse_timestamp("closeTime", "2024-01-02").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 2));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parses_broker_dotted_format() {
        let dt = parse_timestamp("closeTime", "2024.03.15 14:30:05").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour(), dt.second()), (3, 15, 14, 5));
    }

    #[test]
    fn test_rfc3339_is_normalized_to_utc() {
        let dt = parse_timestamp("closeTime", "2024-01-02T10:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = parse_timestamp("closeTime", "yesterday").unwrap_err();
        assert_eq!(
            err,
            CoreError::Parse {
                field: "closeTime".to_string(),
                value: "yesterday".to_string()
            }
        );
        assert!(parse_timestamp("closeTime", "").is_err());
        assert!(parse_timestamp("closeTime", "2024-13-01").is_err());
    }
}
