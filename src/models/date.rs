//! Calendar date parsing for request payloads.
//!
//! Dates travel as `YYYY-MM-DD` strings in both directions. Serialization uses
//! `NaiveDate`'s own format; parsing is stricter than chrono's and only accepts
//! a four-digit year with two-digit month and day.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(format!("time data '{}' does not match format '{}'", value, DATE_FORMAT));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{}': {}", value, e))
}

/// `deserialize_with` helper for required date fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            parse_date("2024-01-10"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_loose_formats() {
        for raw in ["2024-1-10", "24-01-10", "2024/01/10", "20240110", "+2024-01-10", " 2024-01-10", ""] {
            assert!(parse_date(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2023-13-01").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_serialized_form_matches_parsed_form() {
        let date = parse_date("1999-12-31").unwrap();
        assert_eq!(serde_json::to_value(date).unwrap(), "1999-12-31");
    }

    #[test]
    fn test_deserialize_helper() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(deserialize_with = "crate::models::date::deserialize")]
            day: NaiveDate,
        }

        let ok: Payload = serde_json::from_str(r#"{"day": "2024-01-01"}"#).unwrap();
        assert_eq!(ok.day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert!(serde_json::from_str::<Payload>(r#"{"day": "01/01/2024"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"day": 20240101}"#).is_err());
    }
}
