use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::models::CatalogRecord;

/// Format of the `date_added` column after upstream cleaning.
pub const DATE_ADDED_FORMAT: &str = "%d/%m/%Y";

/// What to do with a `date_added` value that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Fail the whole view on the first malformed date.
    #[default]
    Strict,
    /// Drop rows with malformed dates and keep going.
    #[value(name = "skip")]
    #[serde(rename = "skip")]
    SkipMalformed,
}

impl DatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePolicy::Strict => "strict",
            DatePolicy::SkipMalformed => "skip",
        }
    }
}

/// Parse a `DD/MM/YYYY` string.  Surrounding whitespace is ignored.
///
/// Returns `None` for empty strings and anything that is not a valid
/// calendar date in that layout.
pub fn parse_date_added(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_ADDED_FORMAT).ok()
}

/// Year the record was added to the catalog.
///
/// Fails with [`CatalogError::MalformedDate`] when `date_added` does not parse.
pub fn year_added(record: &CatalogRecord) -> Result<i32> {
    parse_date_added(&record.date_added)
        .map(|d| d.year())
        .ok_or_else(|| CatalogError::MalformedDate {
            record_id: record.show_id.clone(),
            value: record.date_added.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_month_year() {
        let d = parse_date_added("15/06/2018").unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (15, 6, 2018));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date_added("  01/05/2018 ").is_some());
    }

    #[test]
    fn test_parse_rejects_month_first() {
        // 25 is not a valid month.
        assert!(parse_date_added("06/25/2018").is_none());
    }

    #[test]
    fn test_parse_rejects_iso_and_empty() {
        assert!(parse_date_added("2018-06-15").is_none());
        assert!(parse_date_added("").is_none());
        assert!(parse_date_added("September 25, 2021").is_none());
    }

    #[test]
    fn test_year_added_ok() {
        let record = CatalogRecord::new("s1", "Movie").with_date_added("25/09/2021");
        assert_eq!(year_added(&record).unwrap(), 2021);
    }

    #[test]
    fn test_year_added_malformed_carries_context() {
        let record = CatalogRecord::new("s9", "TV Show").with_date_added("not a date");
        match year_added(&record) {
            Err(CatalogError::MalformedDate { record_id, value }) => {
                assert_eq!(record_id, "s9");
                assert_eq!(value, "not a date");
            }
            other => panic!("expected MalformedDate, got {other:?}"),
        }
    }

    #[test]
    fn test_date_policy_default_is_strict() {
        assert_eq!(DatePolicy::default(), DatePolicy::Strict);
        assert_eq!(DatePolicy::SkipMalformed.as_str(), "skip");
    }

    #[test]
    fn test_date_policy_serde_names() {
        let json = serde_json::to_string(&DatePolicy::SkipMalformed).unwrap();
        assert_eq!(json, "\"skip\"");
        let back: DatePolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(back, DatePolicy::Strict);
    }
}
