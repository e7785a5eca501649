//! Validated contribution data input
//!
//! The data file is a single JSON object mapping ISO dates to counts:
//!
//! ```json
//! { "2024-01-01": 3, "2024-06-15": 12 }
//! ```
//!
//! Parsing is the only fallible stage of the pipeline; once a
//! [`ContributionRecord`] exists, layout and rendering cannot fail.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while reading or validating the data file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object mapping dates to counts")]
    NotAnObject,

    #[error("invalid date key '{key}': expected YYYY-MM-DD")]
    InvalidDate { key: String },

    #[error("invalid count for '{key}': expected a non-negative integer, got {value}")]
    InvalidCount { key: String, value: String },
}

/// A sparse map of date to contribution count
///
/// Dates absent from the record have an implicit count of 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionRecord {
    counts: BTreeMap<NaiveDate, u32>,
}

impl ContributionRecord {
    /// Parse and validate a JSON object string
    pub fn from_json_str(source: &str) -> Result<Self, InputError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let object = value.as_object().ok_or(InputError::NotAnObject)?;

        let mut counts = BTreeMap::new();
        for (key, value) in object {
            let date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
                .map_err(|_| InputError::InvalidDate { key: key.clone() })?;
            let count = value
                .as_u64()
                .and_then(|c| u32::try_from(c).ok())
                .ok_or_else(|| InputError::InvalidCount {
                    key: key.clone(),
                    value: value.to_string(),
                })?;
            counts.insert(date, count);
        }

        Ok(Self { counts })
    }

    /// Read and parse a record from any reader
    pub fn from_reader(mut reader: impl Read) -> Result<Self, InputError> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        Self::from_json_str(&buffer)
    }

    /// Read and parse a record from a file on disk
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Count for a date, 0 if absent
    pub fn get(&self, date: NaiveDate) -> u32 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    /// Number of dates with an explicit entry
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate explicit entries in date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }
}

impl FromIterator<(NaiveDate, u32)> for ContributionRecord {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_object() {
        let record =
            ContributionRecord::from_json_str(r#"{"2024-01-01": 3, "2024-06-15": 12}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get(date(2024, 1, 1)), 3);
        assert_eq!(record.get(date(2024, 6, 15)), 12);
    }

    #[test]
    fn test_missing_dates_default_to_zero() {
        let record = ContributionRecord::from_json_str("{}").unwrap();
        assert!(record.is_empty());
        assert_eq!(record.get(date(2024, 2, 2)), 0);
    }

    #[test]
    fn test_malformed_json() {
        let result = ContributionRecord::from_json_str("{not json");
        assert!(matches!(result, Err(InputError::Json(_))));
    }

    #[test]
    fn test_not_an_object() {
        let result = ContributionRecord::from_json_str("[1, 2, 3]");
        assert!(matches!(result, Err(InputError::NotAnObject)));
    }

    #[test]
    fn test_invalid_date_key() {
        let result = ContributionRecord::from_json_str(r#"{"not-a-date": 1}"#);
        assert!(matches!(result, Err(InputError::InvalidDate { .. })));
    }

    #[test]
    fn test_negative_count_rejected() {
        let result = ContributionRecord::from_json_str(r#"{"2024-01-01": -1}"#);
        assert!(matches!(result, Err(InputError::InvalidCount { .. })));
    }

    #[test]
    fn test_non_integer_count_rejected() {
        let result = ContributionRecord::from_json_str(r#"{"2024-01-01": 1.5}"#);
        assert!(matches!(result, Err(InputError::InvalidCount { .. })));

        let result = ContributionRecord::from_json_str(r#"{"2024-01-01": "3"}"#);
        assert!(matches!(result, Err(InputError::InvalidCount { .. })));
    }

    #[test]
    fn test_from_reader() {
        let data = r#"{"2023-05-05": 2}"#.as_bytes();
        let record = ContributionRecord::from_reader(data).unwrap();
        assert_eq!(record.get(date(2023, 5, 5)), 2);
    }

    #[test]
    fn test_iter_in_date_order() {
        let record =
            ContributionRecord::from_json_str(r#"{"2024-12-01": 1, "2024-01-01": 2}"#).unwrap();
        let dates: Vec<_> = record.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 12, 1)]);
    }
}
