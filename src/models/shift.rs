//! Shift model and related types.
//!
//! This module defines the closed set of shift types and the
//! [`ShiftOccurrence`] value that pairs one of them with a calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of shift worked.
///
/// The set is closed: adding a shift type is a schema change that also
/// requires a window in every rule set's shift catalog. Serialized as its
/// upper-case tag; deserialized through [`FromStr`], so any casing is accepted.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::ShiftType;
///
/// let shift_type: ShiftType = "night".parse().unwrap();
/// assert_eq!(shift_type, ShiftType::Night);
/// assert_eq!(shift_type.to_string(), "NIGHT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShiftType {
    /// Early shift.
    Morning,
    /// Late shift.
    Afternoon,
    /// Overnight shift, ends on the following calendar day.
    Night,
}

impl ShiftType {
    /// Every shift type, in catalog order.
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Night];

    /// Returns the wire tag for this shift type.
    pub fn tag(&self) -> &'static str {
        match self {
            ShiftType::Morning => "MORNING",
            ShiftType::Afternoon => "AFTERNOON",
            ShiftType::Night => "NIGHT",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShiftType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ShiftType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "shift_type",
                    format!(
                        "unrecognized shift type '{}' (expected MORNING, AFTERNOON or NIGHT)",
                        tag
                    ),
                )
            })
    }
}

impl TryFrom<String> for ShiftType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShiftType> for String {
    fn from(shift_type: ShiftType) -> Self {
        shift_type.tag().to_string()
    }
}

/// One worked shift: a civil date and the type of shift started on it.
///
/// Shifts crossing midnight belong to the date they start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftOccurrence {
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// The type of shift.
    pub shift_type: ShiftType,
}

impl ShiftOccurrence {
    /// Creates a new shift occurrence.
    pub fn new(date: NaiveDate, shift_type: ShiftType) -> Self {
        Self { date, shift_type }
    }

    /// Parses an ISO-8601 date (`YYYY-MM-DD`) and a shift type tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pay_engine::models::{ShiftOccurrence, ShiftType};
    ///
    /// let occurrence = ShiftOccurrence::parse("2026-01-17", "NIGHT").unwrap();
    /// assert_eq!(occurrence.shift_type, ShiftType::Night);
    ///
    /// assert!(ShiftOccurrence::parse("17/01/2026", "NIGHT").is_err());
    /// ```
    pub fn parse(date: &str, shift_type: &str) -> EngineResult<Self> {
        let parsed_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
            EngineError::invalid_input(
                "date",
                format!("'{}' is not an ISO-8601 calendar date: {}", date, e),
            )
        })?;
        let parsed_type = shift_type.parse::<ShiftType>()?;
        Ok(Self::new(parsed_date, parsed_type))
    }

    /// Returns the day of the week the shift starts on.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the English name of the starting weekday (e.g. "Monday").
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_shift_type_parses_case_insensitively() {
        assert_eq!("MORNING".parse::<ShiftType>().unwrap(), ShiftType::Morning);
        assert_eq!("afternoon".parse::<ShiftType>().unwrap(), ShiftType::Afternoon);
        assert_eq!(" Night ".parse::<ShiftType>().unwrap(), ShiftType::Night);
    }

    #[test]
    fn test_unknown_shift_type_is_invalid_input() {
        let err = "EVENING".parse::<ShiftType>().unwrap_err();
        match err {
            EngineError::InvalidInput { field, message } => {
                assert_eq!(field, "shift_type");
                assert!(message.contains("EVENING"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_shift_type_serialization_uses_tags() {
        let json = serde_json::to_string(&ShiftType::Afternoon).unwrap();
        assert_eq!(json, "\"AFTERNOON\"");

        let deserialized: ShiftType = serde_json::from_str("\"NIGHT\"").unwrap();
        assert_eq!(deserialized, ShiftType::Night);
    }

    #[test]
    fn test_shift_type_deserialization_matches_from_str() {
        for raw in ["night", " Night ", "NIGHT"] {
            let json = serde_json::to_string(raw).unwrap();
            let deserialized: ShiftType = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, raw.parse::<ShiftType>().unwrap());
        }

        let err = serde_json::from_str::<ShiftType>("\"EVENING\"").unwrap_err();
        assert!(err.to_string().contains("EVENING"));
    }

    #[test]
    fn test_parse_occurrence() {
        let occurrence = ShiftOccurrence::parse("2026-01-12", "MORNING").unwrap();
        assert_eq!(occurrence.date, make_date("2026-01-12"));
        assert_eq!(occurrence.shift_type, ShiftType::Morning);
    }

    #[test]
    fn test_parse_occurrence_rejects_malformed_date() {
        let err = ShiftOccurrence::parse("2026-02-30", "MORNING").unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "date"));
    }

    #[test]
    fn test_parse_occurrence_rejects_unknown_tag() {
        let err = ShiftOccurrence::parse("2026-01-12", "DAY").unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "shift_type"));
    }

    #[test]
    fn test_day_of_week_and_name() {
        // 2026-01-17 is a Saturday
        let occurrence = ShiftOccurrence::new(make_date("2026-01-17"), ShiftType::Night);
        assert_eq!(occurrence.day_of_week(), Weekday::Sat);
        assert_eq!(occurrence.day_name(), "Saturday");

        // 2026-01-18 is a Sunday
        let sunday = ShiftOccurrence::new(make_date("2026-01-18"), ShiftType::Morning);
        assert_eq!(sunday.day_of_week(), Weekday::Sun);
        assert_eq!(sunday.day_name(), "Sunday");
    }

    #[test]
    fn test_occurrence_deserialization() {
        let json = r#"{ "date": "2026-01-15", "shift_type": "AFTERNOON" }"#;
        let occurrence: ShiftOccurrence = serde_json::from_str(json).unwrap();
        assert_eq!(occurrence.date, make_date("2026-01-15"));
        assert_eq!(occurrence.shift_type, ShiftType::Afternoon);

        let lower = r#"{ "date": "2026-01-15", "shift_type": "morning" }"#;
        let occurrence: ShiftOccurrence = serde_json::from_str(lower).unwrap();
        assert_eq!(occurrence.shift_type, ShiftType::Morning);
    }
}
