//! Bonus categories applied to worked shifts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The exclusive pay-bonus classification of a shift occurrence.
///
/// Exactly one category applies to each shift. The combined category is
/// selected when a night shift starts on the rest day, so the two bonuses
/// never stack as separate categories.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::BonusCategory;
/// use rust_decimal::Decimal;
///
/// let category = BonusCategory::from_flags(true, true);
/// assert_eq!(category, BonusCategory::NightSunday);
/// assert_eq!(category.default_multiplier(), Decimal::new(40, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusCategory {
    /// No bonus.
    Normal,
    /// Night shift on a regular day (+15%).
    Night,
    /// Day shift on the rest day (+25%).
    Sunday,
    /// Night shift starting on the rest day (+40%).
    NightSunday,
}

impl BonusCategory {
    /// Every category, in breakdown order.
    pub const ALL: [BonusCategory; 4] = [
        BonusCategory::Normal,
        BonusCategory::Night,
        BonusCategory::Sunday,
        BonusCategory::NightSunday,
    ];

    /// Selects the category for a shift.
    ///
    /// Precedence: both flags, night only, rest day only, neither.
    pub fn from_flags(is_night: bool, is_rest_day: bool) -> Self {
        match (is_night, is_rest_day) {
            (true, true) => BonusCategory::NightSunday,
            (true, false) => BonusCategory::Night,
            (false, true) => BonusCategory::Sunday,
            (false, false) => BonusCategory::Normal,
        }
    }

    /// The multiplier this category carries in the reference rule set.
    ///
    /// Only used for the `Default` of [`crate::config::BonusMultipliers`]; pay is
    /// always computed from the active rule set's multipliers.
    pub fn default_multiplier(&self) -> Decimal {
        match self {
            BonusCategory::Normal => Decimal::ZERO,
            BonusCategory::Night => Decimal::new(15, 2),
            BonusCategory::Sunday => Decimal::new(25, 2),
            BonusCategory::NightSunday => Decimal::new(40, 2),
        }
    }

    /// Returns the wire tag for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            BonusCategory::Normal => "NORMAL",
            BonusCategory::Night => "NIGHT",
            BonusCategory::Sunday => "SUNDAY",
            BonusCategory::NightSunday => "NIGHT_SUNDAY",
        }
    }
}

impl fmt::Display for BonusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_category_precedence() {
        assert_eq!(BonusCategory::from_flags(true, true), BonusCategory::NightSunday);
        assert_eq!(BonusCategory::from_flags(true, false), BonusCategory::Night);
        assert_eq!(BonusCategory::from_flags(false, true), BonusCategory::Sunday);
        assert_eq!(BonusCategory::from_flags(false, false), BonusCategory::Normal);
    }

    #[test]
    fn test_reference_multipliers() {
        assert_eq!(BonusCategory::Normal.default_multiplier(), dec("0"));
        assert_eq!(BonusCategory::Night.default_multiplier(), dec("0.15"));
        assert_eq!(BonusCategory::Sunday.default_multiplier(), dec("0.25"));
        assert_eq!(BonusCategory::NightSunday.default_multiplier(), dec("0.40"));
    }

    #[test]
    fn test_combined_multiplier_is_sum_of_parts() {
        assert_eq!(
            BonusCategory::NightSunday.default_multiplier(),
            BonusCategory::Night.default_multiplier() + BonusCategory::Sunday.default_multiplier()
        );
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&BonusCategory::NightSunday).unwrap();
        assert_eq!(json, "\"NIGHT_SUNDAY\"");

        let deserialized: BonusCategory = serde_json::from_str("\"SUNDAY\"").unwrap();
        assert_eq!(deserialized, BonusCategory::Sunday);
    }

    #[test]
    fn test_display_matches_serialized_tag() {
        for category in BonusCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
