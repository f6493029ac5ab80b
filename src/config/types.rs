//! Configuration types for shift pay rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`RuleSet`] the calculator works with.

use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{ClockWindow, ShiftCatalog};
use crate::error::{EngineError, EngineResult};
use crate::models::BonusCategory;

const REFERENCE_RULES_YAML: &str = include_str!("../../config/reference/rules.yaml");
const REFERENCE_SHIFTS_YAML: &str = include_str!("../../config/reference/shifts.yaml");

static REFERENCE_RULE_SET: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::from_yaml(REFERENCE_RULES_YAML, REFERENCE_SHIFTS_YAML, "<reference>")
        .expect("embedded reference rule set is valid")
});

/// Metadata identifying a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// Short identifier (e.g., "reference").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or effective date of the rules.
    pub version: String,
}

/// Bonus multiplier for each [`BonusCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusMultipliers {
    /// Multiplier for [`BonusCategory::Normal`].
    pub normal: Decimal,
    /// Multiplier for [`BonusCategory::Night`].
    pub night: Decimal,
    /// Multiplier for [`BonusCategory::Sunday`].
    pub sunday: Decimal,
    /// Multiplier for [`BonusCategory::NightSunday`].
    pub night_sunday: Decimal,
}

impl BonusMultipliers {
    /// Returns the multiplier for `category`.
    pub fn get(&self, category: BonusCategory) -> Decimal {
        match category {
            BonusCategory::Normal => self.normal,
            BonusCategory::Night => self.night,
            BonusCategory::Sunday => self.sunday,
            BonusCategory::NightSunday => self.night_sunday,
        }
    }
}

impl Default for BonusMultipliers {
    fn default() -> Self {
        Self {
            normal: BonusCategory::Normal.default_multiplier(),
            night: BonusCategory::Night.default_multiplier(),
            sunday: BonusCategory::Sunday.default_multiplier(),
            night_sunday: BonusCategory::NightSunday.default_multiplier(),
        }
    }
}

/// Structure of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// Rule set metadata.
    pub rule_set: RuleSetMetadata,
    /// The night period.
    pub night_period: ClockWindow,
    /// Bonus multipliers.
    pub bonuses: BonusMultipliers,
}

/// Structure of `shifts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// The shift catalog.
    pub shifts: ShiftCatalog,
}

/// A complete, validated set of pay rules.
///
/// The rest day is always Sunday; everything else comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Rule set metadata.
    pub metadata: RuleSetMetadata,
    /// Window of each shift type.
    pub catalog: ShiftCatalog,
    /// The night period.
    pub night_period: ClockWindow,
    /// Bonus multipliers.
    pub bonuses: BonusMultipliers,
}

impl RuleSet {
    /// Builds and validates a rule set from its component parts.
    pub fn new(
        metadata: RuleSetMetadata,
        catalog: ShiftCatalog,
        night_period: ClockWindow,
        bonuses: BonusMultipliers,
    ) -> EngineResult<Self> {
        let rule_set = Self {
            metadata,
            catalog,
            night_period,
            bonuses,
        };
        rule_set.validate()?;
        Ok(rule_set)
    }

    /// The built-in reference rule set, identical to `config/reference`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::config::RuleSet;
    /// use shift_pay_engine::models::BonusCategory;
    /// use rust_decimal::Decimal;
    ///
    /// let rules = RuleSet::reference();
    /// assert_eq!(rules.bonuses.get(BonusCategory::Night), Decimal::new(15, 2));
    /// ```
    pub fn reference() -> &'static RuleSet {
        &REFERENCE_RULE_SET
    }

    /// Parses a rule set from the contents of `rules.yaml` and `shifts.yaml`.
    ///
    /// `source` names where the YAML came from and is used in error messages.
    pub fn from_yaml(rules_yaml: &str, shifts_yaml: &str, source: &str) -> EngineResult<Self> {
        let rules: RulesFile =
            serde_yaml::from_str(rules_yaml).map_err(|e| EngineError::ConfigParseError {
                path: format!("{}/rules.yaml", source),
                message: e.to_string(),
            })?;
        let shifts: ShiftsFile =
            serde_yaml::from_str(shifts_yaml).map_err(|e| EngineError::ConfigParseError {
                path: format!("{}/shifts.yaml", source),
                message: e.to_string(),
            })?;

        Self::new(
            rules.rule_set,
            shifts.shifts,
            rules.night_period,
            rules.bonuses,
        )
    }

    fn validate(&self) -> EngineResult<()> {
        // Windows are measured in whole minutes
        let windows = std::iter::once(("night period".to_string(), &self.night_period)).chain(
            self.catalog
                .iter()
                .map(|(shift_type, window)| (format!("{} shift", shift_type), window)),
        );
        for (label, window) in windows {
            if !is_whole_minute(window.start) || !is_whole_minute(window.end) {
                return Err(EngineError::InvalidRuleSet {
                    message: format!("{} times must be whole minutes", label),
                });
            }
        }

        if self.night_period.start == self.night_period.end {
            return Err(EngineError::InvalidRuleSet {
                message: "night period start and end must differ".to_string(),
            });
        }

        for (shift_type, window) in self.catalog.iter() {
            if window.start == window.end {
                return Err(EngineError::InvalidRuleSet {
                    message: format!("{} shift start and end must differ", shift_type),
                });
            }
        }

        for category in BonusCategory::ALL {
            if self.bonuses.get(category) < Decimal::ZERO {
                return Err(EngineError::InvalidRuleSet {
                    message: format!("{} bonus multiplier must not be negative", category),
                });
            }
        }

        Ok(())
    }
}

fn is_whole_minute(time: NaiveTime) -> bool {
    time.second() == 0 && time.nanosecond() == 0
}
