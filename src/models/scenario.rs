//! Scenario input and calculation result models.
//!
//! A scenario is a named, rated sequence of shifts. This module holds the
//! input triple ([`ScenarioInput`]) and everything the pay calculator derives
//! from it: one [`DayResult`] per shift, the per-category [`Breakdown`], and
//! the aggregated [`ScenarioResult`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BonusCategory, ShiftOccurrence, ShiftType};

/// The input triple a scenario result is computed from.
///
/// Two inputs that compare equal always produce identical results, so the
/// input itself serves as the scenario fingerprint for caching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Display name of the scenario.
    pub name: String,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Shifts in entry order.
    pub shifts: Vec<ShiftOccurrence>,
}

impl ScenarioInput {
    /// Creates a new scenario input.
    pub fn new(name: impl Into<String>, hourly_rate: Decimal, shifts: Vec<ShiftOccurrence>) -> Self {
        Self {
            name: name.into(),
            hourly_rate,
            shifts,
        }
    }
}

/// The pay outcome of a single shift occurrence.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{BonusCategory, DayResult, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = DayResult {
///     date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     day_name: "Sunday".to_string(),
///     shift_type: ShiftType::Afternoon,
///     hours: Decimal::new(9, 0),
///     base_pay: Decimal::new(180, 0),
///     bonus_amount: Decimal::new(45, 0),
///     category: BonusCategory::Sunday,
/// };
/// assert_eq!(day.pay(), Decimal::new(225, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// English weekday name of `date`.
    pub day_name: String,
    /// The type of shift worked.
    pub shift_type: ShiftType,
    /// Hours worked.
    pub hours: Decimal,
    /// Hours multiplied by the hourly rate.
    pub base_pay: Decimal,
    /// Bonus on top of the base pay.
    pub bonus_amount: Decimal,
    /// The single bonus category applied to this shift.
    pub category: BonusCategory,
}

impl DayResult {
    /// Total pay for the shift: base pay plus bonus.
    pub fn pay(&self) -> Decimal {
        self.base_pay + self.bonus_amount
    }
}

/// Hours subtotal per bonus category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Hours paid without bonus.
    pub normal: Decimal,
    /// Hours paid with the night bonus.
    pub night: Decimal,
    /// Hours paid with the rest-day bonus.
    pub sunday: Decimal,
    /// Hours paid with the combined night and rest-day bonus.
    pub night_sunday: Decimal,
}

impl Breakdown {
    /// Adds hours to the subtotal of `category`.
    pub fn add(&mut self, category: BonusCategory, hours: Decimal) {
        match category {
            BonusCategory::Normal => self.normal += hours,
            BonusCategory::Night => self.night += hours,
            BonusCategory::Sunday => self.sunday += hours,
            BonusCategory::NightSunday => self.night_sunday += hours,
        }
    }

    /// Returns the subtotal for `category`.
    pub fn hours(&self, category: BonusCategory) -> Decimal {
        match category {
            BonusCategory::Normal => self.normal,
            BonusCategory::Night => self.night,
            BonusCategory::Sunday => self.sunday,
            BonusCategory::NightSunday => self.night_sunday,
        }
    }

    /// Sum of all subtotals.
    pub fn total(&self) -> Decimal {
        self.normal + self.night + self.sunday + self.night_sunday
    }
}

/// The complete result of calculating one scenario.
///
/// Produced by [`crate::calculation::compute_scenario`]; it
/// contains no timestamps or generated identifiers, so recomputing the same
/// input yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name.
    pub name: String,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// One result per shift, in input order.
    pub days: Vec<DayResult>,
    /// Hours per bonus category.
    pub breakdown: Breakdown,
    /// Total hours worked.
    pub total_hours: Decimal,
    /// Sum of all bonus amounts.
    pub total_bonus: Decimal,
    /// Sum of all per-day pay.
    pub total_pay: Decimal,
}

impl ScenarioResult {
    /// Sum of all base pay (total pay without bonuses).
    pub fn total_base_pay(&self) -> Decimal {
        self.total_pay - self.total_bonus
    }

    /// Number of shifts in the scenario.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}
