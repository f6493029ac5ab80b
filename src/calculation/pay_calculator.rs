//! Pay calculation for single shifts and whole scenarios.
//!
//! A shift's pay is its duration times the hourly rate, plus a bonus equal
//! to that base pay times the multiplier of its single bonus category.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RuleSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BonusCategory, Breakdown, DayResult, ScenarioInput, ScenarioResult, ShiftOccurrence,
};

use super::{is_night_shift, is_rest_day};

/// Determines the bonus category of a shift occurrence.
///
/// Night-ness comes from the shift type's window and rest-day-ness from the
/// start date, so a Saturday night shift is [`BonusCategory::Night`] even
/// though most of it is worked on Sunday.
pub fn classify(occurrence: &ShiftOccurrence, rules: &RuleSet) -> BonusCategory {
    BonusCategory::from_flags(
        is_night_shift(occurrence.shift_type, rules),
        is_rest_day(occurrence.date),
    )
}

/// Computes the pay of one shift occurrence.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `hourly_rate` when the pay does
/// not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::compute_day;
/// use shift_pay_engine::config::RuleSet;
/// use shift_pay_engine::models::{BonusCategory, ShiftOccurrence};
/// use rust_decimal::Decimal;
///
/// // Saturday night into Sunday morning, classified by its start date
/// let occurrence = ShiftOccurrence::parse("2026-01-17", "NIGHT").unwrap();
/// let day = compute_day(&occurrence, Decimal::new(15, 0), RuleSet::reference()).unwrap();
///
/// assert_eq!(day.category, BonusCategory::Night);
/// assert_eq!(day.base_pay, Decimal::new(135, 0));
/// assert_eq!(day.bonus_amount, Decimal::new(2025, 2)); // 20.25
/// assert_eq!(day.pay(), Decimal::new(15525, 2)); // 155.25
/// ```
pub fn compute_day(
    occurrence: &ShiftOccurrence,
    hourly_rate: Decimal,
    rules: &RuleSet,
) -> EngineResult<DayResult> {
    let hours = rules.catalog.window(occurrence.shift_type).duration_hours();
    let category = classify(occurrence, rules);

    let base_pay = hours.checked_mul(hourly_rate).ok_or_else(rate_too_large)?;
    let bonus_amount = base_pay
        .checked_mul(rules.bonuses.get(category))
        .ok_or_else(rate_too_large)?;
    // DayResult::pay adds these two unchecked
    base_pay.checked_add(bonus_amount).ok_or_else(rate_too_large)?;

    Ok(DayResult {
        date: occurrence.date,
        day_name: occurrence.day_name(),
        shift_type: occurrence.shift_type,
        hours,
        base_pay,
        bonus_amount,
        category,
    })
}

fn rate_too_large() -> EngineError {
    EngineError::invalid_input("hourly_rate", "too large to compute pay")
}

/// Computes a full scenario.
///
/// Day results keep the order of `shifts`; nothing is sorted or merged, and
/// several shifts on the same date are simply added up.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `hourly_rate` is not strictly
/// positive or `shifts` is empty. Also when the totals overflow a
/// [`Decimal`], reported against `hourly_rate`.
pub fn compute_scenario(
    name: &str,
    hourly_rate: Decimal,
    shifts: &[ShiftOccurrence],
    rules: &RuleSet,
) -> EngineResult<ScenarioResult> {
    if hourly_rate <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "hourly_rate",
            format!("must be greater than zero, got {}", hourly_rate),
        ));
    }
    if shifts.is_empty() {
        return Err(EngineError::invalid_input(
            "shifts",
            "at least one shift is required",
        ));
    }

    let days: Vec<DayResult> = shifts
        .iter()
        .map(|occurrence| compute_day(occurrence, hourly_rate, rules))
        .collect::<EngineResult<_>>()?;

    let mut breakdown = Breakdown::default();
    let mut total_hours = Decimal::ZERO;
    let mut total_bonus = Decimal::ZERO;
    let mut total_pay = Decimal::ZERO;

    for day in &days {
        breakdown.add(day.category, day.hours);
        total_hours += day.hours;
        total_bonus = total_bonus
            .checked_add(day.bonus_amount)
            .ok_or_else(rate_too_large)?;
        total_pay = total_pay.checked_add(day.pay()).ok_or_else(rate_too_large)?;
    }

    debug!(
        scenario = %name,
        shifts = days.len(),
        total_hours = %total_hours,
        total_pay = %total_pay,
        "Computed scenario"
    );

    Ok(ScenarioResult {
        name: name.to_string(),
        hourly_rate,
        days,
        breakdown,
        total_hours,
        total_bonus,
        total_pay,
    })
}

/// Computes a scenario from its input triple.
pub fn compute_input(input: &ScenarioInput, rules: &RuleSet) -> EngineResult<ScenarioResult> {
    compute_scenario(&input.name, input.hourly_rate, &input.shifts, rules)
}

/// Computes a scenario under the reference rule set.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::calculate;
/// use shift_pay_engine::models::ShiftOccurrence;
/// use rust_decimal::Decimal;
///
/// // 2026-01-12 is a Monday
/// let shifts = vec![ShiftOccurrence::parse("2026-01-12", "MORNING").unwrap()];
/// let result = calculate("Monday morning", Decimal::new(15, 0), &shifts).unwrap();
///
/// assert_eq!(result.total_pay, Decimal::new(135, 0));
/// assert_eq!(result.total_bonus, Decimal::ZERO);
/// ```
pub fn calculate(
    name: &str,
    hourly_rate: Decimal,
    shifts: &[ShiftOccurrence],
) -> EngineResult<ScenarioResult> {
    compute_scenario(name, hourly_rate, shifts, RuleSet::reference())
}
