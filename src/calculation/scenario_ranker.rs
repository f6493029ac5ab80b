//! Scenario ranking by total pay.
//!
//! Scenarios are compared on their total pay rounded to display precision
//! (two decimal places). Scenarios that tie at that precision keep the order
//! they were supplied in, so the first-supplied one ranks higher. Deficits
//! and percentages are measured at the same precision.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{RankingEntry, RankingResult, ScenarioResult};

/// Minimum number of scenarios a ranking needs.
pub const MIN_SCENARIOS: usize = 2;

/// Decimal places used for display and for tie detection.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to display precision, half away from zero.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::display_round;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(display_round(Decimal::from_str("15.7275").unwrap()), Decimal::from_str("15.73").unwrap());
/// assert_eq!(display_round(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn display_round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Ranks computed scenarios from best to worst total pay.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientInput`] when fewer than
/// [`MIN_SCENARIOS`] scenarios are supplied.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::{calculate, rank};
/// use shift_pay_engine::models::ShiftOccurrence;
/// use rust_decimal::Decimal;
///
/// let rate = Decimal::new(20, 0);
/// let weekday = calculate("Weekday", rate, &[ShiftOccurrence::parse("2026-01-14", "MORNING").unwrap()]).unwrap();
/// let sunday = calculate("Sunday", rate, &[ShiftOccurrence::parse("2026-01-18", "AFTERNOON").unwrap()]).unwrap();
///
/// let ranking = rank(&[weekday, sunday]).unwrap();
/// assert_eq!(ranking.best().name, "Sunday");
/// assert_eq!(ranking.entries()[1].deficit, Decimal::new(45, 0));
/// ```
pub fn rank(scenarios: &[ScenarioResult]) -> EngineResult<RankingResult> {
    if scenarios.len() < MIN_SCENARIOS {
        return Err(EngineError::InsufficientInput {
            required: MIN_SCENARIOS,
            supplied: scenarios.len(),
        });
    }

    // `sort_by` is stable: equal keys keep their input order.
    let mut ordered: Vec<&ScenarioResult> = scenarios.iter().collect();
    ordered.sort_by(|a, b| display_round(b.total_pay).cmp(&display_round(a.total_pay)));

    let best = ordered[0];
    let best_pay = display_round(best.total_pay);

    // Deficits use display precision so they agree with the ordering.
    let entries: Vec<RankingEntry> = ordered
        .iter()
        .enumerate()
        .map(|(index, scenario)| {
            let deficit = best_pay - display_round(scenario.total_pay);
            let percentage = if best_pay > Decimal::ZERO {
                deficit / best_pay * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };

            RankingEntry {
                rank: index + 1,
                name: scenario.name.clone(),
                total_hours: scenario.total_hours,
                total_bonus: scenario.total_bonus,
                total_pay: scenario.total_pay,
                deficit,
                percentage,
            }
        })
        .collect();

    debug!(
        scenarios = entries.len(),
        best = %best.name,
        best_pay = %best.total_pay,
        "Ranked scenarios"
    );

    Ok(RankingResult::new(entries))
}
