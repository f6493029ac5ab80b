//! Property tests for scenario calculation and ranking.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shift_pay_engine::calculation::{calculate, display_round, rank};
use shift_pay_engine::config::RuleSet;
use shift_pay_engine::models::{BonusCategory, ScenarioResult, ShiftOccurrence, ShiftType};

// =============================================================================
// Strategies
// =============================================================================

fn shift_type() -> impl Strategy<Value = ShiftType> {
    prop_oneof![
        Just(ShiftType::Morning),
        Just(ShiftType::Afternoon),
        Just(ShiftType::Night),
    ]
}

fn occurrence() -> impl Strategy<Value = ShiftOccurrence> {
    // Any day in roughly a decade starting 2020-01-01
    (0u64..3650, shift_type()).prop_map(|(offset, shift_type)| {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        ShiftOccurrence::new(base + Days::new(offset), shift_type)
    })
}

/// Positive hourly rates in cents, from 0.01 to 200.00.
fn hourly_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=20_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn scenario() -> impl Strategy<Value = ScenarioResult> {
    (hourly_rate(), prop::collection::vec(occurrence(), 1..30))
        .prop_map(|(rate, shifts)| calculate("Generated", rate, &shifts).unwrap())
}

// =============================================================================
// Scenario properties
// =============================================================================

proptest! {
    #[test]
    fn prop_totals_are_consistent(
        rate in hourly_rate(),
        shifts in prop::collection::vec(occurrence(), 1..30),
    ) {
        let result = calculate("Generated", rate, &shifts).unwrap();

        prop_assert_eq!(result.total_hours * rate + result.total_bonus, result.total_pay);

        let bonus_sum: Decimal = result.days.iter().map(|d| d.bonus_amount).sum();
        prop_assert_eq!(bonus_sum, result.total_bonus);

        let pay_sum: Decimal = result.days.iter().map(|d| d.pay()).sum();
        prop_assert_eq!(pay_sum, result.total_pay);

        prop_assert_eq!(result.breakdown.total(), result.total_hours);
    }

    #[test]
    fn prop_each_day_has_one_category(
        rate in hourly_rate(),
        shifts in prop::collection::vec(occurrence(), 1..30),
    ) {
        let result = calculate("Generated", rate, &shifts).unwrap();
        prop_assert_eq!(result.days.len(), shifts.len());

        for category in BonusCategory::ALL {
            let hours: Decimal = result
                .days
                .iter()
                .filter(|d| d.category == category)
                .map(|d| d.hours)
                .sum();
            prop_assert_eq!(hours, result.breakdown.hours(category));
        }

        for (day, shift) in result.days.iter().zip(&shifts) {
            prop_assert_eq!(day.date, shift.date);
            prop_assert_eq!(day.shift_type, shift.shift_type);
            let multiplier = RuleSet::reference().bonuses.get(day.category);
            prop_assert_eq!(day.bonus_amount, day.base_pay * multiplier);
        }
    }

    #[test]
    fn prop_calculation_is_deterministic(
        rate in hourly_rate(),
        shifts in prop::collection::vec(occurrence(), 1..30),
    ) {
        let first = calculate("Generated", rate, &shifts).unwrap();
        let second = calculate("Generated", rate, &shifts).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_positive_rate_is_rejected(
        cents in -20_000i64..=0,
        shifts in prop::collection::vec(occurrence(), 1..5),
    ) {
        prop_assert!(calculate("Generated", Decimal::new(cents, 2), &shifts).is_err());
    }
}

// =============================================================================
// Ranking properties
// =============================================================================

proptest! {
    #[test]
    fn prop_ranking_is_total_and_ordered(
        scenarios in prop::collection::vec(scenario(), 2..8),
    ) {
        let ranking = rank(&scenarios).unwrap();
        let entries = ranking.entries();

        prop_assert_eq!(entries.len(), scenarios.len());
        for (index, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.rank, index + 1);
            prop_assert!(entry.deficit >= Decimal::ZERO);
        }

        prop_assert_eq!(entries[0].deficit, Decimal::ZERO);
        prop_assert_eq!(entries[0].percentage, Decimal::ZERO);

        for pair in entries.windows(2) {
            prop_assert!(display_round(pair[0].total_pay) >= display_round(pair[1].total_pay));
            prop_assert!(pair[0].deficit <= pair[1].deficit);
        }
    }

    #[test]
    fn prop_equal_pay_keeps_input_order(
        first in scenario(),
        others in prop::collection::vec(scenario(), 1..5),
    ) {
        let mut original = first.clone();
        original.name = "Original".to_string();
        let mut duplicate = first;
        duplicate.name = "Duplicate".to_string();

        let mut scenarios = vec![original];
        scenarios.extend(others);
        scenarios.push(duplicate);

        let ranking = rank(&scenarios).unwrap();
        let names: Vec<&str> = ranking.entries().iter().map(|e| e.name.as_str()).collect();
        let original_at = names.iter().position(|n| *n == "Original").unwrap();
        let duplicate_at = names.iter().position(|n| *n == "Duplicate").unwrap();
        prop_assert!(original_at < duplicate_at);
        prop_assert_eq!(ranking.entries()[duplicate_at].deficit, ranking.entries()[original_at].deficit);
    }
}
