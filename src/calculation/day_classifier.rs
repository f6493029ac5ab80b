//! Day classification: rest-day detection and night-shift detection.
//!
//! Both checks are anchored to the date and time a shift *starts*. A night
//! shift that starts on Saturday and runs into Sunday is classified as a
//! Saturday shift.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::ShiftType;

use super::ClockWindow;

/// The designated rest day.
pub const REST_DAY: Weekday = Weekday::Sun;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns true when `date` falls on the rest day.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::is_rest_day;
/// use chrono::NaiveDate;
///
/// // 2026-01-18 is a Sunday
/// assert!(is_rest_day(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
/// // 2026-01-17 is a Saturday
/// assert!(!is_rest_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// ```
pub fn is_rest_day(date: NaiveDate) -> bool {
    date.weekday() == REST_DAY
}

/// Minutes of `window` that fall inside `night_period`.
///
/// Both windows may wrap past midnight. The night period recurs every day,
/// so the occurrences starting the day before, the same day and the day
/// after the shift's start are all considered.
pub fn night_overlap_minutes(window: &ClockWindow, night_period: &ClockWindow) -> i64 {
    let (shift_start, shift_end) = window.minute_span();
    let (night_start, night_end) = night_period.minute_span();

    (-1..=1)
        .map(|day| {
            let offset = day * MINUTES_PER_DAY;
            let overlap_start = shift_start.max(night_start + offset);
            let overlap_end = shift_end.min(night_end + offset);
            (overlap_end - overlap_start).max(0)
        })
        .sum()
}

/// Hours of `window` that fall inside `night_period`.
pub fn night_overlap_hours(window: &ClockWindow, night_period: &ClockWindow) -> Decimal {
    Decimal::new(night_overlap_minutes(window, night_period), 0) / Decimal::new(60, 0)
}

/// Returns true when more than half of `window` overlaps `night_period`.
///
/// A late shift that merely brushes the start of the night period is not a
/// night shift.
pub fn is_night_window(window: &ClockWindow, night_period: &ClockWindow) -> bool {
    night_overlap_minutes(window, night_period) * 2 > window.duration_minutes()
}

/// Returns true when `shift_type` is a night shift under `rules`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::is_night_shift;
/// use shift_pay_engine::config::RuleSet;
/// use shift_pay_engine::models::ShiftType;
///
/// let rules = RuleSet::reference();
/// assert!(is_night_shift(ShiftType::Night, rules));
/// assert!(!is_night_shift(ShiftType::Afternoon, rules));
/// ```
pub fn is_night_shift(shift_type: ShiftType, rules: &RuleSet) -> bool {
    is_night_window(rules.catalog.window(shift_type), &rules.night_period)
}
