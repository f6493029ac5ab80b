//! Shift catalog: the clock-time window of every shift type.
//!
//! Windows are expressed as wall-clock start and end times. A window whose end
//! is not after its start wraps past midnight and ends on the day after the
//! shift's start date.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock window, possibly wrapping past midnight.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::ClockWindow;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let night = ClockWindow::new(
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
/// );
/// assert!(night.wraps_midnight());
/// assert_eq!(night.duration_hours(), Decimal::new(9, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockWindow {
    /// Wall-clock start time.
    pub start: NaiveTime,
    /// Wall-clock end time; on the next day when not after `start`.
    pub end: NaiveTime,
}

impl ClockWindow {
    /// Creates a new window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// True when the window ends on the following calendar day.
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Minutes after midnight of the start day at which the window opens.
    pub fn start_minute(&self) -> i64 {
        minute_of_day(self.start)
    }

    /// Length of the window in minutes.
    pub fn duration_minutes(&self) -> i64 {
        let raw = minute_of_day(self.end) - minute_of_day(self.start);
        if raw <= 0 { raw + MINUTES_PER_DAY } else { raw }
    }

    /// Length of the window in hours.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::new(self.duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Half-open minute interval `[start, end)` relative to midnight of the start day.
    pub(crate) fn minute_span(&self) -> (i64, i64) {
        let start = self.start_minute();
        (start, start + self.duration_minutes())
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// The windows for every [`ShiftType`].
///
/// One field per shift type keeps lookups infallible: a catalog cannot be
/// built without a window for each type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    /// Window of [`ShiftType::Morning`].
    pub morning: ClockWindow,
    /// Window of [`ShiftType::Afternoon`].
    pub afternoon: ClockWindow,
    /// Window of [`ShiftType::Night`].
    pub night: ClockWindow,
}

impl ShiftCatalog {
    /// Returns the window of `shift_type`.
    pub fn window(&self, shift_type: ShiftType) -> &ClockWindow {
        match shift_type {
            ShiftType::Morning => &self.morning,
            ShiftType::Afternoon => &self.afternoon,
            ShiftType::Night => &self.night,
        }
    }

    /// Returns `(start_time, end_time, duration_hours)` for `shift_type`.
    pub fn lookup(&self, shift_type: ShiftType) -> (NaiveTime, NaiveTime, Decimal) {
        let window = self.window(shift_type);
        (window.start, window.end, window.duration_hours())
    }

    /// Iterates over every shift type and its window.
    pub fn iter(&self) -> impl Iterator<Item = (ShiftType, &ClockWindow)> {
        ShiftType::ALL.into_iter().map(move |t| (t, self.window(t)))
    }
}
