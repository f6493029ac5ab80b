//! Calculation logic for the Shift Pay Engine.
//!
//! This module contains the pure pay calculation functions: the shift
//! catalog and its clock windows, rest-day and night-shift detection, bonus
//! classification and per-day pay, scenario totals, and ranking of computed
//! scenarios by total pay.

mod day_classifier;
mod pay_calculator;
mod scenario_ranker;
mod shift_catalog;

pub use day_classifier::{
    REST_DAY, is_night_shift, is_night_window, is_rest_day, night_overlap_hours,
    night_overlap_minutes,
};
pub use pay_calculator::{calculate, classify, compute_day, compute_input, compute_scenario};
pub use scenario_ranker::{DISPLAY_DECIMAL_PLACES, MIN_SCENARIOS, display_round, rank};
pub use shift_catalog::{ClockWindow, ShiftCatalog};
