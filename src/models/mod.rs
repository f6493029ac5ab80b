//! Core data models for the Shift Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bonus;
mod ranking;
mod scenario;
mod shift;

pub use bonus::BonusCategory;
pub use ranking::{RankingEntry, RankingResult};
pub use scenario::{Breakdown, DayResult, ScenarioInput, ScenarioResult};
pub use shift::{ShiftOccurrence, ShiftType};
