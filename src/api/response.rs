//! Response types for the Shift Pay Engine service API.
//!
//! Reports are the presentation shape of engine results: money, hours and
//! percentages are rounded to two decimal places (half away from zero) and
//! serialized as decimal strings such as `"155.25"`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{DISPLAY_DECIMAL_PLACES, display_round};
use crate::error::EngineError;
use crate::models::{
    BonusCategory, Breakdown, DayResult, RankingEntry, RankingResult, ScenarioResult, ShiftType,
};
use crate::store::ScenarioSummary;

/// Rounds for display and pins the scale so `135` renders as `"135.00"`.
fn display(value: Decimal) -> Decimal {
    let mut rounded = display_round(value);
    rounded.rescale(DISPLAY_DECIMAL_PLACES);
    rounded
}

/// Report for one calculated scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: String,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Total hours worked.
    pub total_hours: Decimal,
    /// Total pay including bonuses.
    pub total_pay: Decimal,
    /// Total bonus.
    pub total_bonus: Decimal,
    /// Hours per bonus category.
    pub breakdown: BreakdownReport,
    /// One line per shift, in input order.
    pub days: Vec<DayReport>,
}

/// Hours per bonus category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownReport {
    /// Hours without bonus.
    pub normal: Decimal,
    /// Night hours.
    pub night: Decimal,
    /// Rest-day hours.
    pub sunday: Decimal,
    /// Night hours on the rest day.
    pub night_sunday: Decimal,
}

/// One shift line of a scenario report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    /// Start date of the shift.
    pub date: NaiveDate,
    /// English weekday name.
    pub day_name: String,
    /// Shift type tag.
    pub shift_type: ShiftType,
    /// Bonus category applied.
    pub category: BonusCategory,
    /// Hours worked.
    pub hours: Decimal,
    /// Pay before bonus.
    pub base_pay: Decimal,
    /// Bonus amount.
    pub bonus: Decimal,
    /// Pay including bonus.
    pub pay: Decimal,
}

impl From<&Breakdown> for BreakdownReport {
    fn from(breakdown: &Breakdown) -> Self {
        Self {
            normal: display(breakdown.normal),
            night: display(breakdown.night),
            sunday: display(breakdown.sunday),
            night_sunday: display(breakdown.night_sunday),
        }
    }
}

impl From<&DayResult> for DayReport {
    fn from(day: &DayResult) -> Self {
        Self {
            date: day.date,
            day_name: day.day_name.clone(),
            shift_type: day.shift_type,
            category: day.category,
            hours: display(day.hours),
            base_pay: display(day.base_pay),
            bonus: display(day.bonus_amount),
            pay: display(day.pay()),
        }
    }
}

impl From<&ScenarioResult> for ScenarioReport {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            name: result.name.clone(),
            hourly_rate: display(result.hourly_rate),
            total_hours: display(result.total_hours),
            total_pay: display(result.total_pay),
            total_bonus: display(result.total_bonus),
            breakdown: BreakdownReport::from(&result.breakdown),
            days: result.days.iter().map(DayReport::from).collect(),
        }
    }
}

/// Report for a ranking of saved scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// The rank-1 scenario.
    pub best: BestReport,
    /// Every scenario, best first.
    pub ranking: Vec<RankingEntryReport>,
    /// Pay difference between the best and the worst scenario.
    pub spread: Decimal,
}

/// Headline figures of the best scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestReport {
    /// Scenario name.
    pub name: String,
    /// Total pay.
    pub total_pay: Decimal,
    /// Total hours.
    pub total_hours: Decimal,
    /// Total bonus.
    pub total_bonus: Decimal,
}

/// One line of a ranking report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntryReport {
    /// Position, starting at 1.
    pub rank: usize,
    /// Scenario name.
    pub name: String,
    /// Total hours.
    pub hours: Decimal,
    /// Total pay.
    pub pay: Decimal,
    /// Total bonus.
    pub bonus: Decimal,
    /// Shortfall relative to the best scenario.
    pub difference: Decimal,
    /// Shortfall as a percentage of the best scenario's pay.
    pub percentage: Decimal,
}

impl From<&RankingEntry> for RankingEntryReport {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            rank: entry.rank,
            name: entry.name.clone(),
            hours: display(entry.total_hours),
            pay: display(entry.total_pay),
            bonus: display(entry.total_bonus),
            difference: display(entry.deficit),
            percentage: display(entry.percentage),
        }
    }
}

impl From<&RankingResult> for RankingReport {
    fn from(ranking: &RankingResult) -> Self {
        let best = ranking.best();
        Self {
            best: BestReport {
                name: best.name.clone(),
                total_pay: display(best.total_pay),
                total_hours: display(best.total_hours),
                total_bonus: display(best.total_bonus),
            },
            ranking: ranking.entries().iter().map(RankingEntryReport::from).collect(),
            spread: display(ranking.spread()),
        }
    }
}

/// Response to a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Identifier of the saved scenario.
    pub id: Uuid,
    /// Name the scenario was saved under.
    pub name: String,
    /// Human-readable confirmation.
    pub message: String,
}

/// Response listing saved scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioListResponse {
    /// Saved scenarios in save order.
    pub scenarios: Vec<ScenarioSummary>,
}

/// Response to a delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Number of scenarios actually removed.
    pub deleted: usize,
    /// Human-readable confirmation.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Returns true for errors caused by the caller rather than the engine.
    pub fn is_client_error(&self) -> bool {
        self.code != "CONFIG_ERROR"
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInput { field, .. } => ApiError::with_details(
                "INVALID_INPUT",
                message,
                format!("The field '{}' was rejected", field),
            ),
            EngineError::InsufficientInput { required, .. } => ApiError::with_details(
                "INSUFFICIENT_INPUT",
                message,
                format!("Select at least {} scenarios to compare", required),
            ),
            EngineError::ScenarioNotFound { .. } => ApiError::new("SCENARIO_NOT_FOUND", message),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRuleSet { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message)
            }
        }
    }
}
