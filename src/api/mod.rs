//! Service API for the Shift Pay Engine.
//!
//! Transport-agnostic operations for calculating, saving, listing, comparing
//! and deleting shift scenarios. Requests and responses are serde types, so
//! any front end can carry them as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{calculate, compare, delete, list, save};
pub use request::{CalculationRequest, CompareRequest, DeleteRequest, ShiftRequest};
pub use response::{
    ApiError, BestReport, BreakdownReport, DayReport, DeleteResponse, RankingEntryReport,
    RankingReport, SaveResponse, ScenarioListResponse, ScenarioReport,
};
pub use state::AppState;
