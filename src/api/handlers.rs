//! Service operations for the Shift Pay Engine API.
//!
//! Each operation takes the shared [`AppState`] and a request, and returns
//! either a report or an [`ApiError`]. They are transport-agnostic: an HTTP
//! or CLI front end only has to deserialize the request and serialize the
//! result.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{MIN_SCENARIOS, compute_input, rank};
use crate::error::{EngineError, EngineResult};
use crate::models::{ScenarioInput, ScenarioResult};

use super::request::{CalculationRequest, CompareRequest, DeleteRequest};
use super::response::{
    ApiError, DeleteResponse, RankingReport, SaveResponse, ScenarioListResponse, ScenarioReport,
};
use super::state::AppState;

/// Computes a saved scenario through the state's cache.
fn compute_cached(state: &AppState, input: &ScenarioInput) -> EngineResult<Arc<ScenarioResult>> {
    state
        .cache()
        .get_or_compute(input, |input| compute_input(input, state.rules()))
}

fn failure(correlation_id: Uuid, operation: &'static str, err: EngineError) -> ApiError {
    warn!(
        correlation_id = %correlation_id,
        operation,
        error = %err,
        "Request failed"
    );
    err.into()
}

/// Calculates a scenario without saving it.
///
/// Unsaved scenarios are computed directly and never enter the cache.
///
/// # Example
///
/// ```
/// use shift_pay_engine::api::{calculate, AppState, CalculationRequest};
///
/// let state = AppState::with_reference_rules();
/// let request: CalculationRequest = serde_json::from_value(serde_json::json!({
///     "name": "Saturday night",
///     "hourly_rate": "15",
///     "shifts": [{ "date": "2026-01-17", "shift_type": "NIGHT" }]
/// })).unwrap();
///
/// let report = calculate(&state, request).unwrap();
/// assert_eq!(report.total_pay.to_string(), "155.25");
/// ```
pub fn calculate(state: &AppState, request: CalculationRequest) -> Result<ScenarioReport, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        scenario = %request.name,
        shifts_count = request.shifts.len(),
        "Processing calculation request"
    );

    let start_time = Instant::now();
    let input = request
        .into_input()
        .map_err(|err| failure(correlation_id, "calculate", err))?;
    let result = compute_input(&input, state.rules())
        .map_err(|err| failure(correlation_id, "calculate", err))?;

    info!(
        correlation_id = %correlation_id,
        total_pay = %result.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    Ok(ScenarioReport::from(&result))
}

/// Validates and saves a scenario.
///
/// The scenario is computed once before it is stored, so only scenarios
/// that can be calculated are ever saved.
pub fn save(state: &AppState, request: CalculationRequest) -> Result<SaveResponse, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        scenario = %request.name,
        "Processing save request"
    );

    let input = request
        .into_input()
        .map_err(|err| failure(correlation_id, "save", err))?;
    compute_cached(state, &input).map_err(|err| failure(correlation_id, "save", err))?;

    let name = input.name.clone();
    let id = state.store().save(input);

    info!(correlation_id = %correlation_id, id = %id, "Scenario saved");
    Ok(SaveResponse {
        id,
        message: format!("Scenario '{}' saved", name),
        name,
    })
}

/// Lists saved scenarios in save order.
pub fn list(state: &AppState) -> ScenarioListResponse {
    let scenarios = state.store().list();
    info!(count = scenarios.len(), "Listed scenarios");
    ScenarioListResponse { scenarios }
}

/// Ranks saved scenarios by total pay.
///
/// Ids are resolved in the order given; that order also breaks ties.
pub fn compare(state: &AppState, request: CompareRequest) -> Result<RankingReport, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        scenarios_count = request.scenario_ids.len(),
        "Processing compare request"
    );

    if request.scenario_ids.len() < MIN_SCENARIOS {
        return Err(failure(
            correlation_id,
            "compare",
            EngineError::InsufficientInput {
                required: MIN_SCENARIOS,
                supplied: request.scenario_ids.len(),
            },
        ));
    }

    let start_time = Instant::now();
    let ranking = state
        .store()
        .get(&request.scenario_ids)
        .and_then(|inputs| {
            inputs
                .iter()
                .map(|input| compute_cached(state, input).map(|r| ScenarioResult::clone(&r)))
                .collect::<EngineResult<Vec<_>>>()
        })
        .and_then(|results| rank(&results))
        .map_err(|err| failure(correlation_id, "compare", err))?;

    info!(
        correlation_id = %correlation_id,
        best = %ranking.best().name,
        spread = %ranking.spread(),
        duration_us = start_time.elapsed().as_micros(),
        "Comparison completed successfully"
    );
    Ok(RankingReport::from(&ranking))
}

/// Deletes saved scenarios and evicts their cached results. Unknown ids are
/// ignored.
pub fn delete(state: &AppState, request: DeleteRequest) -> DeleteResponse {
    let correlation_id = Uuid::new_v4();
    let removed = state.store().delete(&request.scenario_ids);
    for input in &removed {
        state.cache().remove(input);
    }
    let deleted = removed.len();

    info!(
        correlation_id = %correlation_id,
        requested = request.scenario_ids.len(),
        deleted,
        "Scenarios deleted"
    );
    DeleteResponse {
        deleted,
        message: format!("{} scenario(s) deleted", deleted),
    }
}
