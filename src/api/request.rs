//! Request types for the Shift Pay Engine service API.
//!
//! Shift dates and tags arrive as raw strings and are parsed here, so a bad
//! value is reported as an [`EngineError::InvalidInput`] naming the exact
//! shift it came from instead of a generic deserialization failure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ScenarioInput, ShiftOccurrence};

/// Request body for calculating or saving a scenario.
///
/// # Example
///
/// ```
/// use shift_pay_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(r#"{
///     "name": "Weekend nights",
///     "hourly_rate": "20",
///     "shifts": [
///         { "date": "2026-01-17", "shift_type": "NIGHT" },
///         { "date": "2026-01-18", "type": "NIGHT" }
///     ]
/// }"#).unwrap();
///
/// let input = request.into_input().unwrap();
/// assert_eq!(input.shifts.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Display name of the scenario.
    pub name: String,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Shifts in entry order.
    pub shifts: Vec<ShiftRequest>,
}

/// One shift in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// ISO-8601 date the shift starts on.
    pub date: String,
    /// Shift type tag (`MORNING`, `AFTERNOON` or `NIGHT`).
    #[serde(alias = "type")]
    pub shift_type: String,
}

impl CalculationRequest {
    /// Validates the request and converts it into a scenario input.
    ///
    /// The name is trimmed and must not be empty. Shift parse errors name the
    /// offending entry, e.g. `shifts[2].date`. Rate and shift-count checks
    /// happen when the scenario is computed.
    pub fn into_input(self) -> EngineResult<ScenarioInput> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::invalid_input(
                "name",
                "scenario name must not be empty",
            ));
        }

        let shifts = self
            .shifts
            .iter()
            .enumerate()
            .map(|(index, shift)| {
                ShiftOccurrence::parse(&shift.date, &shift.shift_type)
                    .map_err(|err| at_index(index, err))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(ScenarioInput::new(name, self.hourly_rate, shifts))
    }
}

fn at_index(index: usize, err: EngineError) -> EngineError {
    match err {
        EngineError::InvalidInput { field, message } => EngineError::InvalidInput {
            field: format!("shifts[{}].{}", index, field),
            message,
        },
        other => other,
    }
}

/// Request body for ranking saved scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Saved scenario ids, in the order used for tie-breaking.
    pub scenario_ids: Vec<Uuid>,
}

/// Request body for deleting saved scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// Saved scenario ids to remove.
    pub scenario_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CalculationRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request_converts() {
        let input = request(json!({
            "name": "  Week 3  ",
            "hourly_rate": 15.5,
            "shifts": [
                { "date": "2026-01-12", "shift_type": "MORNING" },
                { "date": "2026-01-13", "shift_type": "afternoon" }
            ]
        }))
        .into_input()
        .unwrap();

        assert_eq!(input.name, "Week 3");
        assert_eq!(input.hourly_rate, Decimal::new(155, 1));
        assert_eq!(input.shifts[1].shift_type, ShiftType::Afternoon);
    }

    #[test]
    fn test_type_alias_is_accepted() {
        let input = request(json!({
            "name": "Alias",
            "hourly_rate": "20",
            "shifts": [{ "date": "2026-01-12", "type": "NIGHT" }]
        }))
        .into_input()
        .unwrap();
        assert_eq!(input.shifts[0].shift_type, ShiftType::Night);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = request(json!({
            "name": "   ",
            "hourly_rate": "20",
            "shifts": [{ "date": "2026-01-12", "shift_type": "NIGHT" }]
        }))
        .into_input()
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_bad_shift_names_its_index() {
        let err = request(json!({
            "name": "Bad",
            "hourly_rate": "20",
            "shifts": [
                { "date": "2026-01-12", "shift_type": "MORNING" },
                { "date": "2026-01-13", "shift_type": "EVENING" }
            ]
        }))
        .into_input()
        .unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidInput { ref field, .. } if field == "shifts[1].shift_type")
        );

        let err = request(json!({
            "name": "Bad",
            "hourly_rate": "20",
            "shifts": [{ "date": "2026-02-30", "shift_type": "MORNING" }]
        }))
        .into_input()
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "shifts[0].date"));
    }

    #[test]
    fn test_compare_request_parses_ids() {
        let id = Uuid::new_v4();
        let compare: CompareRequest =
            serde_json::from_value(json!({ "scenario_ids": [id.to_string()] })).unwrap();
        assert_eq!(compare.scenario_ids, vec![id]);
    }
}
