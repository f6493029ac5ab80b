//! Persistence of saved scenarios.
//!
//! The engine keeps saved scenarios as their input triple and recomputes
//! results on demand. [`ScenarioStore`] is the seam for alternative backends;
//! [`InMemoryScenarioStore`] is the process-local implementation.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::ScenarioInput;

/// Summary of a saved scenario as listed by [`ScenarioStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// Identifier assigned on save.
    pub id: Uuid,
    /// Scenario name.
    pub name: String,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Number of shifts in the scenario.
    pub day_count: usize,
}

impl ScenarioSummary {
    fn of(id: Uuid, input: &ScenarioInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            hourly_rate: input.hourly_rate,
            day_count: input.shifts.len(),
        }
    }
}

/// Storage for saved scenario inputs.
pub trait ScenarioStore: Send + Sync {
    /// Stores `input` and returns its new identifier.
    fn save(&self, input: ScenarioInput) -> Uuid;

    /// Lists saved scenarios in the order they were saved.
    fn list(&self) -> Vec<ScenarioSummary>;

    /// Loads the inputs for `ids`, in the order requested.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ScenarioNotFound`] for the first id that is not
    /// stored.
    fn get(&self, ids: &[Uuid]) -> EngineResult<Vec<ScenarioInput>>;

    /// Removes the scenarios for `ids` and returns the removed inputs.
    /// Unknown ids are ignored.
    fn delete(&self, ids: &[Uuid]) -> Vec<ScenarioInput>;
}

/// A [`ScenarioStore`] backed by a vector behind a read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    scenarios: RwLock<Vec<(Uuid, ScenarioInput)>>,
}

impl InMemoryScenarioStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.read().len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.scenarios.read().is_empty()
    }
}

impl ScenarioStore for InMemoryScenarioStore {
    fn save(&self, input: ScenarioInput) -> Uuid {
        let id = Uuid::new_v4();
        debug!(id = %id, scenario = %input.name, "Saving scenario");
        self.scenarios.write().push((id, input));
        id
    }

    fn list(&self) -> Vec<ScenarioSummary> {
        self.scenarios
            .read()
            .iter()
            .map(|(id, input)| ScenarioSummary::of(*id, input))
            .collect()
    }

    fn get(&self, ids: &[Uuid]) -> EngineResult<Vec<ScenarioInput>> {
        let scenarios = self.scenarios.read();
        ids.iter()
            .map(|id| {
                scenarios
                    .iter()
                    .find(|(stored, _)| stored == id)
                    .map(|(_, input)| input.clone())
                    .ok_or(EngineError::ScenarioNotFound { id: *id })
            })
            .collect()
    }

    fn delete(&self, ids: &[Uuid]) -> Vec<ScenarioInput> {
        let mut scenarios = self.scenarios.write();
        let (removed, kept): (Vec<_>, Vec<_>) = scenarios
            .drain(..)
            .partition(|(id, _)| ids.contains(id));
        *scenarios = kept;
        debug!(requested = ids.len(), removed = removed.len(), "Deleted scenarios");
        removed.into_iter().map(|(_, input)| input).collect()
    }
}
