//! Memoization of computed scenarios.
//!
//! Scenario results are pure functions of their [`ScenarioInput`], so the
//! input itself is the cache key. Each key owns a slot behind its own mutex:
//! the first caller computes while concurrent callers for the same key block
//! on the slot and then reuse the stored result.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{ScenarioInput, ScenarioResult};

type Slot = Arc<Mutex<Option<Arc<ScenarioResult>>>>;

/// A thread-safe, single-flight cache of scenario results.
///
/// # Example
///
/// ```
/// use shift_pay_engine::cache::ScenarioCache;
/// use shift_pay_engine::calculation::compute_input;
/// use shift_pay_engine::config::RuleSet;
/// use shift_pay_engine::models::{ScenarioInput, ShiftOccurrence};
/// use rust_decimal::Decimal;
///
/// let cache = ScenarioCache::new();
/// let input = ScenarioInput::new(
///     "Monday",
///     Decimal::new(15, 0),
///     vec![ShiftOccurrence::parse("2026-01-12", "MORNING").unwrap()],
/// );
///
/// let first = cache.get_or_compute(&input, |i| compute_input(i, RuleSet::reference())).unwrap();
/// let second = cache.get_or_compute(&input, |_| unreachable!()).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ScenarioCache {
    slots: DashMap<ScenarioInput, Slot>,
}

impl ScenarioCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `input`, computing it with `compute` on
    /// a miss.
    ///
    /// Failed computations are not cached; the error is returned to the
    /// caller and the next request for the same input computes again.
    pub fn get_or_compute<F>(
        &self,
        input: &ScenarioInput,
        compute: F,
    ) -> EngineResult<Arc<ScenarioResult>>
    where
        F: FnOnce(&ScenarioInput) -> EngineResult<ScenarioResult>,
    {
        // The map guard is released at the end of this statement, before the
        // slot is locked.
        let slot = Arc::clone(&self.slots.entry(input.clone()).or_default());

        let mut guard = slot.lock();
        if let Some(result) = guard.as_ref() {
            debug!(scenario = %input.name, "Scenario cache hit");
            return Ok(Arc::clone(result));
        }

        match compute(input) {
            Ok(result) => {
                let result = Arc::new(result);
                *guard = Some(Arc::clone(&result));
                debug!(scenario = %input.name, "Scenario cached");
                Ok(result)
            }
            Err(err) => {
                self.slots.remove_if(input, |_, current| Arc::ptr_eq(current, &slot));
                Err(err)
            }
        }
    }

    /// Returns the cached result for `input` without computing.
    pub fn get(&self, input: &ScenarioInput) -> Option<Arc<ScenarioResult>> {
        let slot = self.slots.get(input).map(|entry| Arc::clone(entry.value()))?;
        let guard = slot.lock();
        guard.clone()
    }

    /// Evicts the result for `input`. Returns true when an entry was removed.
    pub fn remove(&self, input: &ScenarioInput) -> bool {
        let removed = self.slots.remove(input).is_some();
        if removed {
            debug!(scenario = %input.name, "Scenario evicted");
        }
        removed
    }

    /// Number of fingerprints cached or currently being computed.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.slots.clear();
    }
}
