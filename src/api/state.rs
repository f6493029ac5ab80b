//! Application state for the Shift Pay Engine service API.
//!
//! This module defines the shared state that is available to every
//! service operation.

use std::sync::Arc;

use crate::cache::ScenarioCache;
use crate::config::{ConfigLoader, RuleSet};
use crate::store::{InMemoryScenarioStore, ScenarioStore};

/// Shared application state.
///
/// Holds the rule set, the scenario store and the result cache. Cloning is
/// cheap and every clone shares the same resources.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RuleSet>,
    store: Arc<dyn ScenarioStore>,
    cache: Arc<ScenarioCache>,
}

impl AppState {
    /// Creates a state over the given rules and store with an empty cache.
    pub fn new(rules: RuleSet, store: Arc<dyn ScenarioStore>) -> Self {
        Self {
            rules: Arc::new(rules),
            store,
            cache: Arc::new(ScenarioCache::new()),
        }
    }

    /// Creates a state from a loaded configuration with an in-memory store.
    pub fn from_config(config: ConfigLoader) -> Self {
        Self::new(config.into_rule_set(), Arc::new(InMemoryScenarioStore::new()))
    }

    /// Creates a state using the reference rules and an in-memory store.
    pub fn with_reference_rules() -> Self {
        Self::new(RuleSet::reference().clone(), Arc::new(InMemoryScenarioStore::new()))
    }

    /// Returns the active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the scenario store.
    pub fn store(&self) -> &dyn ScenarioStore {
        self.store.as_ref()
    }

    /// Returns the result cache.
    pub fn cache(&self) -> &ScenarioCache {
        &self.cache
    }
}
