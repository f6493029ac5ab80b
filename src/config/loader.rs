//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay rule
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{RuleSet, RuleSetMetadata};

/// Loads and provides access to a rule set configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/reference/
/// ├── rules.yaml   # Metadata, night period and bonus multipliers
/// └── shifts.yaml  # Shift catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reference")?;
/// println!("Loaded rules: {}", loader.metadata().name);
/// # Ok::<(), shift_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rule_set: RuleSet,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The rules are inconsistent (`InvalidRuleSet`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules_yaml = Self::read_file(&path.join("rules.yaml"))?;
        let shifts_yaml = Self::read_file(&path.join("shifts.yaml"))?;

        let rule_set = RuleSet::from_yaml(&rules_yaml, &shifts_yaml, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            code = %rule_set.metadata.code,
            version = %rule_set.metadata.version,
            "Loaded rule set"
        );

        Ok(Self { rule_set })
    }

    fn read_file(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Returns the loaded rule set.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.rule_set.metadata
    }

    /// Consumes the loader, returning the rule set.
    pub fn into_rule_set(self) -> RuleSet {
        self.rule_set
    }
}
