//! Configuration loading and management for the Shift Pay Engine.
//!
//! This module provides functionality to load pay rules from YAML files:
//! rule set metadata, the night period, bonus multipliers and the shift
//! catalog. A built-in reference rule set is always available through
//! [`RuleSet::reference`].
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reference").unwrap();
//! println!("Loaded rules: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusMultipliers, RuleSet, RuleSetMetadata, RulesFile, ShiftsFile};
