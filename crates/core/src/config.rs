//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Delay slots on, tracing off, no step ceiling.
//! 2. **Structures:** Hierarchical config split into `general` and `pipeline` sections.
//! 3. **Parsing:** [`Config::from_json`] for configs supplied by a surrounding tool.
//!
//! Every field is optional in JSON; omitted fields take their default.

use serde::Deserialize;

use crate::common::error::SimError;

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing and run-loop settings.
    pub general: GeneralConfig,
    /// Control-transfer behavior.
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not valid JSON or a field has
    /// the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::Config;
    ///
    /// let config = Config::from_json(r#"{ "general": { "step_limit": 1000 } }"#).unwrap();
    /// assert_eq!(config.general.step_limit, Some(1000));
    /// assert!(config.pipeline.delay_slots);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// General run settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every executed instruction.
    pub trace_instructions: bool,

    /// Maximum number of steps a single `run` call may take. `None` runs until the
    /// program counter leaves the program, which never happens for an infinite loop.
    pub step_limit: Option<u64>,
}

/// Control-transfer settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Execute the instruction after every jump or branch before the transfer commits.
    ///
    /// On by default. When off, a taken transfer skips the following instruction and
    /// `jal`/`jalr` link to it, so the MIPS guarantee that the instruction after a branch
    /// always runs exactly once no longer holds. Programs written for real MIPS timing
    /// will behave differently.
    pub delay_slots: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { delay_slots: true }
    }
}
