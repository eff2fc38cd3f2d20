//! Scenario definition for headless diagnostics

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or executing a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("step {index} ({step}): no field is being edited")]
    NoActiveField { index: usize, step: &'static str },

    #[error("step {index}: unknown key `{key}`")]
    UnknownKey { index: usize, key: String },
}

/// Sequence of headless diagnostic steps
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text
    pub fn from_json(input: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// The step set the runner understands.
///
/// Drive steps act on the site context or the field opened by `begin_edit`;
/// assert steps end the run with a failed report on mismatch.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Authenticate { secret: String },
    Deauthenticate,
    ToggleEditMode,
    BeginEdit { slot: String },
    TypeText { text: String },
    PressKey { key: String },
    SetBuffer { text: String },
    Commit,
    Cancel,
    SetTheme { variant: String },
    /// Rebuild the whole context over the same storage (a page reload)
    Reload,
    AssertResolved { slot: String, value: String },
    AssertVariant { value: String },
    AssertStyle { name: String, value: String },
    AssertAdmin { is_admin: bool, is_edit_mode: bool },
    AssertEditing { value: bool },
}
