// Library exports for gnuggplot

pub mod args;
pub mod diagnostic;
pub mod env;
pub mod field;
pub mod layer;
pub mod pipe;
pub mod plot;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// How the gnuplot process is started and released.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PipeOptions {
    #[serde(default = "default_program")]
    pub program: String,
    /// Pass `-persist` so the plot window outlives the pipe.
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Wait for Enter before closing the pipe.
    #[serde(default)]
    pub wait: bool,
}

fn default_program() -> String { "gnuplot".to_string() }
fn default_persist() -> bool { true }

impl Default for PipeOptions {
    fn default() -> Self {
        Self {
            program: default_program(),
            persist: true,
            wait: false,
        }
    }
}

impl PipeOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid pipe options")
    }

    /// Load options from a JSON file such as `{"program": "gnuplot-qt"}`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}
