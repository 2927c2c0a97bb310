//! Job files: one shape, its settings and a target depth.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use toolpathkit_core::GcodePath;
use toolpathkit_settings::Settings;
use toolpathkit_toolpaths::{drill_center, Shape, ToolpathRequest};

/// A drill job as stored in `.json` or `.toml` files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub settings: Settings,
    pub shape: Shape,
    pub target_depth: f64,
}

impl Job {
    /// Load a job from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display()))?;

        let job = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON job {}", path.display()))?,
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML job {}", path.display()))?,
            _ => bail!("Job file must be .json or .toml: {}", path.display()),
        };

        Ok(job)
    }

    /// Generates the drill-center toolpath for this job.
    pub fn drill_center(&self) -> Result<GcodePath> {
        let request = ToolpathRequest::new(&self.shape, &self.settings, self.target_depth);
        let path = drill_center(&request)
            .with_context(|| format!("Failed to generate toolpath for {}", self.shape.name()))?;
        Ok(path)
    }
}
