//! Operator-supplied base probe configuration (TOML).

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base settings every function's probes start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Probe the function over HTTP instead of checking its lock file.
    pub http_probe: bool,
    /// Container port the HTTP probe targets.
    pub port: i32,
    pub liveness: ProbeTiming,
    pub readiness: ProbeTiming,
}

/// Timing for one probe kind, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeTiming {
    pub initial_delay_seconds: i32,
    pub timeout_seconds: i32,
    pub period_seconds: i32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            http_probe: true,
            port: 8080,
            liveness: ProbeTiming::default(),
            readiness: ProbeTiming::default(),
        }
    }
}

impl Default for ProbeTiming {
    fn default() -> Self {
        Self {
            initial_delay_seconds: 2,
            timeout_seconds: 1,
            period_seconds: 2,
        }
    }
}

impl ProbeConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading probe config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing probe config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: ProbeConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
