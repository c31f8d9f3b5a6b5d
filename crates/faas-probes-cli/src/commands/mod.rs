pub mod build;
pub mod config;

use std::path::Path;

use faas_probes::ProbeConfig;
use tracing::debug;

/// Load the provider config, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&str>) -> anyhow::Result<ProbeConfig> {
    match path {
        Some(path) => {
            debug!(path, "loading probe config");
            ProbeConfig::from_file(Path::new(path))
        }
        None => Ok(ProbeConfig::default()),
    }
}
