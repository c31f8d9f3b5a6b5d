//! Probe resolution: annotation overrides, handler selection, assembly.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::annotations::{AnnotationKey, Annotations};
use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::handler::CheckHandler;
use crate::probe::{FunctionProbes, ProbeDescriptor};

/// Health path used when no annotation overrides it.
pub const DEFAULT_HEALTH_PATH: &str = "/_/health";

/// A function deployment request, as far as probes are concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeployment {
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl FunctionDeployment {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            annotations: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }
}

/// Builds probes for deployments against one provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProbeFactory {
    config: ProbeConfig,
}

impl ProbeFactory {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn make_probes(&self, deployment: &FunctionDeployment) -> ProbeResult<FunctionProbes> {
        debug!(service = %deployment.service, "building probes");
        build(&self.config, deployment.annotations.as_ref())
    }
}

/// Resolve liveness and readiness probes for one function.
///
/// Annotations override the health path and the initial delay; the delay
/// applies to both probes and defaults to the liveness setting. A bad
/// delay override fails the whole build.
pub fn build(config: &ProbeConfig, annotations: Option<&Annotations>) -> ProbeResult<FunctionProbes> {
    let mut http_path = DEFAULT_HEALTH_PATH;
    let mut initial_delay_seconds = config.liveness.initial_delay_seconds;

    if let Some(annotations) = annotations {
        if let Some(path) = annotations.health_path() {
            debug!(path, "health path overridden by annotation");
            http_path = path;
        }
        if let Some(delay) = annotations.initial_delay() {
            initial_delay_seconds = parse_initial_delay(delay).inspect_err(|e| {
                warn!(value = delay, error = %e, "rejected initial delay annotation");
            })?;
            debug!(initial_delay_seconds, "initial delay overridden by annotation");
        }
    }

    let handler = if config.http_probe {
        CheckHandler::http_get(http_path, config.port)
    } else {
        CheckHandler::lock_file()
    };
    debug!(mechanism = handler.mechanism(), %handler, "selected probe handler");

    let readiness = ProbeDescriptor::new(handler.clone(), initial_delay_seconds, &config.readiness);
    let liveness = ProbeDescriptor::new(handler, initial_delay_seconds, &config.liveness);

    Ok(FunctionProbes {
        liveness,
        readiness,
    })
}

/// Parse a delay like "10s" or "1m" into whole seconds, truncating.
fn parse_initial_delay(value: &str) -> ProbeResult<i32> {
    let invalid = |reason: String| ProbeError::InvalidDurationOverride {
        key: AnnotationKey::InitialDelay.as_str().to_string(),
        reason,
    };

    let duration: Duration = humantime::parse_duration(value).map_err(|e| invalid(e.to_string()))?;
    i32::try_from(duration.as_secs())
        .map_err(|_| invalid(format!("{value:?} exceeds {} seconds", i32::MAX)))
}
