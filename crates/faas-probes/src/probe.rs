//! Probe descriptors handed to the orchestrator.

use serde::{Deserialize, Serialize};

use crate::config::ProbeTiming;
use crate::handler::CheckHandler;

/// Consecutive successes needed after a failure. Fixed.
pub const SUCCESS_THRESHOLD: i32 = 1;

/// Consecutive failures before the orchestrator acts. Fixed.
pub const FAILURE_THRESHOLD: i32 = 3;

/// A declarative health check for one probe kind.
///
/// Field names follow the orchestrator's probe schema (`initialDelaySeconds`
/// and friends) so the serialized form can be embedded in a container spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeDescriptor {
    #[serde(flatten)]
    pub handler: CheckHandler,
    pub initial_delay_seconds: i32,
    pub timeout_seconds: i32,
    pub period_seconds: i32,
    pub success_threshold: i32,
    pub failure_threshold: i32,
}

impl ProbeDescriptor {
    /// Build a descriptor with the fixed thresholds.
    pub(crate) fn new(handler: CheckHandler, initial_delay_seconds: i32, timing: &ProbeTiming) -> Self {
        Self {
            handler,
            initial_delay_seconds,
            timeout_seconds: timing.timeout_seconds,
            period_seconds: timing.period_seconds,
            success_threshold: SUCCESS_THRESHOLD,
            failure_threshold: FAILURE_THRESHOLD,
        }
    }
}

/// The liveness/readiness pair produced for one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionProbes {
    pub liveness: ProbeDescriptor,
    pub readiness: ProbeDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> ProbeTiming {
        ProbeTiming {
            initial_delay_seconds: 2,
            timeout_seconds: 1,
            period_seconds: 10,
        }
    }

    #[test]
    fn new_fixes_thresholds() {
        let probe = ProbeDescriptor::new(CheckHandler::lock_file(), 5, &timing());
        assert_eq!(probe.success_threshold, 1);
        assert_eq!(probe.failure_threshold, 3);
        assert_eq!(probe.initial_delay_seconds, 5);
        assert_eq!(probe.period_seconds, 10);
    }

    #[test]
    fn serializes_to_probe_schema() {
        let probe = ProbeDescriptor::new(CheckHandler::lock_file(), 2, &timing());
        let json = serde_json::to_value(&probe).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "exec": { "command": ["cat", "/tmp/.lock"] },
                "initialDelaySeconds": 2,
                "timeoutSeconds": 1,
                "periodSeconds": 10,
                "successThreshold": 1,
                "failureThreshold": 3
            })
        );
    }

    #[test]
    fn deserializes_from_probe_schema() {
        let json = r#"{
            "httpGet": { "path": "/healthz", "port": 8080 },
            "initialDelaySeconds": 3,
            "timeoutSeconds": 1,
            "periodSeconds": 2,
            "successThreshold": 1,
            "failureThreshold": 3
        }"#;
        let probe: ProbeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(probe.handler, CheckHandler::http_get("/healthz", 8080));
        assert_eq!(probe.initial_delay_seconds, 3);
    }
}
