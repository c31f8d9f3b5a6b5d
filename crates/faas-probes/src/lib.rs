//! faas-probes — liveness and readiness probes for function workloads.
//!
//! Turns an operator's base [`ProbeConfig`] and a function's optional
//! [`Annotations`] into a pair of declarative probe descriptors that an
//! orchestrator consumes. Nothing here executes a probe.
//!
//! # Architecture
//!
//! ```text
//! build(config, annotations)
//!   ├── resolve path + initial delay (annotation overrides)
//!   ├── select CheckHandler (HttpGet | Exec)
//!   └── FunctionProbes { liveness, readiness }
//! ```
//!
//! Both descriptors share one handler and one initial delay; only the
//! timeout and period come from their own [`ProbeTiming`].

pub mod annotations;
pub mod builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod probe;

pub use annotations::{AnnotationKey, Annotations};
pub use builder::{build, FunctionDeployment, ProbeFactory};
pub use config::{ProbeConfig, ProbeTiming};
pub use error::{ProbeError, ProbeResult};
pub use handler::{CheckHandler, ExecAction, HttpGetAction};
pub use probe::{FunctionProbes, ProbeDescriptor};
