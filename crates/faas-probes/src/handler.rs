//! Check mechanisms a probe can use.

use serde::{Deserialize, Serialize};

/// Path of the lock file the function's watchdog writes once it is up.
///
/// The watchdog owns the file; probes only read it.
pub const LOCK_FILE_PATH: &str = "/tmp/.lock";

/// How a single health check is performed.
///
/// Serializes with the orchestrator's field names, so a descriptor
/// flattens it into either an `httpGet` or an `exec` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckHandler {
    /// HTTP GET against the function's port; 2xx/3xx means healthy.
    HttpGet(HttpGetAction),
    /// Run a command in the container; exit status 0 means healthy.
    Exec(ExecAction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpGetAction {
    pub path: String,
    pub port: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecAction {
    pub command: Vec<String>,
}

impl CheckHandler {
    pub fn http_get(path: impl Into<String>, port: i32) -> Self {
        CheckHandler::HttpGet(HttpGetAction {
            path: path.into(),
            port,
        })
    }

    /// Exec check that succeeds once the watchdog lock file exists.
    pub fn lock_file() -> Self {
        CheckHandler::Exec(ExecAction {
            command: vec!["cat".to_string(), LOCK_FILE_PATH.to_string()],
        })
    }

    pub fn mechanism(&self) -> &'static str {
        match self {
            CheckHandler::HttpGet(_) => "http",
            CheckHandler::Exec(_) => "exec",
        }
    }
}

impl std::fmt::Display for CheckHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckHandler::HttpGet(action) => write!(f, "GET :{}{}", action.port, action.path),
            CheckHandler::Exec(action) => write!(f, "exec {}", action.command.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_file_command() {
        let handler = CheckHandler::lock_file();
        assert_eq!(
            handler,
            CheckHandler::Exec(ExecAction {
                command: vec!["cat".into(), "/tmp/.lock".into()],
            })
        );
        assert_eq!(handler.mechanism(), "exec");
    }

    #[test]
    fn http_get_serializes_with_orchestrator_names() {
        let json = serde_json::to_value(CheckHandler::http_get("/_/health", 8080)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "httpGet": { "path": "/_/health", "port": 8080 } })
        );
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(CheckHandler::http_get("/healthz", 8080).to_string(), "GET :8080/healthz");
        assert_eq!(CheckHandler::lock_file().to_string(), "exec cat /tmp/.lock");
    }
}
