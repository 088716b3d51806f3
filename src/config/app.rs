//! Application identity, CORS, and real-time connection settings.

use std::time::Duration;

use serde::Serialize;

use crate::config::source::{EnvReader, EnvSource};
use crate::error::FieldProblem;

/// Application identity.
///
/// - `APP_NAME` — display name (default: "RAG Application")
/// - `DEBUG` — debug mode (default: false)
/// - `API_V1_PREFIX` — route prefix for the v1 API (default: "/api/v1")
/// - `ALLOWED_HOSTS` — comma-separated host allowlist
///   (default: "localhost,127.0.0.1")
/// - `REQUEST_ID_HEADER` — correlation header name (default: "X-Request-ID")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSettings {
    pub name: String,
    pub debug: bool,
    pub api_v1_prefix: String,
    pub allowed_hosts: Vec<String>,
    pub request_id_header: String,
}

impl AppSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            name: env.string("APP_NAME", "RAG Application"),
            debug: env.boolean("DEBUG", false),
            api_v1_prefix: env.string("API_V1_PREFIX", "/api/v1"),
            allowed_hosts: env.list("ALLOWED_HOSTS", &["localhost", "127.0.0.1"]),
            request_id_header: env.string("REQUEST_ID_HEADER", "X-Request-ID"),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if !self.api_v1_prefix.starts_with('/') {
            problems.push(FieldProblem::new(
                "API_V1_PREFIX",
                format!("must start with '/', got {:?}", self.api_v1_prefix),
            ));
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

/// Cross-origin resource sharing.
///
/// - `CORS_ORIGINS` — comma-separated allowed origins
///   (default: "http://localhost:3000,http://localhost:8000")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorsSettings {
    pub origins: Vec<String>,
}

impl CorsSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            origins: env.list(
                "CORS_ORIGINS",
                &["http://localhost:3000", "http://localhost:8000"],
            ),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

/// WebSocket connection timing.
///
/// - `WS_HEARTBEAT_INTERVAL` — seconds between heartbeats (default: 30)
/// - `WS_CLOSE_TIMEOUT` — seconds to wait for a clean close (default: 10)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsSettings {
    pub heartbeat_interval: u64,
    pub close_timeout: u64,
}

impl WsSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            heartbeat_interval: env.number("WS_HEARTBEAT_INTERVAL", 30),
            close_timeout: env.number("WS_CLOSE_TIMEOUT", 10),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.heartbeat_interval == 0 {
            problems.push(FieldProblem::new(
                "WS_HEARTBEAT_INTERVAL",
                "must be at least 1 second",
            ));
        }
        if self.close_timeout == 0 {
            problems.push(FieldProblem::new(
                "WS_CLOSE_TIMEOUT",
                "must be at least 1 second",
            ));
        }
    }

    #[must_use]
    pub const fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval)
    }

    #[must_use]
    pub const fn close_timeout(&self) -> Duration {
        Duration::from_secs(self.close_timeout)
    }
}

impl Default for WsSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let app = AppSettings::default();
        assert_eq!(app.name, "RAG Application");
        assert!(!app.debug);
        assert_eq!(app.allowed_hosts, vec!["localhost", "127.0.0.1"]);

        let cors = CorsSettings::default();
        assert_eq!(
            cors.origins,
            vec!["http://localhost:3000", "http://localhost:8000"]
        );
    }

    #[test]
    fn prefix_must_be_rooted() {
        let mut app = AppSettings::default();
        app.api_v1_prefix = "api/v1".to_string();

        let mut problems = Vec::new();
        app.validate(&mut problems);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].field, "API_V1_PREFIX");
    }

    #[test]
    fn ws_timing_as_durations() {
        let ws = WsSettings::default();
        assert_eq!(ws.heartbeat_interval(), Duration::from_secs(30));
        assert_eq!(ws.close_timeout(), Duration::from_secs(10));
    }
}
