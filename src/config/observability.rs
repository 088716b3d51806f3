//! Logging, metrics, and tracing settings.

use std::time::Duration;

use serde::Serialize;

use crate::config::source::{EnvReader, EnvSource};
use crate::error::FieldProblem;

const LOG_LEVELS: &[&str] = &["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Observability toggles.
///
/// - `LOG_LEVEL` (default: "INFO")
/// - `METRICS_ENABLED` (default: true)
/// - `METRICS_PORT` (default: 9090)
/// - `TRACE_ENABLED` (default: true)
/// - `HEALTH_CHECK_INTERVAL` — seconds between probes (default: 30)
/// - `OTEL_ENDPOINT` — OTLP collector, e.g. "http://localhost:4317"
///   (optional; signals stay on stdout when unset)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservabilitySettings {
    pub log_level: String,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
    pub trace_enabled: bool,
    pub health_check_interval: u64,
    pub otel_endpoint: Option<String>,
}

impl ObservabilitySettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            log_level: env.string("LOG_LEVEL", "INFO"),
            metrics_enabled: env.boolean("METRICS_ENABLED", true),
            metrics_port: env.number("METRICS_PORT", 9090),
            trace_enabled: env.boolean("TRACE_ENABLED", true),
            health_check_interval: env.number("HEALTH_CHECK_INTERVAL", 30),
            otel_endpoint: env.string_opt("OTEL_ENDPOINT"),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_uppercase().as_str()) {
            problems.push(FieldProblem::new(
                "LOG_LEVEL",
                format!(
                    "unknown level {:?}, expected one of {}",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }
        if self.metrics_enabled && self.metrics_port == 0 {
            problems.push(FieldProblem::new(
                "METRICS_PORT",
                "must be nonzero when metrics are enabled",
            ));
        }
        if self.health_check_interval == 0 {
            problems.push(FieldProblem::new(
                "HEALTH_CHECK_INTERVAL",
                "must be at least 1 second",
            ));
        }
    }

    #[must_use]
    pub const fn health_check_interval(&self) -> Duration {
        Duration::from_secs(self.health_check_interval)
    }
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let obs = ObservabilitySettings::default();
        assert_eq!(obs.log_level, "INFO");
        assert!(obs.metrics_enabled && obs.trace_enabled);
        assert_eq!(obs.metrics_port, 9090);
        assert!(obs.otel_endpoint.is_none());
    }

    #[test]
    fn level_is_case_insensitive() {
        let mut obs = ObservabilitySettings::default();
        obs.log_level = "debug".to_string();

        let mut problems = Vec::new();
        obs.validate(&mut problems);
        assert!(problems.is_empty());
    }

    #[test]
    fn reject_unknown_level() {
        let mut obs = ObservabilitySettings::default();
        obs.log_level = "verbose".to_string();

        let mut problems = Vec::new();
        obs.validate(&mut problems);
        assert_eq!(problems[0].field, "LOG_LEVEL");
    }
}
