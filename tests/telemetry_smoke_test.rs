//! Smoke test for telemetry initialization.
//!
//! Runs without an OTLP endpoint, so only the fmt layer is installed.
//! Exporter paths need a collector and are exercised in deployment.

use alexandria_rs::config::{EnvSource, Settings};
use alexandria_rs::telemetry::{TelemetryConfig, init_telemetry};

#[test]
fn fmt_only_init_succeeds_once() {
    let source = EnvSource::from_iter([
        ("SECRET_KEY", "smoke"),
        ("QDRANT_URL", "https://cluster.qdrant.cloud"),
        ("QDRANT_API_KEY", "smoke-key"),
        ("OPENAI_API_KEY", "sk-smoke"),
        ("LOG_LEVEL", "DEBUG"),
    ]);
    let settings = Settings::from_source(&source).unwrap();

    let config = TelemetryConfig::from_settings(&settings);
    assert!(config.endpoint.is_none());
    assert_eq!(config.log_level, "DEBUG");

    let guard = init_telemetry(config.clone()).expect("first init succeeds");
    tracing::info!("telemetry smoke");
    settings.log();
    guard.force_flush();

    // The process-wide subscriber is already set; a second init must
    // fail instead of silently replacing it.
    assert!(init_telemetry(config).is_err());
}
