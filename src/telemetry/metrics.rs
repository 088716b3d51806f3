//! Metric instrument factories for alexandria-rs.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! All instruments are created lazily from the `"alexandria"` meter.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Returns the shared meter for alexandria instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("alexandria")
}

/// Counter: configuration load attempts.
/// Labels: `result` ("ok" | "invalid").
pub fn config_loads() -> Counter<u64> {
    meter()
        .u64_counter("alexandria.config.loads")
        .with_description("Number of configuration load attempts")
        .build()
}

/// Histogram: configuration load duration in milliseconds.
pub fn config_load_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("alexandria.config.load_duration_ms")
        .with_description("Configuration load duration in milliseconds")
        .with_unit("ms")
        .build()
}
