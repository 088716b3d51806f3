//! # alexandria-rs
//!
//! Configuration substrate for the Alexandria RAG service.
//!
//! Provides the typed settings record (environment-driven, validated in
//! one aggregated pass), secret handling via secrecy, the shared
//! application context, and OpenTelemetry observability setup.

pub mod config;
pub mod context;
pub mod error;
pub mod telemetry;
