//! alexandria CLI — operator interface to the configuration layer.

use std::time::Instant;

use alexandria_rs::config::{ENV_TEMPLATE, Settings};
use alexandria_rs::context::AppContext;
use alexandria_rs::telemetry::{TelemetryConfig, init_telemetry, metrics};
use clap::{Parser, Subcommand};
use opentelemetry::KeyValue;

#[derive(Parser)]
#[command(
    name = "alexandria",
    about = "Configuration layer for the Alexandria RAG service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dry-run startup: load, validate, and summarize the configuration
    Check,
    /// Print the loaded configuration with secrets redacted
    Show,
    /// Print a starter .env template
    Template,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => cmd_check().await,
        Command::Show => cmd_show(),
        Command::Template => {
            print!("{ENV_TEMPLATE}");
            Ok(())
        }
    }
}

/// Everything a real startup does, minus serving: load and validate the
/// settings, bring up telemetry, and log the redacted summary.
async fn cmd_check() -> anyhow::Result<()> {
    let started = Instant::now();
    let settings = Settings::load()?;

    let guard = init_telemetry(TelemetryConfig::from_settings(&settings))?;
    metrics::config_loads().add(1, &[KeyValue::new("result", "ok")]);
    metrics::config_load_duration_ms().record(started.elapsed().as_secs_f64() * 1000.0, &[]);

    let context = AppContext::new(settings);
    context.settings().log();

    println!("configuration OK");
    guard.force_flush();
    Ok(())
}

fn cmd_show() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
