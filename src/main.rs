//! telemetry: poll a temperature / humidity sensor, average it over fixed
//! windows, and show min / max / mean on a small two-line display.
//!
//! Run with:  `RUST_LOG=info telemetry [path/to/telemetry.toml]`

use std::path::PathBuf;

use anyhow::Result;
use telemetry_config::{default_path, load as load_config, DisplayKind, SensorKind};
use telemetry_display::{Layout, TerminalDisplay};
use telemetry_pipeline::{Pipeline, RunOptions};
use telemetry_sensor::{spawn_poller, Sensor, SimulatedSensor, SystemSensor};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("telemetry v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_path);
    let config = load_config(&path)?;

    let sensor: Box<dyn Sensor> = match config.sensor.kind {
        SensorKind::Simulated => Box::new(SimulatedSensor::new(config.sensor.dropout_every)),
        SensorKind::System    => Box::new(SystemSensor::new()),
    };
    let display = match config.display.kind {
        DisplayKind::Terminal => TerminalDisplay::stdout(),
    };

    let mut readings = spawn_poller(sensor, config.sensor.poll_interval());
    let layout = Layout::from_config(&config.display);
    let mut pipeline: Pipeline<TerminalDisplay> = Pipeline::new(display, layout);

    tokio::select! {
        closed = pipeline.run(&mut readings, RunOptions::default()) => {
            let closed = closed?;
            info!(windows = closed, "reading stream ended");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; shutting down");
        }
    }

    Ok(())
}
