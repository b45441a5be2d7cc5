pub mod schema;

pub use schema::{DisplayConfig, DisplayKind, SensorConfig, SensorKind, TelemetryConfig};

use std::path::{Path, PathBuf};
use std::time::Duration;
use telemetry_core::{Result, TelemetryError};

/// Load configuration from a TOML file.  Returns `TelemetryConfig::default()`
/// if the file doesn't exist so the pipeline always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<TelemetryConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(TelemetryConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| TelemetryError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<TelemetryConfig> {
    let config: TelemetryConfig =
        toml::from_str(raw).map_err(|e| TelemetryError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &TelemetryConfig) -> Result<()> {
    if config.sensor.poll_interval_ms == 0 {
        return Err(TelemetryError::Config(
            "sensor.poll_interval_ms must be greater than zero".to_string(),
        ));
    }
    if config.display.columns == 0 {
        return Err(TelemetryError::Config(
            "display.columns must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

impl SensorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("telemetry").join("telemetry.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.sensor.poll_interval(), Duration::from_secs(2));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"
            [sensor]
            kind = "system"
            poll_interval_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.sensor.kind, SensorKind::System);
        assert_eq!(config.sensor.poll_interval_ms, 500);
        assert_eq!(config.sensor.dropout_every, 0);
        assert_eq!(config.display.columns, 16);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = parse("[sensor]\npoll_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, TelemetryError::Config(_)));
    }

    #[test]
    fn zero_columns_is_rejected() {
        assert!(parse("[display]\ncolumns = 0\n").is_err());
    }

    #[test]
    fn unknown_sensor_kind_is_a_parse_error() {
        let err = parse("[sensor]\nkind = \"dht11\"\n").unwrap_err();
        assert!(err.to_string().starts_with("config error: TOML parse error"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = load("/nonexistent/telemetry.toml").unwrap();
        assert_eq!(config, TelemetryConfig::default());
    }
}
