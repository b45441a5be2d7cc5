use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `telemetry.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Where readings come from and how often.
    pub sensor: SensorConfig,
    /// How summaries are shown.
    pub display: DisplayConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            sensor:  SensorConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Sensor driver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Synthetic waveforms, no hardware needed.
    #[default]
    Simulated,
    /// Host hardware temperature probes.
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    pub kind: SensorKind,
    /// Time between two polls.  A DHT22 needs at least 2 s.
    pub poll_interval_ms: u64,
    /// Simulated sensor only: every k-th reading comes back missing
    /// (0 = never).
    pub dropout_every: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            kind:             SensorKind::Simulated,
            poll_interval_ms: 2_000,
            dropout_every:    0,
        }
    }
}

/// Display driver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    /// Print every screen to stdout.
    #[default]
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub kind: DisplayKind,
    /// Characters per line; longer text is cut off like on a character LCD.
    pub columns: usize,
    pub temperature_unit: String,
    pub humidity_unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            kind:             DisplayKind::Terminal,
            columns:          16, // 16x2 HD44780
            temperature_unit: "°C".to_string(),
            humidity_unit:    "%".to_string(),
        }
    }
}
