use thiserror::Error;

/// Top-level error type shared by the host-side crates.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;
