pub mod error;
pub mod reading;

pub use error::{Result, TelemetryError};
pub use reading::{Channel, Reading};
