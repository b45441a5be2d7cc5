use super::{Display, Screen};
use telemetry_core::Result;

/// Keeps every screen it is asked to show.  Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub screens: Vec<Screen>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Screen> {
        self.screens.last()
    }
}

impl Display for RecordingDisplay {
    fn show(&mut self, screen: &Screen) -> Result<()> {
        tracing::debug!(top = screen.top(), bottom = screen.bottom(), "screen");
        self.screens.push(screen.clone());
        Ok(())
    }
}
