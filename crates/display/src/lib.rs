pub mod recording;
pub mod screen;
pub mod terminal;

pub use recording::RecordingDisplay;
pub use screen::{Layout, Page, Screen};
pub use terminal::TerminalDisplay;

use telemetry_core::Result;

/// A two-line output device.
pub trait Display: Send {
    /// Replace whatever is currently shown with `screen`.
    fn show(&mut self, screen: &Screen) -> Result<()>;
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn show(&mut self, screen: &Screen) -> Result<()> {
        (**self).show(screen)
    }
}
