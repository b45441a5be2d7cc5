use std::io::Write;

use super::{Display, Screen};
use telemetry_core::Result;

/// Writes each screen as two lines to a [`Write`] sink (stdout by default).
pub struct TerminalDisplay<W: Write + Send = std::io::Stdout> {
    out: W,
}

impl TerminalDisplay {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Display for TerminalDisplay<W> {
    fn show(&mut self, screen: &Screen) -> Result<()> {
        writeln!(self.out, "{}", screen.top())?;
        writeln!(self.out, "{}", screen.bottom())?;
        self.out.flush()?;
        Ok(())
    }
}
