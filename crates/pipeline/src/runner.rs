use telemetry_core::{Reading, Result};
use telemetry_display::{Display, Layout, Page};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::monitor::{Monitor, WindowSummary, WINDOW_CAPACITY};

/// Limits for [`Pipeline::run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after this many closed windows.  `None` = until the reading
    /// stream ends.
    pub max_windows: Option<usize>,
}

/// Drives a [`Monitor`] from a reading stream and keeps a [`Display`] updated.
///
/// Every received reading is one tick of the polling cadence; the pipeline
/// never sleeps on its own.
pub struct Pipeline<D, const N: usize = WINDOW_CAPACITY> {
    monitor: Monitor<N>,
    display: D,
    layout:  Layout,
    last:    Option<WindowSummary>,
}

impl<D: Display, const N: usize> Pipeline<D, N> {
    pub fn new(display: D, layout: Layout) -> Self {
        Self {
            monitor: Monitor::new(),
            display,
            layout,
            last: None,
        }
    }

    pub fn monitor(&self) -> &Monitor<N> {
        &self.monitor
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Summary of the most recently closed window.
    pub fn last_summary(&self) -> Option<&WindowSummary> {
        self.last.as_ref()
    }

    /// Consume `readings` until the stream closes or `options.max_windows`
    /// windows have been summarised.  Returns the number of closed windows.
    pub async fn run(
        &mut self,
        readings: &mut mpsc::Receiver<Reading>,
        options: RunOptions,
    ) -> Result<usize> {
        let mut closed = 0;

        if !self.warm_up(readings).await? {
            return Ok(closed);
        }

        while options.max_windows.map_or(true, |max| closed < max) {
            match self.window(readings).await? {
                Some(summary) => {
                    self.last = Some(summary);
                    closed += 1;
                }
                None => break,
            }
        }

        Ok(closed)
    }

    /// Wait until the sensor produces a complete reading and show it.
    async fn warm_up(&mut self, readings: &mut mpsc::Receiver<Reading>) -> Result<bool> {
        while let Some(reading) = readings.recv().await {
            if self.monitor.seed(reading) {
                info!(
                    temperature = reading.temperature,
                    humidity = reading.humidity,
                    "sensor ready"
                );
                let screen = self
                    .layout
                    .averages(Some(reading.temperature), Some(reading.humidity));
                self.display.show(&screen)?;
                return Ok(true);
            }
            debug!("waiting for a complete first reading");
        }
        Ok(false)
    }

    /// Fill one window, then show its summary.  `None` if the stream ended
    /// before the window completed.
    async fn window(
        &mut self,
        readings: &mut mpsc::Receiver<Reading>,
    ) -> Result<Option<WindowSummary>> {
        let mut round = 0u32;

        while !self.monitor.window_complete() {
            for page in Page::ALL {
                let Some(reading) = readings.recv().await else {
                    debug!("reading stream closed mid-window");
                    return Ok(None);
                };
                self.monitor.record(reading);

                // The display only changes every other round.
                if round % 2 == 0 {
                    self.display.show(&self.monitor.screen(page, &self.layout))?;
                }
            }
            round += 1;
        }

        let summary = self.monitor.close_window();
        log_summary(&summary);

        self.display.show(&self.monitor.screen(Page::TemperatureRange, &self.layout))?;
        if !self.hold(readings).await {
            return Ok(Some(summary));
        }
        self.display.show(&self.monitor.screen(Page::HumidityRange, &self.layout))?;
        if !self.hold(readings).await {
            return Ok(Some(summary));
        }
        self.display.show(&self.layout.averages(summary.temperature, summary.humidity))?;

        Ok(Some(summary))
    }

    /// Keep the current screen up for one poll.  The reading still counts
    /// toward the next window.
    async fn hold(&mut self, readings: &mut mpsc::Receiver<Reading>) -> bool {
        match readings.recv().await {
            Some(reading) => {
                self.monitor.record(reading);
                true
            }
            None => false,
        }
    }
}

fn log_summary(summary: &WindowSummary) {
    info!(
        closed_at = %summary.closed_at.format("%H:%M:%S"),
        temperature = ?summary.temperature,
        humidity = ?summary.humidity,
        polls = summary.polls,
        missing = summary.drops.missing,
        full = summary.drops.full,
        "window closed"
    );
    if summary.temperature.is_none() {
        warn!("No valid temperature samples in the last window.");
    }
    if summary.humidity.is_none() {
        warn!("No valid humidity samples in the last window.");
    }
}
