use chrono::{DateTime, Local};
use telemetry_core::{Channel, Reading};
use telemetry_display::{Layout, Page, Screen};
use telemetry_series::{Rejected, StatisticsSeries};

/// Samples per averaging window: one minute at one poll every two seconds.
pub const WINDOW_CAPACITY: usize = 30;

/// Running minimum / maximum across closed windows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

impl Range {
    fn point(value: f32) -> Self {
        Self { min: Some(value), max: Some(value) }
    }

    /// Widen the range to cover `min..=max`.  Unset bounds are ignored.
    fn include(&mut self, min: Option<f32>, max: Option<f32>) {
        if let Some(v) = min {
            self.min = Some(self.min.map_or(v, |m| m.min(v)));
        }
        if let Some(v) = max {
            self.max = Some(self.max.map_or(v, |m| m.max(v)));
        }
    }
}

/// Samples refused during one window, summed over both channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drops {
    /// Sensor returned no value.
    pub missing: u32,
    /// The channel's window was already full.
    pub full: u32,
}

/// What a window looked like when it closed.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSummary {
    pub closed_at:           DateTime<Local>,
    /// Mean temperature, `None` if the window held no valid sample.
    pub temperature:         Option<f32>,
    /// Mean humidity, `None` if the window held no valid sample.
    pub humidity:            Option<f32>,
    pub temperature_samples: usize,
    pub humidity_samples:    usize,
    /// Sensor polls fed into the window.
    pub polls:               u32,
    pub drops:               Drops,
}

/// Per-channel windows plus the long-term extremes shown on the range pages.
#[derive(Debug)]
pub struct Monitor<const N: usize = WINDOW_CAPACITY> {
    temperature:       StatisticsSeries<f32, N>,
    humidity:          StatisticsSeries<f32, N>,
    temperature_range: Range,
    humidity_range:    Range,
    polls:             u32,
    drops:             Drops,
}

impl<const N: usize> Monitor<N> {
    pub fn new() -> Self {
        Self {
            temperature:       StatisticsSeries::new(),
            humidity:          StatisticsSeries::new(),
            temperature_range: Range::default(),
            humidity_range:    Range::default(),
            polls:             0,
            drops:             Drops::default(),
        }
    }

    /// Initialise the long-term extremes from the first complete reading.
    ///
    /// Returns `false` (and changes nothing) while the reading is incomplete.
    pub fn seed(&mut self, reading: Reading) -> bool {
        if !reading.is_complete() {
            return false;
        }
        self.temperature_range = Range::point(reading.temperature);
        self.humidity_range    = Range::point(reading.humidity);
        true
    }

    /// Feed one poll into the current window.
    pub fn record(&mut self, reading: Reading) {
        self.polls += 1;
        for channel in Channel::ALL {
            let series = match channel {
                Channel::Temperature => &mut self.temperature,
                Channel::Humidity    => &mut self.humidity,
            };
            match series.try_add(reading.get(channel)) {
                Ok(()) => {}
                Err(Rejected::Missing) => {
                    self.drops.missing += 1;
                    tracing::debug!(channel = channel.name(), "missing reading dropped");
                }
                Err(Rejected::Full) => {
                    self.drops.full += 1;
                    tracing::debug!(channel = channel.name(), "window full, sample dropped");
                }
            }
        }
    }

    /// A window is done as soon as either channel has filled up.
    pub fn window_complete(&self) -> bool {
        self.temperature.is_full() || self.humidity.is_full()
    }

    /// Fold the window into the long-term extremes, summarise it, and start
    /// a fresh one.
    pub fn close_window(&mut self) -> WindowSummary {
        self.temperature_range.include(self.temperature.min(), self.temperature.max());
        self.humidity_range.include(self.humidity.min(), self.humidity.max());

        let temperature_samples = self.temperature.len();
        let humidity_samples    = self.humidity.len();

        let summary = WindowSummary {
            closed_at:   Local::now(),
            temperature: self.temperature.average_and_clear(),
            humidity:    self.humidity.average_and_clear(),
            temperature_samples,
            humidity_samples,
            polls:       self.polls,
            drops:       self.drops,
        };

        self.polls = 0;
        self.drops = Drops::default();
        summary
    }

    /// Render `page` from the current state.
    pub fn screen(&self, page: Page, layout: &Layout) -> Screen {
        match page {
            Page::TemperatureRange => {
                layout.temperature_range(self.temperature_range.min, self.temperature_range.max)
            }
            Page::HumidityRange => {
                layout.humidity_range(self.humidity_range.min, self.humidity_range.max)
            }
            Page::Averages => layout.averages(self.temperature.average(), self.humidity.average()),
        }
    }

    pub fn temperature(&self) -> &StatisticsSeries<f32, N> {
        &self.temperature
    }

    pub fn humidity(&self) -> &StatisticsSeries<f32, N> {
        &self.humidity
    }

    pub fn temperature_range(&self) -> Range {
        self.temperature_range
    }

    pub fn humidity_range(&self) -> Range {
        self.humidity_range
    }

    /// Refusals so far in the current window.
    pub fn drops(&self) -> Drops {
        self.drops
    }
}

impl<const N: usize> Default for Monitor<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_waits_for_a_complete_reading() {
        let mut m = Monitor::<4>::new();
        assert!(!m.seed(Reading::new(20.0, f32::NAN)));
        assert_eq!(m.temperature_range(), Range::default());

        assert!(m.seed(Reading::new(20.0, 40.0)));
        assert_eq!(m.temperature_range(), Range { min: Some(20.0), max: Some(20.0) });
        assert_eq!(m.humidity_range(), Range { min: Some(40.0), max: Some(40.0) });
    }

    #[test]
    fn channels_fill_independently() {
        let mut m = Monitor::<2>::new();
        m.record(Reading::new(20.0, f32::NAN));
        assert!(!m.window_complete());
        assert_eq!(m.temperature().len(), 1);
        assert!(m.humidity().is_empty());

        m.record(Reading::new(22.0, 50.0));
        assert!(m.window_complete());
        assert_eq!(m.drops(), Drops { missing: 1, full: 0 });
    }

    #[test]
    fn full_window_counts_drops() {
        let mut m = Monitor::<1>::new();
        m.record(Reading::new(20.0, 40.0));
        m.record(Reading::new(21.0, 41.0));
        assert_eq!(m.drops(), Drops { missing: 0, full: 2 });
        assert_eq!(m.temperature().average(), Some(20.0));
    }

    #[test]
    fn close_window_summarises_and_resets() {
        let mut m = Monitor::<3>::new();
        m.record(Reading::new(20.0, 40.0));
        m.record(Reading::MISSING);
        m.record(Reading::new(24.0, 50.0));

        let summary = m.close_window();
        assert_eq!(summary.temperature, Some(22.0));
        assert_eq!(summary.humidity, Some(45.0));
        assert_eq!(summary.temperature_samples, 2);
        assert_eq!(summary.humidity_samples, 2);
        assert_eq!(summary.polls, 3);
        assert_eq!(summary.drops, Drops { missing: 2, full: 0 });

        assert!(m.temperature().is_empty());
        assert!(m.humidity().is_empty());
        assert_eq!(m.drops(), Drops::default());
    }

    #[test]
    fn extremes_span_all_closed_windows() {
        let mut m = Monitor::<2>::new();
        m.seed(Reading::new(21.0, 45.0));

        m.record(Reading::new(18.0, 50.0));
        m.record(Reading::new(19.0, 52.0));
        m.close_window();

        m.record(Reading::new(25.0, 30.0));
        m.close_window();

        assert_eq!(m.temperature_range(), Range { min: Some(18.0), max: Some(25.0) });
        assert_eq!(m.humidity_range(), Range { min: Some(30.0), max: Some(52.0) });
    }

    #[test]
    fn empty_window_leaves_extremes_alone() {
        let mut m = Monitor::<2>::new();
        m.seed(Reading::new(21.0, 45.0));
        m.record(Reading::MISSING);

        let summary = m.close_window();
        assert_eq!(summary.temperature, None);
        assert_eq!(m.temperature_range(), Range { min: Some(21.0), max: Some(21.0) });
    }

    #[test]
    fn screens_render_each_page() {
        let layout = Layout::default();
        let mut m = Monitor::<4>::new();
        m.seed(Reading::new(21.0, 45.0));
        m.record(Reading::new(23.0, 47.0));

        let range = m.screen(Page::TemperatureRange, &layout);
        assert_eq!(range.top(), "Min:  21.00°C");
        assert_eq!(range.bottom(), "Max:  21.00°C");

        let hum = m.screen(Page::HumidityRange, &layout);
        assert_eq!(hum.bottom(), "Max:  45.00%");

        let avg = m.screen(Page::Averages, &layout);
        assert_eq!(avg.top(), "Temp: 23.00°C");
        assert_eq!(avg.bottom(), "Hum:  47.00%");
    }
}
