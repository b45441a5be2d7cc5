use telemetry_config::DisplayConfig;

/// The three rotating views of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Long-term temperature minimum and maximum.
    TemperatureRange,
    /// Long-term humidity minimum and maximum.
    HumidityRange,
    /// Mean temperature and humidity of the current window.
    Averages,
}

impl Page {
    /// Rotation order.
    pub const ALL: [Page; 3] = [Page::TemperatureRange, Page::HumidityRange, Page::Averages];
}

/// Two lines of already formatted, already truncated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: [String; 2],
}

impl Screen {
    pub fn top(&self) -> &str {
        &self.lines[0]
    }

    pub fn bottom(&self) -> &str {
        &self.lines[1]
    }
}

/// Turns values into [`Screen`]s sized for a particular display.
#[derive(Debug, Clone)]
pub struct Layout {
    pub columns:          usize,
    pub temperature_unit: String,
    pub humidity_unit:    String,
}

impl Layout {
    pub fn from_config(cfg: &DisplayConfig) -> Self {
        Self {
            columns:          cfg.columns,
            temperature_unit: cfg.temperature_unit.clone(),
            humidity_unit:    cfg.humidity_unit.clone(),
        }
    }

    /// `Min:` / `Max:` lines for a temperature range.
    pub fn temperature_range(&self, min: Option<f32>, max: Option<f32>) -> Screen {
        self.pair(("Min:  ", min, &self.temperature_unit), ("Max:  ", max, &self.temperature_unit))
    }

    /// `Min:` / `Max:` lines for a humidity range.
    pub fn humidity_range(&self, min: Option<f32>, max: Option<f32>) -> Screen {
        self.pair(("Min:  ", min, &self.humidity_unit), ("Max:  ", max, &self.humidity_unit))
    }

    /// `Temp:` / `Hum:` lines.
    pub fn averages(&self, temperature: Option<f32>, humidity: Option<f32>) -> Screen {
        self.pair(
            ("Temp: ", temperature, &self.temperature_unit),
            ("Hum:  ", humidity, &self.humidity_unit),
        )
    }

    fn pair(
        &self,
        top: (&str, Option<f32>, &str),
        bottom: (&str, Option<f32>, &str),
    ) -> Screen {
        Screen {
            lines: [
                self.line(top.0, top.1, top.2),
                self.line(bottom.0, bottom.1, bottom.2),
            ],
        }
    }

    fn line(&self, label: &str, value: Option<f32>, unit: &str) -> String {
        let text = match value {
            Some(v) => format!("{label}{v:.2}{unit}"),
            None    => format!("{label}--"),
        };
        text.chars().take(self.columns).collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_use_two_decimals() {
        let screen = Layout::default().averages(Some(21.5), Some(48.25));
        assert_eq!(screen.top(), "Temp: 21.50°C");
        assert_eq!(screen.bottom(), "Hum:  48.25%");
    }

    #[test]
    fn unset_values_render_as_dashes() {
        let screen = Layout::default().humidity_range(None, Some(60.0));
        assert_eq!(screen.top(), "Min:  --");
        assert_eq!(screen.bottom(), "Max:  60.00%");
    }

    #[test]
    fn lines_are_cut_to_the_column_count() {
        let layout = Layout { columns: 10, ..Layout::default() };
        let screen = layout.temperature_range(Some(-12.345), Some(100.0));
        assert_eq!(screen.top(), "Min:  -12.");
        assert_eq!(screen.bottom(), "Max:  100.");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let layout = Layout { columns: 13, ..Layout::default() };
        let screen = layout.averages(Some(21.0), None);
        assert_eq!(screen.top(), "Temp: 21.00°C");
    }
}
