/// One poll of the sensor: a value per channel.
///
/// A channel the sensor could not measure carries `f32::NAN`, the same
/// missing-reading sentinel the statistics series filters out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Degrees, in the unit configured for the display.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

impl Reading {
    /// A poll where nothing could be read.
    pub const MISSING: Self = Self {
        temperature: f32::NAN,
        humidity:    f32::NAN,
    };

    pub fn new(temperature: f32, humidity: f32) -> Self {
        Self { temperature, humidity }
    }

    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity    => self.humidity,
        }
    }

    /// `true` when every channel holds a real value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.temperature.is_nan() && !self.humidity.is_nan()
    }
}

/// The measured quantities of a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Temperature,
    Humidity,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Temperature, Channel::Humidity];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::Humidity    => "humidity",
        }
    }
}
