use std::f32::consts::TAU;

use super::Sensor;
use telemetry_core::Reading;

/// Polls per full temperature / humidity cycle.
const PERIOD: u32 = 90;

/// Deterministic stand-in for a temperature / humidity probe.
///
/// Temperature swings ±3° around 21°, humidity ±10% around 45%, a quarter
/// period out of phase.  With `dropout_every = k`, every k-th poll comes
/// back as [`Reading::MISSING`], the way a DHT22 occasionally fails its
/// checksum.
#[derive(Debug, Clone)]
pub struct SimulatedSensor {
    tick:          u32,
    dropout_every: u32,
}

impl SimulatedSensor {
    pub fn new(dropout_every: u32) -> Self {
        Self { tick: 0, dropout_every }
    }
}

impl Sensor for SimulatedSensor {
    fn read(&mut self) -> Reading {
        self.tick = self.tick.wrapping_add(1);

        if self.dropout_every > 0 && self.tick % self.dropout_every == 0 {
            return Reading::MISSING;
        }

        let phase = (self.tick % PERIOD) as f32 / PERIOD as f32 * TAU;
        Reading::new(21.0 + 3.0 * phase.sin(), 45.0 + 10.0 * phase.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        let mut sensor = SimulatedSensor::new(0);
        for _ in 0..PERIOD * 2 {
            let r = sensor.read();
            assert!(r.is_complete());
            assert!((18.0..=24.0).contains(&r.temperature));
            assert!((35.0..=55.0).contains(&r.humidity));
        }
    }

    #[test]
    fn every_kth_reading_is_missing() {
        let mut sensor = SimulatedSensor::new(3);
        let complete: Vec<bool> = (0..6).map(|_| sensor.read().is_complete()).collect();
        assert_eq!(complete, [true, true, false, true, true, false]);
    }
}
