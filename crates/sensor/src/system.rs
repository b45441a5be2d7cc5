use sysinfo::Components;

use super::Sensor;
use telemetry_core::Reading;

/// Reads the hottest hardware temperature probe on the host.
///
/// Hosts have no hygrometer, so humidity is always missing.  If no probe
/// reports a value (VMs, containers) temperature is missing too.
pub struct SystemSensor {
    components: Components,
}

impl SystemSensor {
    pub fn new() -> Self {
        let components = Components::new_with_refreshed_list();
        if components.list().is_empty() {
            tracing::warn!("No hardware temperature probes found; readings will be missing.");
        }
        Self { components }
    }
}

impl Default for SystemSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for SystemSensor {
    fn read(&mut self) -> Reading {
        self.components.refresh(false); // false = keep the discovered probe list

        let temperature = hottest(self.components.list().iter().map(|c| c.temperature()));
        Reading::new(temperature.unwrap_or(f32::NAN), f32::NAN)
    }
}

fn hottest(temps: impl Iterator<Item = Option<f32>>) -> Option<f32> {
    temps
        .flatten()
        .filter(|t| !t.is_nan())
        .fold(None, |acc, t| match acc {
            Some(max) if max >= t => Some(max),
            _ => Some(t),
        })
}
