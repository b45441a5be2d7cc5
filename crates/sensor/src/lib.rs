pub mod simulated;
pub mod system;

pub use simulated::SimulatedSensor;
pub use system::SystemSensor;

use std::time::Duration;
use telemetry_core::Reading;
use tokio::sync::mpsc;
use tokio::time;

/// A driver that yields one [`Reading`] per poll.
///
/// Drivers never fail: a channel that could not be measured is reported as
/// NaN and filtered out further down the pipeline.
pub trait Sensor: Send {
    fn read(&mut self) -> Reading;
}

impl<S: Sensor + ?Sized> Sensor for Box<S> {
    fn read(&mut self) -> Reading {
        (**self).read()
    }
}

/// Spawn a background Tokio task that polls `sensor` every `interval` and
/// forwards each [`Reading`] through the returned channel.
///
/// The first poll happens immediately.  The task stops automatically when the
/// receiver is dropped.
pub fn spawn_poller<S>(mut sensor: S, interval: Duration) -> mpsc::Receiver<Reading>
where
    S: Sensor + 'static,
{
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            let reading = sensor.read();
            tracing::trace!(?reading, "sensor polled");

            if tx.send(reading).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(f32);

    impl Sensor for Counting {
        fn read(&mut self) -> Reading {
            self.0 += 1.0;
            Reading::new(self.0, 50.0)
        }
    }

    #[tokio::test]
    async fn poller_forwards_readings_in_order() {
        let mut rx = spawn_poller(Counting(0.0), Duration::from_millis(1));

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(rx.recv().await.unwrap().temperature);
        }
        assert_eq!(seen, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn boxed_sensor_delegates() {
        let mut sensor: Box<dyn Sensor> = Box::new(Counting(10.0));
        assert_eq!(sensor.read().temperature, 11.0);
    }
}
