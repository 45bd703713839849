//! Producer loop: poll a sensor, push frames to the worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::handle::ServiceHandle;
use crate::sensor::CardSensor;

/// How long `SensorLoop::stop` waits before abandoning the task.
const STOP_TIMEOUT: Duration = Duration::from_secs(1);

/// A running sensor loop.
#[derive(Debug)]
pub struct SensorLoop {
    stop: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl SensorLoop {
    /// Ask the loop to exit at the top of its next iteration.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Request a stop and wait up to one second for the loop to exit.
    ///
    /// Returns `false` if the loop had to be aborted.
    pub async fn stop(mut self) -> bool {
        self.request_stop();
        match tokio::time::timeout(STOP_TIMEOUT, &mut self.task).await {
            Ok(_) => true,
            Err(_) => {
                tracing::warn!("Sensor loop did not stop in time; aborting");
                self.task.abort();
                false
            }
        }
    }
}

/// Poll `sensor` every `poll_interval` and forward non-empty frames.
///
/// Sensor errors are logged and the frame is skipped. The loop ends when
/// stopped or when the service goes away, whether or not the sensor is
/// producing frames.
pub fn spawn_sensor_loop<S>(mut sensor: S, handle: ServiceHandle, poll_interval: Duration) -> SensorLoop
where
    S: CardSensor + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);

    let task = tokio::spawn(async move {
        let mut failures: u64 = 0;
        tracing::info!(sensor = sensor.name(), poll_ms = poll_interval.as_millis() as u64, "Sensor loop started");

        while !flag.load(Ordering::Acquire) {
            if handle.is_closed() {
                tracing::info!(sensor = sensor.name(), "Tracker service closed; sensor loop exiting");
                break;
            }
            let started = Instant::now();

            match sensor.poll(handle.now()) {
                Ok(frame) if frame.is_empty() => {}
                Ok(frame) => {
                    if handle.frame(frame).await.is_err() {
                        tracing::info!(sensor = sensor.name(), "Tracker service closed; sensor loop exiting");
                        break;
                    }
                }
                Err(error) => {
                    failures += 1;
                    tracing::warn!(sensor = sensor.name(), error = %error, failures, "Sensor poll failed");
                }
            }

            if let Some(rest) = poll_interval.checked_sub(started.elapsed()) {
                tokio::time::sleep(rest).await;
            }
        }

        tracing::info!(sensor = sensor.name(), failures, "Sensor loop stopped");
    });

    SensorLoop { stop, task }
}
