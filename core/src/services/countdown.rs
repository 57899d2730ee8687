//! One-second tick source for the resend countdown
//!
//! The ticker is an explicit "zero or one scheduled operation" resource:
//! starting it replaces any previous tick task, and stopping or dropping
//! the handle aborts the task, so no tick can outlive the flow that owns
//! the receiving end. The shell wires the receiver to
//! `RegistrationFlow::tick` and stops the ticker once the countdown
//! elapses.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to the single scheduled countdown tick task
#[derive(Debug, Default)]
pub struct CountdownTicker {
    handle: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Creates a ticker with no task scheduled
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts delivering one tick per second on `ticks`
    ///
    /// Any previously scheduled task is aborted first, so at most one tick
    /// task is ever live. The task ends on its own when the receiver is
    /// dropped.
    ///
    /// The ticker does not observe the countdown value: the receiving side
    /// must call [`CountdownTicker::stop`] (or drop the ticker) once the
    /// countdown reaches zero. Ticks delivered past zero are harmless,
    /// since [`ResendCountdown::tick`] saturates there.
    ///
    /// [`ResendCountdown::tick`]: crate::domain::value_objects::resend_countdown::ResendCountdown::tick
    pub fn start(&mut self, ticks: mpsc::Sender<()>) {
        self.stop();
        debug!(event = "countdown_ticker_started", "Starting countdown ticker");
        self.handle = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if ticks.send(()).await.is_err() {
                    break;
                }
            }
        }));
    }

    /// Cancels the scheduled tick task, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(event = "countdown_ticker_stopped", "Stopping countdown ticker");
            handle.abort();
        }
    }

    /// Whether a tick task is currently scheduled
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
