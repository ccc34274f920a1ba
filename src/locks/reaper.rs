//! Background sweep of expired leases.

use super::manager::LockManager;
use crate::error::{EditLockError, Result};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Periodically removes expired leases from a [`LockManager`].
///
/// Sweeping is idempotent, so running zero, one or several reapers against
/// the same manager never breaks the one-lease-per-resource invariant.
pub struct Reaper {
    manager: Arc<LockManager>,
}

impl Reaper {
    pub fn new(manager: Arc<LockManager>) -> Self {
        Self { manager }
    }

    /// Run one sweep now. Returns the number of leases removed.
    pub fn tick(&self) -> usize {
        let removed = self.manager.sweep_expired();
        if removed > 0 {
            debug!(removed, "reaped expired leases");
        }
        removed
    }

    /// Start sweeping every `sweep_interval` on a dedicated thread.
    ///
    /// The thread runs until the returned handle is shut down or dropped.
    pub fn spawn(self) -> Result<ReaperHandle> {
        let interval = self.manager.config().sweep_interval();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name("lease-reaper".to_string())
            .spawn(move || {
                info!(interval_ms = interval.as_millis() as u64, "reaper started");
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            self.tick();
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                info!("reaper stopped");
            })
            .map_err(|e| {
                EditLockError::ReaperError(format!("failed to spawn reaper thread: {}", e))
            })?;

        Ok(ReaperHandle {
            stop: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

/// Owns the reaper thread. Dropping it stops the reaper.
#[derive(Debug)]
pub struct ReaperHandle {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ReaperHandle {
    /// Stop the reaper and wait for its thread to exit.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        // Dropping the sender wakes the thread with `Disconnected`.
        self.stop.take();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            warn!("reaper thread panicked");
        }
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}
