//! Cancellable periodic driver for the save/refresh loops.
//!
//! # Responsibility
//! - Invoke a tick callback on a fixed wall-clock interval.
//! - Stop promptly on request instead of running as a bare interval.
//!
//! # Invariants
//! - The callback is never invoked after `stop()` returns.
//! - Dropping the task stops it; the worker thread never outlives the
//!   handle.

use log::info;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Shared interval for both the writer save loop and reader refresh loop.
pub const SYNC_INTERVAL: Duration = Duration::from_secs(2);

struct Signal {
    stopped: Mutex<bool>,
    changed: Condvar,
}

/// Periodic background task with an explicit start/stop lifecycle.
///
/// Sync correctness never depends on this driver: tests call the roles'
/// `tick()` directly instead of waiting on the wall clock.
pub struct PeriodicTask {
    name: &'static str,
    signal: Arc<Signal>,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Spawns a worker invoking `tick` every `interval` until stopped.
    pub fn spawn<F>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let signal = Arc::new(Signal {
            stopped: Mutex::new(false),
            changed: Condvar::new(),
        });
        let worker_signal = Arc::clone(&signal);

        let handle = std::thread::spawn(move || {
            loop {
                let guard = worker_signal
                    .stopped
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                let (guard, _timeout) = worker_signal
                    .changed
                    .wait_timeout_while(guard, interval, |stopped| !*stopped)
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                if *guard {
                    return;
                }
                drop(guard);
                tick();
            }
        });

        info!(
            "event=task_start module=poll status=ok task={} interval_ms={}",
            name,
            interval.as_millis()
        );

        Self {
            name,
            signal,
            handle: Some(handle),
        }
    }

    /// Stops the task and waits for the worker to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        {
            let mut stopped = self
                .signal
                .stopped
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *stopped = true;
        }
        self.signal.changed.notify_all();

        // A panicking tick already aborted the loop; nothing to salvage.
        let _ = handle.join();
        info!("event=task_stop module=poll status=ok task={}", self.name);
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}
