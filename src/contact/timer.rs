use std::time::Duration;

pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Schedules deferred work on the UI event loop.
pub trait Timers: Send + Sync {
    fn schedule(&self, delay: Duration, task: TimerTask) -> PendingTimer;
}

/// Handle to a scheduled task. Dropping it cancels the task if it hasn't run.
#[must_use = "dropping a PendingTimer cancels it"]
pub struct PendingTimer {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl PendingTimer {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel, for when scheduling failed.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for PendingTimer {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for PendingTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTimer")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// `setTimeout` on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn schedule(&self, delay: Duration, task: TimerTask) -> PendingTimer {
        match leptos::prelude::set_timeout_with_handle(task, delay) {
            Ok(handle) => PendingTimer::new(move || handle.clear()),
            Err(e) => {
                log::error!("couldn't schedule timer: {e:?}");
                PendingTimer::inert()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_drop_cancels_once() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let counter = cancelled.clone();
        let timer = PendingTimer::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        timer.cancel();
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);

        let counter = cancelled.clone();
        {
            let _timer = PendingTimer::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(cancelled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_inert_timer_is_harmless() {
        let timer = PendingTimer::inert();
        assert_eq!(format!("{timer:?}"), "PendingTimer { armed: false }");
        drop(timer);
    }
}
