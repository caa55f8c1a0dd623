use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use thiserror::Error;

use super::clock::LocalClock;
use super::fields::{Field, FormFields};
use super::location::Locator;
use super::relay::{EmailPayload, EmailRelay};
use super::status::SubmissionStatus;
use super::timer::{PendingTimer, Timers};
use super::timestamp::format_local;

/// How long the success banner stays up before the form comes back.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{message}")]
    DeliveryFailed { message: String },
    /// A submission is in flight or its success banner is still showing.
    #[error("a submission is already in progress")]
    Busy,
}

/// Everything the form needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub fields: FormFields,
    pub status: SubmissionStatus,
}

#[derive(Default)]
struct State {
    fields: FormFields,
    status: SubmissionStatus,
    revert: Option<PendingTimer>,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            fields: self.fields.clone(),
            status: self.status.clone(),
        }
    }
}

type Listener = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// The contact form's submit cycle: field state, metadata enrichment, relay
/// dispatch and the transient success state.
///
/// Cloning yields another handle to the same form.
pub struct ContactWorkflow<R, T> {
    state: Arc<Mutex<State>>,
    relay: Arc<R>,
    timers: Arc<T>,
    clock: Arc<dyn LocalClock>,
    locator: Arc<Locator>,
    listener: Option<Listener>,
}

impl<R, T> Clone for ContactWorkflow<R, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            relay: self.relay.clone(),
            timers: self.timers.clone(),
            clock: self.clock.clone(),
            locator: self.locator.clone(),
            listener: self.listener.clone(),
        }
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().expect("should be able to lock contact form state")
}

impl<R, T> ContactWorkflow<R, T>
where
    R: EmailRelay,
    T: Timers,
{
    pub fn new(relay: R, timers: T, clock: impl LocalClock + 'static, locator: Locator) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            relay: Arc::new(relay),
            timers: Arc::new(timers),
            clock: Arc::new(clock),
            locator: Arc::new(locator),
            listener: None,
        }
    }

    /// Called with the new snapshot after every change, including the timed
    /// return to `Idle`.
    pub fn with_listener(mut self, listener: impl Fn(&Snapshot) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn snapshot(&self) -> Snapshot {
        lock(&self.state).snapshot()
    }

    pub fn fields(&self) -> FormFields {
        lock(&self.state).fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.state).status.clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let snapshot = {
            let mut state = lock(&self.state);
            state.fields.set(field, value);
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    /// Sends the current fields through the relay.
    ///
    /// On success the fields are cleared and the status reverts to `Idle`
    /// after [`SUCCESS_DISPLAY`]. On failure the fields are kept so the user
    /// can resubmit.
    pub async fn submit(&self) -> Result<(), SubmissionError> {
        let (fields, snapshot) = {
            let mut state = lock(&self.state);
            if !state.status.accepts_submit() {
                log::warn!("ignoring submit while {:?}", state.status);
                return Err(SubmissionError::Busy);
            }
            state.status = SubmissionStatus::Submitting;
            (state.fields.clone(), state.snapshot())
        };
        self.notify(&snapshot);

        let time_zone = self.clock.time_zone();
        let date = format_local(self.clock.now(), time_zone.as_deref());
        let address = self.locator.locate(time_zone.as_deref());
        let payload = EmailPayload::new(fields, date, address);

        match self.relay.send(&payload).await {
            Ok(ack) => {
                log::info!("contact message relayed ({} {})", ack.status, ack.text);
                let revert = self.schedule_revert();
                let snapshot = {
                    let mut state = lock(&self.state);
                    state.status = SubmissionStatus::Succeeded;
                    state.fields.clear();
                    state.revert = Some(revert);
                    state.snapshot()
                };
                self.notify(&snapshot);
                Ok(())
            }
            Err(e) => {
                log::error!("email relay error: {e}");
                let message = DELIVERY_FAILED_MESSAGE.to_string();
                let snapshot = {
                    let mut state = lock(&self.state);
                    state.status = SubmissionStatus::Failed {
                        reason: message.clone(),
                    };
                    state.snapshot()
                };
                self.notify(&snapshot);
                Err(SubmissionError::DeliveryFailed { message })
            }
        }
    }

    /// Cancels the pending return to `Idle`. Call when the form unmounts.
    pub fn teardown(&self) {
        let revert = lock(&self.state).revert.take();
        if let Some(revert) = revert {
            log::debug!("cancelling pending contact form reset");
            revert.cancel();
        }
    }

    fn schedule_revert(&self) -> PendingTimer {
        let state: Weak<Mutex<State>> = Arc::downgrade(&self.state);
        let listener = self.listener.clone();
        self.timers.schedule(
            SUCCESS_DISPLAY,
            Box::new(move || {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let (snapshot, fired) = {
                    let mut state = lock(&state);
                    if !state.status.is_succeeded() {
                        return;
                    }
                    state.status = SubmissionStatus::Idle;
                    (state.snapshot(), state.revert.take())
                };
                // the timer has already run, nothing left to cancel
                drop(fired);
                if let Some(listener) = listener {
                    listener(&snapshot);
                }
            }),
        )
    }

    fn notify(&self, snapshot: &Snapshot) {
        if let Some(listener) = &self.listener {
            listener(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::location::LocationOverrides;
    use crate::contact::regions::EnglishRegionNames;
    use crate::contact::relay::{RelayAck, RelayError};
    use crate::contact::timer::TimerTask;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeRelay {
        fail: bool,
        gate: Option<Notify>,
        sent: Mutex<Vec<EmailPayload>>,
    }

    impl FakeRelay {
        fn ok() -> Self {
            Self::default()
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// Holds every send until `release` is called.
        fn gated() -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::default()
            }
        }

        fn release(&self) {
            if let Some(gate) = &self.gate {
                gate.notify_one();
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, payload: &EmailPayload) -> Result<RelayAck, RelayError> {
            self.sent.lock().unwrap().push(payload.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                Err(RelayError::Rejected {
                    status: 412,
                    body: "The Public Key is invalid".to_string(),
                })
            } else {
                Ok(RelayAck {
                    status: 200,
                    text: "OK".to_string(),
                })
            }
        }
    }

    struct Scheduled {
        due: Duration,
        task: Option<TimerTask>,
        cancelled: Arc<AtomicBool>,
    }

    /// Timers driven by hand so tests control the passage of time.
    #[derive(Default)]
    struct ManualTimers {
        now: Mutex<Duration>,
        tasks: Mutex<Vec<Scheduled>>,
    }

    impl ManualTimers {
        fn advance(&self, by: Duration) {
            let now = {
                let mut now = self.now.lock().unwrap();
                *now += by;
                *now
            };
            let due: Vec<TimerTask> = {
                let mut tasks = self.tasks.lock().unwrap();
                tasks
                    .iter_mut()
                    .filter(|t| t.due <= now && !t.cancelled.load(Ordering::SeqCst))
                    .filter_map(|t| t.task.take())
                    .collect()
            };
            for task in due {
                task();
            }
        }

        fn cancelled(&self) -> usize {
            self.tasks
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.cancelled.load(Ordering::SeqCst) && t.task.is_some())
                .count()
        }
    }

    impl Timers for ManualTimers {
        fn schedule(&self, delay: Duration, task: TimerTask) -> PendingTimer {
            let cancelled = Arc::new(AtomicBool::new(false));
            let due = *self.now.lock().unwrap() + delay;
            self.tasks.lock().unwrap().push(Scheduled {
                due,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            PendingTimer::new(move || cancelled.store(true, Ordering::SeqCst))
        }
    }

    impl Timers for Arc<ManualTimers> {
        fn schedule(&self, delay: Duration, task: TimerTask) -> PendingTimer {
            self.as_ref().schedule(delay, task)
        }
    }

    impl EmailRelay for Arc<FakeRelay> {
        async fn send(&self, payload: &EmailPayload) -> Result<RelayAck, RelayError> {
            self.as_ref().send(payload).await
        }
    }

    struct FixedClock {
        now: DateTime<Utc>,
        zone: Option<&'static str>,
    }

    impl LocalClock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.now
        }

        fn time_zone(&self) -> Option<String> {
            self.zone.map(str::to_string)
        }
    }

    fn karachi_clock() -> FixedClock {
        FixedClock {
            // 15:45 PKT
            now: Utc.with_ymd_and_hms(2025, 3, 4, 10, 45, 0).unwrap(),
            zone: Some("Asia/Karachi"),
        }
    }

    fn workflow(
        relay: &Arc<FakeRelay>,
        timers: &Arc<ManualTimers>,
    ) -> ContactWorkflow<Arc<FakeRelay>, Arc<ManualTimers>> {
        ContactWorkflow::new(
            relay.clone(),
            timers.clone(),
            karachi_clock(),
            Locator::new(LocationOverrides::site_default(), EnglishRegionNames),
        )
    }

    fn fill(workflow: &ContactWorkflow<Arc<FakeRelay>, Arc<ManualTimers>>) {
        workflow.set_field(Field::Name, "Ada Lovelace");
        workflow.set_field(Field::Email, "ada@example.com");
        workflow.set_field(Field::Subject, "iOS contract");
        workflow.set_field(Field::Message, "Are you available in April?");
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_relays_metadata() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);

        assert_eq!(workflow.submit().await, Ok(()));
        assert_eq!(workflow.status(), SubmissionStatus::Succeeded);
        assert_eq!(workflow.fields(), FormFields::default());

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            EmailPayload {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                subject: "iOS contract".to_string(),
                message: "Are you available in April?".to_string(),
                date: "Tuesday, March 4, 2025 at 3:45 PM (PKT)".to_string(),
                address: "Lahore, Pakistan".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_success_reverts_to_idle_after_five_seconds() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);
        workflow.submit().await.unwrap();

        timers.advance(Duration::from_millis(4999));
        assert_eq!(workflow.status(), SubmissionStatus::Succeeded);
        timers.advance(Duration::from_millis(1));
        assert_eq!(workflow.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_listener_sees_every_transition() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let workflow = workflow(&relay, &timers)
            .with_listener(move |s: &Snapshot| log.lock().unwrap().push(s.status.clone()));
        fill(&workflow);
        workflow.submit().await.unwrap();
        timers.advance(SUCCESS_DISPLAY);

        let seen = seen.lock().unwrap();
        // four field edits, then the submit cycle
        assert_eq!(seen.len(), 7);
        assert_eq!(
            seen[4..],
            [
                SubmissionStatus::Submitting,
                SubmissionStatus::Succeeded,
                SubmissionStatus::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_busy_is_rejected() {
        let relay = Arc::new(FakeRelay::gated());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);

        let racer = workflow.clone();
        let gate = relay.clone();
        let (first, second) = tokio::join!(workflow.submit(), async move {
            // the first submission is parked on the relay by now
            assert_eq!(racer.status(), SubmissionStatus::Submitting);
            let second = racer.submit().await;
            gate.release();
            second
        });
        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(SubmissionError::Busy));
        assert_eq!(relay.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_during_success_banner_is_rejected() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);
        workflow.submit().await.unwrap();

        fill(&workflow);
        assert_eq!(workflow.submit().await, Err(SubmissionError::Busy));
        timers.advance(SUCCESS_DISPLAY);
        assert_eq!(workflow.submit().await, Ok(()));
        assert_eq!(relay.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_and_allows_resubmit() {
        let relay = Arc::new(FakeRelay::failing());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);
        let before = workflow.fields();

        let err = workflow.submit().await.unwrap_err();
        assert_eq!(
            err,
            SubmissionError::DeliveryFailed {
                message: DELIVERY_FAILED_MESSAGE.to_string()
            }
        );
        let status = workflow.status();
        assert!(!status.failure().unwrap().is_empty());
        // raw relay detail stays out of the UI
        assert!(!status.failure().unwrap().contains("Public Key"));
        assert_eq!(workflow.fields(), before);

        assert!(workflow.submit().await.is_err());
        assert_eq!(relay.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_teardown_cancels_pending_reset() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);
        workflow.submit().await.unwrap();

        workflow.teardown();
        assert_eq!(timers.cancelled(), 1);
        timers.advance(SUCCESS_DISPLAY);
        assert_eq!(workflow.status(), SubmissionStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_dropping_last_handle_cancels_pending_reset() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let workflow = workflow(&relay, &timers);
        fill(&workflow);
        workflow.submit().await.unwrap();

        drop(workflow);
        assert_eq!(timers.cancelled(), 1);
        timers.advance(SUCCESS_DISPLAY);
    }

    #[tokio::test]
    async fn test_unknown_zone_still_submits() {
        let relay = Arc::new(FakeRelay::ok());
        let timers = Arc::new(ManualTimers::default());
        let workflow = ContactWorkflow::new(
            relay.clone(),
            timers.clone(),
            FixedClock {
                now: Utc.with_ymd_and_hms(2025, 3, 4, 10, 45, 0).unwrap(),
                zone: None,
            },
            Locator::site_default(),
        );
        fill(&workflow);
        workflow.submit().await.unwrap();

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent[0].address, "Unknown Location");
        assert_eq!(sent[0].date, "Tuesday, March 4, 2025 at 10:45 AM (UTC)");
    }
}
