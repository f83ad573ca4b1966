use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::{
    sync::watch,
    task::{AbortHandle, JoinHandle},
};

use crate::{
    Clock, ContactForm, Dispatcher, FallbackPayload, FormKind, MailHandoff, PageContext,
    Rejection, SiteConfig, SubmissionKind, SubmissionStatus, TimingConfig, WaitlistCounter,
    WaitlistForm, compose_fallback, notification_payload, validate,
};

/// What became of one submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation failed; nothing was sent and the status did not move.
    Rejected(Rejection),
    /// A submission for this form is still in flight; the event was ignored.
    Busy,
    /// The provider accepted the notification. `position` is the new
    /// waitlist count for waitlist signups.
    Delivered { position: Option<u64> },
    /// The provider failed and the visitor was handed a pre-filled message.
    FellBack(FallbackPayload),
    /// The form was torn down before the dispatch settled.
    Cancelled,
}

/// Collaborators shared by every controller of a page session.
#[derive(Clone)]
pub struct Collaborators {
    pub site: Arc<SiteConfig>,
    pub timings: TimingConfig,
    pub clock: Arc<dyn Clock>,
    pub handoff: Arc<dyn MailHandoff>,
}

struct State<F> {
    status: SubmissionStatus,
    fields: F,
    reset: Option<JoinHandle<()>>,
    /// The dispatch in flight. It settles the form even when the caller
    /// stops waiting for it.
    dispatch: Option<AbortHandle>,
    /// Bumped on every accepted submission so a reset timer that lost the
    /// race against a newer submission cannot clobber it.
    epoch: u64,
}

struct Inner<K: FormKind> {
    state: Mutex<State<K::Fields>>,
    status_tx: watch::Sender<SubmissionStatus>,
    dispatcher: Dispatcher,
    collaborators: Collaborators,
    counter: Option<WaitlistCounter>,
}

impl<K: FormKind> Inner<K> {
    fn lock(&self) -> MutexGuard<'_, State<K::Fields>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_status(&self, state: &mut State<K::Fields>, status: SubmissionStatus) {
        state.status = status;
        self.status_tx.send_replace(status);
    }

    fn schedule_reset(self: &Arc<Self>, state: &mut State<K::Fields>, delay: Duration) {
        if let Some(previous) = state.reset.take() {
            previous.abort();
        }

        let inner = Arc::downgrade(self);
        let epoch = state.epoch;

        state.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(inner) = inner.upgrade() else {
                return;
            };

            let mut state = inner.lock();
            if state.epoch != epoch || !state.status.is_transient() {
                return;
            }

            state.reset = None;
            inner.set_status(&mut state, SubmissionStatus::Idle);
            tracing::debug!(form = K::NAME, "Form reset to idle");
        }));
    }
}

impl<K: FormKind> Drop for Inner<K> {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(reset) = state.reset.take() {
            reset.abort();
        }
        if let Some(dispatch) = state.dispatch.take() {
            dispatch.abort();
        }
    }
}

/// Per-form state machine: validate, dispatch, then either celebrate or hand
/// the visitor a pre-filled message, and time back out to idle.
///
/// Handles are cheap to clone and all drive the same form. Dropping the last
/// one cancels any pending reset.
pub struct SubmissionController<K: FormKind> {
    inner: Arc<Inner<K>>,
}

impl<K: FormKind> Clone for SubmissionController<K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl SubmissionController<ContactForm> {
    pub fn contact(dispatcher: Dispatcher, collaborators: Collaborators) -> Self {
        Self::build(dispatcher, collaborators, None)
    }
}

impl SubmissionController<WaitlistForm> {
    /// The waitlist controller takes the counter: it is the only writer.
    pub fn waitlist(
        dispatcher: Dispatcher,
        collaborators: Collaborators,
        counter: WaitlistCounter,
    ) -> Self {
        Self::build(dispatcher, collaborators, Some(counter))
    }
}

impl<K: FormKind> SubmissionController<K> {
    fn build(
        dispatcher: Dispatcher,
        collaborators: Collaborators,
        counter: Option<WaitlistCounter>,
    ) -> Self {
        let (status_tx, _) = watch::channel(SubmissionStatus::Idle);

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    status: SubmissionStatus::Idle,
                    fields: K::Fields::default(),
                    reset: None,
                    dispatch: None,
                    epoch: 0,
                }),
                status_tx,
                dispatcher,
                collaborators,
                counter,
            }),
        }
    }

    /// Read handle on the waitlist count; `None` for forms that do not count.
    pub fn counter(&self) -> Option<&WaitlistCounter> {
        self.inner.counter.as_ref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.lock().status
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.inner.status_tx.subscribe()
    }

    pub fn fields(&self) -> K::Fields {
        self.inner.lock().fields.clone()
    }

    pub fn set_fields(&self, fields: K::Fields) {
        self.inner.lock().fields = fields;
    }

    /// Submit whatever the form currently holds.
    pub async fn submit(&self, page: &PageContext) -> Outcome {
        self.run(None, page).await
    }

    /// Replace the form's fields and submit them in one step. The fields are
    /// left untouched when the form is busy.
    pub async fn submit_fields(&self, fields: K::Fields, page: &PageContext) -> Outcome {
        self.run(Some(fields), page).await
    }

    async fn run(&self, fields: Option<K::Fields>, page: &PageContext) -> Outcome {
        let inner = &self.inner;

        let handle = {
            let mut state = inner.lock();

            if state.status == SubmissionStatus::Sending {
                tracing::debug!(form = K::NAME, "Submission ignored, one is already in flight");
                return Outcome::Busy;
            }

            if let Some(fields) = fields {
                state.fields = fields;
            }

            let kind = K::kind(&state.fields);
            if let Err(reason) = validate(&kind) {
                tracing::debug!(form = K::NAME, %reason, "Submission rejected");
                return Outcome::Rejected(reason);
            }

            if let Some(reset) = state.reset.take() {
                reset.abort();
            }

            state.epoch += 1;
            inner.set_status(&mut state, SubmissionStatus::Sending);

            let waitlist_number = inner.counter.as_ref().map(|c| c.current() + 1);
            let handle = tokio::spawn(Self::settle(
                Arc::downgrade(inner),
                inner.dispatcher.clone(),
                inner.collaborators.clone(),
                kind,
                page.clone(),
                waitlist_number,
            ));
            state.dispatch = Some(handle.abort_handle());

            handle
        };

        match handle.await {
            Ok(Some(outcome)) => outcome,
            Ok(None) => Outcome::Cancelled,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => Outcome::Cancelled,
        }
    }

    /// Runs one dispatch to completion and moves the form to its banner
    /// state. Returns `None` when the controller is gone by then.
    async fn settle(
        inner: Weak<Inner<K>>,
        dispatcher: Dispatcher,
        collaborators: Collaborators,
        kind: SubmissionKind,
        page: PageContext,
        waitlist_number: Option<u64>,
    ) -> Option<Outcome> {
        let at = collaborators.clock.now();
        let payload =
            notification_payload(&kind, &collaborators.site, &page, at, waitlist_number);

        let result = dispatcher.dispatch(&payload).await;
        let inner = inner.upgrade()?;

        match result {
            Ok(()) => {
                let position = inner.counter.as_ref().map(WaitlistCounter::increment);

                let mut state = inner.lock();
                state.dispatch = None;
                state.fields = K::Fields::default();
                inner.set_status(&mut state, SubmissionStatus::Success);
                inner.schedule_reset(&mut state, collaborators.timings.success_reset());

                tracing::info!(form = K::NAME, ?position, "Submission delivered");

                Some(Outcome::Delivered { position })
            }
            Err(err) => {
                tracing::warn!(
                    form = K::NAME,
                    template_id = dispatcher.template_id(),
                    error = ?err.cause(),
                    "Dispatch failed, falling back to manual hand-off"
                );

                let fallback = compose_fallback(&kind, &collaborators.site, &page, at);

                {
                    let mut state = inner.lock();
                    state.dispatch = None;
                    inner.set_status(&mut state, SubmissionStatus::Error);
                    inner.schedule_reset(&mut state, collaborators.timings.error_reset());
                }

                collaborators.handoff.open(&fallback);

                Some(Outcome::FellBack(fallback))
            }
        }
    }
}
