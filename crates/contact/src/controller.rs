use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{ContactForm, ContactMessage, Field, FieldErrors, MessageSender, SendError};

/// Where a submission currently stands. The cycle is reentrant: after
/// `Succeeded` the state falls back to `Idle` on its own, and `Failed`
/// waits for a manual retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What a `submit()` call amounted to.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the per-field errors are now stored.
    Rejected(FieldErrors),
    /// Another submission is still running; this call did nothing.
    InFlight,
    Sent,
    Failed(SendError),
}

struct Inner {
    form: ContactForm,
    errors: FieldErrors,
    state: SubmissionState,
    reset_task: Option<JoinHandle<()>>,
}

/// Owns one contact form session: field edits, validation state and the
/// submission lifecycle. Dropping the controller cancels any pending
/// reset timer, so nothing mutates state after teardown.
pub struct ContactController {
    sender: Arc<dyn MessageSender>,
    reset_after: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl ContactController {
    pub fn new(sender: Arc<dyn MessageSender>, reset_after: Duration) -> Self {
        Self {
            sender,
            reset_after,
            inner: Arc::new(Mutex::new(Inner {
                form: ContactForm::default(),
                errors: FieldErrors::default(),
                state: SubmissionState::Idle,
                reset_task: None,
            })),
        }
    }

    fn lock(inner: &Arc<Mutex<Inner>>) -> MutexGuard<'_, Inner> {
        inner.lock().expect("contact form state poisoned")
    }

    pub fn form(&self) -> ContactForm {
        Self::lock(&self.inner).form.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        Self::lock(&self.inner).errors.clone()
    }

    pub fn state(&self) -> SubmissionState {
        Self::lock(&self.inner).state
    }

    /// Overwrite one field, leaving the other three untouched. An error
    /// recorded for that field is dropped right away; this is an eager
    /// clear, not a re-validation.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let mut inner = Self::lock(&self.inner);
        inner.form.set(field, value);
        inner.errors.remove(field);
    }

    /// Validate and, if clean, hand the message to the sender. Rejected
    /// submissions store their errors and leave the state at `Idle`;
    /// while a send is running, further calls are no-ops.
    pub async fn submit(&self) -> SubmitOutcome {
        let message = {
            let mut inner = Self::lock(&self.inner);
            if inner.state == SubmissionState::Submitting {
                return SubmitOutcome::InFlight;
            }

            // A fresh submit supersedes a pending success reset.
            if let Some(task) = inner.reset_task.take() {
                task.abort();
            }

            let errors = inner.form.field_errors();
            if !errors.is_empty() {
                inner.errors = errors.clone();
                inner.state = SubmissionState::Idle;
                return SubmitOutcome::Rejected(errors);
            }

            inner.errors = FieldErrors::default();
            inner.state = SubmissionState::Submitting;
            ContactMessage::from(&inner.form)
        };

        match self.sender.send(&message).await {
            Ok(()) => {
                let mut inner = Self::lock(&self.inner);
                inner.state = SubmissionState::Succeeded;
                inner.form = ContactForm::default();

                let shared = Arc::clone(&self.inner);
                let delay = self.reset_after;
                inner.reset_task = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let mut inner = Self::lock(&shared);
                    if inner.state == SubmissionState::Succeeded {
                        inner.state = SubmissionState::Idle;
                    }
                }));

                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message delivery failed");
                let mut inner = Self::lock(&self.inner);
                inner.state = SubmissionState::Failed;
                SubmitOutcome::Failed(err)
            }
        }
    }
}

impl Drop for ContactController {
    fn drop(&mut self) {
        if let Some(task) = Self::lock(&self.inner).reset_task.take() {
            task.abort();
        }
    }
}
