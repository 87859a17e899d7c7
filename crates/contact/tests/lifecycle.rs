use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bleiner_contact::{
    ContactController, ContactMessage, Field, MessageSender, SendError, SubmissionState,
    SubmitOutcome,
};
use tokio::sync::Semaphore;

const RESET_AFTER: Duration = Duration::from_secs(5);

/// Counts sends and completes immediately.
#[derive(Default)]
struct CountingSender {
    calls: AtomicUsize,
}

#[async_trait]
impl MessageSender for CountingSender {
    async fn send(&self, _message: &ContactMessage) -> Result<(), SendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Blocks each send until the test releases a permit.
struct GatedSender {
    gate: Semaphore,
}

impl GatedSender {
    fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
        }
    }
}

#[async_trait]
impl MessageSender for GatedSender {
    async fn send(&self, _message: &ContactMessage) -> Result<(), SendError> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| SendError::Unavailable(e.to_string()))?;
        permit.forget();
        Ok(())
    }
}

/// Fails the first send, succeeds afterwards.
#[derive(Default)]
struct FlakySender {
    failed_once: AtomicBool,
}

#[async_trait]
impl MessageSender for FlakySender {
    async fn send(&self, _message: &ContactMessage) -> Result<(), SendError> {
        if !self.failed_once.swap(true, Ordering::SeqCst) {
            return Err(SendError::Unavailable("smtp relay down".to_owned()));
        }
        Ok(())
    }
}

fn fill_valid(controller: &ContactController) {
    controller.update_field(Field::Name, "Max Mustermann");
    controller.update_field(Field::Email, "max@beispiel.at");
    controller.update_field(Field::Message, "Angebot bitte");
}

#[tokio::test]
async fn invalid_submit_stays_idle_and_sends_nothing() {
    let sender = Arc::new(CountingSender::default());
    let controller = ContactController::new(sender.clone(), RESET_AFTER);

    let outcome = controller.submit().await;

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.errors(), errors);
    assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn editing_a_field_clears_only_its_error() {
    let controller = ContactController::new(Arc::new(CountingSender::default()), RESET_AFTER);

    assert!(matches!(
        controller.submit().await,
        SubmitOutcome::Rejected(_)
    ));

    controller.update_field(Field::Name, "Max");

    let errors = controller.errors();
    assert_eq!(errors.code(Field::Name), None);
    assert_eq!(errors.code(Field::Email), Some("emailRequired"));
    assert_eq!(errors.code(Field::Message), Some("messageRequired"));
    assert_eq!(controller.form().name, "Max");
}

#[tokio::test]
async fn update_field_is_idempotent() {
    let controller = ContactController::new(Arc::new(CountingSender::default()), RESET_AFTER);

    controller.update_field(Field::Phone, "+43 664 1234567");
    let once = controller.form();
    controller.update_field(Field::Phone, "+43 664 1234567");

    assert_eq!(controller.form(), once);
}

#[tokio::test(start_paused = true)]
async fn successful_submit_cycles_back_to_idle() {
    let controller = ContactController::new(Arc::new(CountingSender::default()), RESET_AFTER);
    fill_valid(&controller);

    assert_eq!(controller.submit().await, SubmitOutcome::Sent);

    // Form is cleared the moment we enter Succeeded.
    assert_eq!(controller.state(), SubmissionState::Succeeded);
    let form = controller.form();
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.phone.is_empty());
    assert!(form.message.is_empty());
    assert!(controller.errors().is_empty());

    // The success message is not permanent.
    tokio::time::sleep(RESET_AFTER + Duration::from_millis(10)).await;
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn submit_is_a_noop_while_one_is_in_flight() {
    let sender = Arc::new(GatedSender::new());
    let controller = Arc::new(ContactController::new(sender.clone(), RESET_AFTER));
    fill_valid(&controller);

    let task = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };

    while controller.state() != SubmissionState::Submitting {
        tokio::task::yield_now().await;
    }

    assert_eq!(controller.submit().await, SubmitOutcome::InFlight);
    assert_eq!(controller.state(), SubmissionState::Submitting);

    sender.gate.add_permits(1);
    assert_eq!(task.await.expect("submit task"), SubmitOutcome::Sent);
    assert_eq!(controller.state(), SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn delivery_failure_keeps_form_for_retry() {
    let controller = ContactController::new(Arc::new(FlakySender::default()), RESET_AFTER);
    fill_valid(&controller);

    let outcome = controller.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(controller.state(), SubmissionState::Failed);
    // Nothing was cleared, the visitor can retry as-is.
    assert_eq!(controller.form().email, "max@beispiel.at");

    assert_eq!(controller.submit().await, SubmitOutcome::Sent);
    assert_eq!(controller.state(), SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn new_submission_supersedes_pending_reset() {
    let controller = ContactController::new(Arc::new(CountingSender::default()), RESET_AFTER);
    fill_valid(&controller);
    assert_eq!(controller.submit().await, SubmitOutcome::Sent);

    // Resubmit before the success display times out.
    tokio::time::sleep(RESET_AFTER / 2).await;
    fill_valid(&controller);
    assert_eq!(controller.submit().await, SubmitOutcome::Sent);

    // The first reset timer was cancelled, only the second one counts.
    tokio::time::sleep(RESET_AFTER - Duration::from_millis(10)).await;
    assert_eq!(controller.state(), SubmissionState::Succeeded);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn the_cycle_is_reentrant() {
    let sender = Arc::new(CountingSender::default());
    let controller = ContactController::new(sender.clone(), RESET_AFTER);

    for _ in 0..3 {
        fill_valid(&controller);
        assert_eq!(controller.submit().await, SubmitOutcome::Sent);
        tokio::time::sleep(RESET_AFTER + Duration::from_millis(10)).await;
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    assert_eq!(sender.calls.load(Ordering::SeqCst), 3);
}
