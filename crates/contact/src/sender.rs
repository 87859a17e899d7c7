use std::time::Duration;

use async_trait::async_trait;

use crate::ContactForm;

/// Delay the stand-in sender takes before reporting success.
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(1500);

/// Payload handed to the delivery backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<&ContactForm> for ContactMessage {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            message: form.message.clone(),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SendError {
    #[error("message delivery unavailable: {0}")]
    Unavailable(String),
}

/// Delivery backend seam. The real system plugs an email or ticketing
/// integration in here; this repo only ships [`SimulatedSender`].
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError>;
}

/// Sender that sleeps for a fixed delay and reports success, mirroring
/// the behaviour of the site before a backend exists.
#[derive(Clone, Debug)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(DEFAULT_SEND_DELAY)
    }
}

#[async_trait]
impl MessageSender for SimulatedSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        tracing::info!(email = %message.email, "simulating contact message delivery");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
