//! Contact form core: field state, synchronous validation and the
//! submission lifecycle (`Idle -> Submitting -> Succeeded -> Idle`, with
//! a `Failed` branch for delivery errors).
//!
//! The actual delivery backend is out of scope; [`MessageSender`] is the
//! seam, and [`SimulatedSender`] stands in for it with a fixed delay.

mod controller;
mod form;
mod sender;

pub use controller::{ContactController, SubmissionState, SubmitOutcome};
pub use form::{error_message_key, ContactForm, Field, FieldErrors};
pub use sender::{ContactMessage, MessageSender, SendError, SimulatedSender, DEFAULT_SEND_DELAY};
