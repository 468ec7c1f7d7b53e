//! Contact form submission.
//!
//! TRADE-OFFS
//! ==========
//! There is no transport yet: `submit` acknowledges every message without
//! sending it anywhere. The request/response types are the shape a real
//! endpoint would take, so wiring one in only touches this module.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Message entered in the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgment shown to the visitor after submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("contact delivery failed: {0}")]
    Transport(String),
}

/// Submit a contact message. Always acknowledges.
#[allow(clippy::unnecessary_wraps)]
pub fn submit(message: &ContactMessage) -> Result<Ack, ContactError> {
    log::debug!("contact: message acknowledged (not delivered)");
    let greeting = match message.name.trim() {
        "" => "Thanks".to_owned(),
        name => format!("Thanks, {name}"),
    };
    Ok(Ack { message: format!("{greeting}! I'll get back to you soon.") })
}
