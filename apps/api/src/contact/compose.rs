use crate::contact::models::ContactMessage;
use crate::mailer::OutboundEmail;

/// Fixed envelope for every relayed message.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub from: String,
    /// The site owner's inbox.
    pub to: String,
}

/// Builds the provider request for an already-validated submission.
///
/// Field values go into the plain-text body untouched; the visitor's address
/// becomes `reply_to` so the owner can answer directly.
pub fn compose_email(msg: &ContactMessage, settings: &ContactSettings) -> OutboundEmail {
    let name = msg.name.trim();
    let email = msg.email.trim();

    OutboundEmail {
        from: settings.from.clone(),
        to: settings.to.clone(),
        reply_to: Some(email.to_string()),
        subject: format!("New Contact Form Submission from {name}"),
        text: format!("Name: {name}\nEmail: {email}\nMessage:\n{}\n", msg.message),
    }
}
