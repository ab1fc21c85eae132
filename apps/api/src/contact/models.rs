use serde::{Deserialize, Serialize};

/// A visitor's contact form submission. Lives only for the duration of one request.
///
/// Absent fields deserialize as empty strings so they surface as validation
/// errors rather than extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body returned by `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: Some(SENT_MESSAGE.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message";
