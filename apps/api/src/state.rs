use std::path::PathBuf;
use std::sync::Arc;

use crate::contact::compose::ContactSettings;
use crate::mailer::Mailer;
use crate::site::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Email backend. `ResendMailer` in production, swapped for mocks in tests.
    pub mailer: Arc<dyn Mailer>,
    pub contact: ContactSettings,
    pub profile: Arc<Profile>,
    /// Directory served under `/files` (resume, avatar).
    pub static_dir: PathBuf,
}
