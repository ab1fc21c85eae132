use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info};

use crate::contact::compose::compose_email;
use crate::contact::models::{ContactMessage, ContactResponse, INVALID_BODY_MESSAGE};
use crate::contact::validation::validate_contact;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/contact
///
/// One valid submission produces exactly one outbound email. Nothing is
/// retried or deduplicated.
pub async fn handle_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(msg) = payload.map_err(|rejection| {
        debug!("Unreadable contact payload: {rejection}");
        AppError::Validation(INVALID_BODY_MESSAGE.to_string())
    })?;

    validate_contact(&msg)?;

    let email = compose_email(&msg, &state.contact);
    let sent = state.mailer.send(&email).await?;
    info!(email_id = %sent.id, "Contact message relayed");

    Ok(Json(ContactResponse::sent()))
}
