pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers::handle_contact;
use crate::site::handlers::handle_index;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/contact", post(handle_contact))
        .nest_service("/files", files)
        .with_state(state)
}
