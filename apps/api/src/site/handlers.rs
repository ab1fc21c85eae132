use axum::{extract::State, http::HeaderMap, response::IntoResponse};
use chrono::{Datelike, Utc};

use crate::site::nav::Theme;
use crate::site::templates::PageTemplate;
use crate::state::AppState;

const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

/// GET /
/// Renders the portfolio page, pre-applying the dark theme when the browser
/// sends the color-scheme client hint.
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let hint = headers
        .get(COLOR_SCHEME_HINT)
        .and_then(|v| v.to_str().ok());
    let theme = Theme::from_color_scheme_hint(hint);

    (
        [
            ("accept-ch", "Sec-CH-Prefers-Color-Scheme"),
            ("vary", "Sec-CH-Prefers-Color-Scheme"),
        ],
        PageTemplate::new(state.profile.clone(), theme, Utc::now().year()),
    )
}
