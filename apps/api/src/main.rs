mod config;
mod contact;
mod errors;
mod mailer;
mod routes;
mod site;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::compose::ContactSettings;
use crate::mailer::ResendMailer;
use crate::routes::build_router;
use crate::site::profile::Profile;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let profile = Profile::load(config.profile_path.as_deref())?;
    info!("Profile loaded for {}", profile.name);

    if config.resend_api_key.is_none() {
        warn!("RESEND_API_KEY is not set; contact submissions will fail");
    }
    let mailer = ResendMailer::new(
        config.resend_api_key.clone(),
        config.resend_api_url.clone(),
        Duration::from_secs(config.mail_timeout_secs),
    )?;
    info!("Mailer initialized ({})", config.resend_api_url);

    let contact = ContactSettings {
        from: config.contact_from.clone(),
        to: config
            .contact_to
            .clone()
            .unwrap_or_else(|| profile.email.clone()),
    };

    let state = AppState {
        mailer: Arc::new(mailer),
        contact,
        profile: Arc::new(profile),
        static_dir: config.static_dir.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
