use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";

/// Application configuration loaded from environment variables.
///
/// `RESEND_API_KEY` is deliberately optional: the server starts without it and
/// every contact submission then fails at send time.
#[derive(Clone)]
pub struct Config {
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub contact_from: String,
    /// Falls back to the profile's email when unset.
    pub contact_to: Option<String>,
    pub profile_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub mail_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resend_api_key: optional_env("RESEND_API_KEY"),
            resend_api_url: optional_env("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            contact_from: optional_env("CONTACT_FROM")
                .unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
            contact_to: optional_env("CONTACT_TO"),
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            static_dir: optional_env("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            mail_timeout_secs: parse_or("MAIL_TIMEOUT_SECS", optional_env("MAIL_TIMEOUT_SECS"), 30)?,
            port: parse_or("PORT", optional_env("PORT"), 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("resend_api_url", &self.resend_api_url)
            .field("contact_from", &self.contact_from)
            .field("contact_to", &self.contact_to)
            .field("profile_path", &self.profile_path)
            .field("static_dir", &self.static_dir)
            .field("mail_timeout_secs", &self.mail_timeout_secs)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            resend_api_key: Some("re_secret_value".to_string()),
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            contact_from: DEFAULT_CONTACT_FROM.to_string(),
            contact_to: None,
            profile_path: None,
            static_dir: PathBuf::from("static"),
            mail_timeout_secs: 30,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        let port: u16 = parse_or("PORT", None, 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_or_parses_value() {
        let port: u16 = parse_or("PORT", Some("3000".to_string()), 8080).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        let err = parse_or::<u16>("PORT", Some("eighty".to_string()), 8080).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("re_secret_value"));
        assert!(rendered.contains("<redacted>"));
    }
}
