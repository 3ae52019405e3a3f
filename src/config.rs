//! Process configuration read from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and then calls [`Config::from_env`] once.
//! Everything downstream receives plain values, never re-reading the
//! environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SITE_DIR: &str = "client/dist";
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{0} is set but DEMO_USER_PASSWORD is missing")]
    IncompleteDemoUser(&'static str),
}

/// Account seeded at start-up so the sign-in screen is usable on a fresh host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the compiled client bundle (`index.html` + assets).
    pub site_dir: PathBuf,
    pub cookie_secure: bool,
    pub session_ttl: time::Duration,
    pub demo_user: Option<DemoUser>,
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Build the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let site_dir = lookup("SITE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => false,
        };

        let ttl_hours = match lookup("SESSION_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or(ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: raw })?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        let demo_user = match (lookup("DEMO_USER_EMAIL"), lookup("DEMO_USER_PASSWORD")) {
            (Some(email), Some(password)) => Some(DemoUser {
                name: lookup("DEMO_USER_NAME").unwrap_or_else(|| "Demo Student".to_owned()),
                email,
                password,
            }),
            (Some(_), None) => return Err(ConfigError::IncompleteDemoUser("DEMO_USER_EMAIL")),
            (None, _) => None,
        };

        Ok(Self {
            port,
            site_dir,
            cookie_secure,
            session_ttl: time::Duration::hours(ttl_hours),
            demo_user,
        })
    }
}
