// src/config.rs

use graphql::utilities::DEFAULT_SESSION_TTL;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_json: bool,
    pub cors_origin: Option<String>,
    pub session_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("FORM_HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("FORM_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let log_json = lookup("FORM_LOG_JSON")
            .map(|v| matches!(v.as_str(), "1" | "true"))
            .unwrap_or(false);
        let cors_origin = lookup("FORM_CORS_ORIGIN").filter(|o| !o.is_empty());
        let session_ttl = lookup("FORM_SESSION_TTL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SESSION_TTL);

        ServerConfig {
            host,
            port,
            log_json,
            cors_origin,
            session_ttl,
        }
    }
}
