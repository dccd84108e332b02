/// Application configuration module
use crate::domain::Mode;
use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub initial_mode: Mode,
    pub recompute_live_stats: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let backend_url = env::var("BACKEND_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        let request_timeout = Duration::from_secs(env_u64("REQUEST_TIMEOUT_SECONDS", 10).max(1));

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:3000")?;

        let initial_mode = if env_bool("START_OFFLINE", false) {
            Mode::Offline
        } else {
            Mode::Live
        };

        Ok(Self {
            backend_url,
            request_timeout,
            bind_addr,
            initial_mode,
            recompute_live_stats: env_bool("RECOMPUTE_LIVE_STATS", false),
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|s| parse_bool(&s))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
