// ============================
// schoolhub-backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Application settings
///
/// The signing secret and the policy table derived from these settings
/// are frozen at process start; nothing here is mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level / env-filter directive
    pub log_level: String,
    /// Secret used to sign session tokens
    pub token_secret: String,
    /// Session token TTL in seconds
    pub token_ttl_secs: u64,
    /// Login attempt rate limiting
    pub auth_rate_limit: AuthRateLimitSettings,
}

/// Login attempt rate limiting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRateLimitSettings {
    /// Window length in seconds
    pub window_secs: u64,
    /// Maximum failed attempts per login identifier within the window
    pub max_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            log_level: "info".to_string(),
            // Must be overridden outside local development
            token_secret: "dev-only-secret-change-me".to_string(),
            token_ttl_secs: 60 * 60 * 24 * 30, // 30 days
            auth_rate_limit: AuthRateLimitSettings::default(),
        }
    }
}

impl Default for AuthRateLimitSettings {
    fn default() -> Self {
        Self {
            window_secs: 60,
            max_attempts: 10,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` and `SCHOOLHUB_`-prefixed
    /// environment variables, on top of the built-in defaults.
    pub fn load() -> Result<Self> {
        Self::figment(Toml::file("config.toml"))
    }

    /// Load settings from an explicit config file path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::figment(Toml::file(path.as_ref()))
    }

    fn figment(file: figment::providers::Data<Toml>) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(file)
            .merge(Env::prefixed("SCHOOLHUB_").split("__"))
            .extract()?;
        Ok(settings)
    }
}
