use std::{env, fmt::Display, str::FromStr};

use leptos::logging::{log, warn};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub static_dir: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", 8080),
            database_url: try_load("DATABASE_URL", "stayease.db".to_string()),
            static_dir: try_load("STATIC_DIR", "public".to_string()),
        }
    }

    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("[CONFIG] Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            log!("[CONFIG] {key} not set, using default: {default}");
            default
        }
    }
}
