// src/config.rs

use std::collections::BTreeSet;
use std::env;
use dotenvy::dotenv;

use crate::error::AppError;
use crate::utils::html::{CleanOptions, SanitizeMode};

#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub sanitize: CleanOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests do not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let tags: BTreeSet<String> = lookup("SANITIZE_ALLOWED_TAGS")
            .map(|raw| {
                raw.split(',')
                    .map(|tag| tag.trim().to_ascii_lowercase())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let mode = match lookup("SANITIZE_MODE") {
            Some(raw) => raw.parse::<SanitizeMode>()?,
            None => SanitizeMode::default(),
        };

        Ok(Self {
            rust_log,
            sanitize: CleanOptions { tags, mode },
        })
    }
}
