//! Configuration management for the phone book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here is required: every variable has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each input line (default: ">>> ")
    pub prompt: String,

    /// Whether to print the command list at startup (default: true)
    pub show_banner: bool,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_BOOK_PROMPT`: Input prompt (default: ">>> ")
    /// - `PHONE_BOOK_SHOW_BANNER`: Print help at startup (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let prompt = env::var("PHONE_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let show_banner = Self::parse_env_bool("PHONE_BOOK_SHOW_BANNER", defaults.show_banner)?;

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or(defaults.log_level);
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        Ok(Config {
            prompt,
            show_banner,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: ">>> ".to_string(),
            show_banner: true,
            log_level: "error".to_string(),
        }
    }
}
