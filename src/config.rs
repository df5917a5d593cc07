//! Configuration management for the contact assistant.
//!
//! Every setting is optional. Values come from the environment, with an
//! optional `.env` file loaded first.

use crate::error::{ConfigError, ConfigResult};
use crate::services::{GreetingPolicy, DEFAULT_WINDOW_DAYS};
use std::env;

/// Longest lookahead window accepted from the environment.
const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Length of the upcoming-birthday window in days (default: 7)
    pub lookahead_days: u32,

    /// How greeting dates are derived (default: weekend-to-monday)
    pub greeting_policy: GreetingPolicy,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_LOOKAHEAD_DAYS`: Window length, 1-365 (default: 7)
    /// - `GREETING_POLICY`: `weekend-to-monday`, `exact` or `shift:<days>`
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // .env is optional
        let _ = dotenvy::dotenv();

        let lookahead_days = Self::parse_env_u32("BIRTHDAY_LOOKAHEAD_DAYS", DEFAULT_WINDOW_DAYS)?;
        if lookahead_days == 0 || lookahead_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_LOOKAHEAD_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let greeting_policy = match env::var("GREETING_POLICY") {
            Ok(val) => val
                .parse::<GreetingPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "GREETING_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => GreetingPolicy::default(),
        };
        if let GreetingPolicy::FixedShift(days) = greeting_policy {
            if days > MAX_WINDOW_DAYS {
                return Err(ConfigError::InvalidValue {
                    var: "GREETING_POLICY".to_string(),
                    reason: format!("Shift must be at most {} days, got: {}", MAX_WINDOW_DAYS, days),
                });
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            lookahead_days,
            greeting_policy,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lookahead_days: DEFAULT_WINDOW_DAYS,
            greeting_policy: GreetingPolicy::default(),
            log_level: "warn".to_string(),
        }
    }
}
