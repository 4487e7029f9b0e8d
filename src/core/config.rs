// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::models::{DEFAULT_NUMBER_COUNT, DEFAULT_SPECIAL_COUNT};

// Configuration for the command-line front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: Option<i64>,
    pub default_number_count: i64,
    pub default_special_count: i64,

    // Randomness
    pub rng_seed: Option<u64>,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: None, // length must be given explicitly
            default_number_count: DEFAULT_NUMBER_COUNT,
            default_special_count: DEFAULT_SPECIAL_COUNT,

            // Randomness
            rng_seed: None,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse are skipped with a warning and the default
    /// is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = Some(length),
                Err(_) => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_NUMBER_COUNT") {
            match val.trim().parse() {
                Ok(count) => config.default_number_count = count,
                Err(_) => log::warn!("Ignoring invalid DEFAULT_NUMBER_COUNT '{}'", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_SPECIAL_COUNT") {
            match val.trim().parse() {
                Ok(count) => config.default_special_count = count,
                Err(_) => log::warn!("Ignoring invalid DEFAULT_SPECIAL_COUNT '{}'", val),
            }
        }

        // Randomness
        if let Some(val) = lookup("PASSWORD_RNG_SEED") {
            match val.trim().parse() {
                Ok(seed) => config.rng_seed = Some(seed),
                Err(_) => log::warn!("Ignoring invalid PASSWORD_RNG_SEED '{}'", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }
}
