//! Application configuration

pub mod replies;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{MatchMode, DEFAULT_MAX_CONVERSATIONS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub portfolio_file: Option<PathBuf>,
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
    pub match_mode: MatchMode,
    pub max_conversations: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source. Set but malformed values are
    /// errors; only unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port: parse_var(&lookup, "PORT", 3000)?,
            portfolio_file: lookup("PORTFOLIO_FILE").map(PathBuf::from),
            reply_delay_min_ms: parse_var(&lookup, "REPLY_DELAY_MIN_MS", 800)?,
            reply_delay_max_ms: parse_var(&lookup, "REPLY_DELAY_MAX_MS", 2000)?,
            match_mode: parse_var(&lookup, "MATCH_MODE", MatchMode::default())?,
            max_conversations: parse_var(
                &lookup,
                "MAX_CONVERSATIONS",
                DEFAULT_MAX_CONVERSATIONS,
            )?,
        };

        if config.reply_delay_min_ms > config.reply_delay_max_ms {
            anyhow::bail!(
                "REPLY_DELAY_MIN_MS ({}) is larger than REPLY_DELAY_MAX_MS ({})",
                config.reply_delay_min_ms,
                config.reply_delay_max_ms
            );
        }

        if config.max_conversations == 0 {
            anyhow::bail!("MAX_CONVERSATIONS must be at least 1");
        }

        Ok(config)
    }

    pub fn reply_delay_bounds(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.reply_delay_min_ms),
            Duration::from_millis(self.reply_delay_max_ms),
        )
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("invalid {}: {:?}", name, value)),
        None => Ok(default),
    }
}
