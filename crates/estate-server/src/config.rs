//! Server Configuration

use std::time::Duration;

use estate_core::{EstateError, Result, DEFAULT_PREDICTION_DELAY};

/// Runtime settings, read from the environment (and `.env`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the compiled web page
    pub static_dir: String,

    /// Artificial latency before `/api/predict` answers
    pub prediction_delay: Duration,

    /// Seed for reproducible estimates; random when unset
    pub noise_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
            prediction_delay: DEFAULT_PREDICTION_DELAY,
            noise_seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults, but a
    /// set value that fails to parse is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let static_dir = lookup("STATIC_DIR").unwrap_or(defaults.static_dir);

        let prediction_delay = match lookup("PREDICTION_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_number("PREDICTION_DELAY_MS", &raw)?),
            None => defaults.prediction_delay,
        };

        let noise_seed = lookup("NOISE_SEED")
            .map(|raw| parse_number("NOISE_SEED", &raw))
            .transpose()?;

        Ok(Self {
            bind_addr,
            static_dir,
            prediction_delay,
            noise_seed,
        })
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|e| EstateError::Config(format!("{key}={raw:?}: {e}")))
}
