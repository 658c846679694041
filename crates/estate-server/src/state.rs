//! Application State

use std::sync::{Arc, Mutex};
use std::time::Duration;

use estate_core::{current_year, Forecaster, NoiseSource, SeededNoise, ThreadNoise};

use crate::config::ServerConfig;

/// Noise shared by all requests; never held across an `.await`
pub type SharedNoise = Arc<Mutex<Box<dyn NoiseSource + Send>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Template for per-request forecasters (weights and trend rates)
    pub forecaster: Forecaster,

    /// Pins the valuation year; follows the clock when `None`
    pub fixed_year: Option<i32>,

    pub noise: SharedNoise,

    /// Artificial latency before a prediction is returned
    pub prediction_delay: Duration,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let noise: Box<dyn NoiseSource + Send> = match config.noise_seed {
            Some(seed) => Box::new(SeededNoise::new(seed)),
            None => Box::new(ThreadNoise),
        };

        Self::new(noise, config.prediction_delay)
    }

    pub fn new(noise: Box<dyn NoiseSource + Send>, prediction_delay: Duration) -> Self {
        Self {
            forecaster: Forecaster::for_current_year(),
            fixed_year: None,
            noise: Arc::new(Mutex::new(noise)),
            prediction_delay,
        }
    }

    pub fn with_fixed_year(mut self, year: i32) -> Self {
        self.fixed_year = Some(year);
        self
    }

    pub fn current_year(&self) -> i32 {
        self.fixed_year.unwrap_or_else(current_year)
    }

    /// Forecaster for the year this request is valued in
    pub fn forecaster(&self) -> Forecaster {
        Forecaster {
            current_year: self.current_year(),
            ..self.forecaster
        }
    }
}
