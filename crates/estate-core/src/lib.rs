//! # estate-core
//!
//! Valuation logic behind the Smart Estate Forecaster demo page.
//!
//! There is no trained model here: an estimate is a fixed linear formula over
//! the property attributes plus up to ±10% of random noise, and the price
//! trend is that estimate compounded backward and forward a few years.
//!
//! ## Example: 1,500 sq ft suburban house built in 2000 (valued in 2023)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  base price               $250,000                          │
//! │  1,500 sq ft × $150       $225,000                          │
//! │  3 bedrooms × $15,000      $45,000                          │
//! │  2 bathrooms × $12,000     $24,000                          │
//! │  23 years × -$500         -$11,500                          │
//! │  suburban bonus            $25,000                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  before noise             $557,500   (±10%: $501,750..$613,250)
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate has no runtime dependency: the browser and the server each
//! supply their own delay and their own [`NoiseSource`].

pub mod error;
pub mod estimator;
pub mod forecast;
pub mod format;
pub mod model;
pub mod trend;

pub use error::{EstateError, Result};
#[cfg(feature = "rand")]
pub use estimator::{SeededNoise, ThreadNoise};
pub use estimator::{EstimatorWeights, FixedNoise, NoiseSource, PricingEstimator};
pub use forecast::{
    current_year, DisplayState, Forecaster, Prediction, PredictionBoard, Ticket,
    DEFAULT_PREDICTION_DELAY,
};
pub use format::{format_axis_thousands, format_quantity, format_usd};
pub use model::{AttributeBounds, FieldRange, Location, PropertyAttributes, YesNo};
pub use trend::{synthesize, value_range, TrendPoint, TrendSynthesizer};
