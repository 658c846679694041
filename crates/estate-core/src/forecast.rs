//! Prediction Orchestration
//!
//! Ties the estimator and trend synthesizer together and tracks what the
//! results panel shows while a (deliberately slow) prediction is running.
//!
//! ```text
//!  NoPrediction ──submit──▶ Pending ──settle(latest)──▶ Ready
//!                            ▲  │                        │
//!                            └──┴────────submit──────────┘
//! ```
//!
//! The delay itself is up to the host: the browser schedules a timer, the
//! server sleeps on Tokio. Every submission hands out a [`Ticket`], and only
//! the newest ticket may settle the board, so an older timer that fires late
//! can never overwrite a newer request.

use std::time::Duration;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::estimator::{NoiseSource, PricingEstimator};
use crate::model::PropertyAttributes;
use crate::trend::{TrendPoint, TrendSynthesizer};

/// How long the page pretends the model is thinking
pub const DEFAULT_PREDICTION_DELAY: Duration = Duration::from_millis(1500);

/// Calendar year on the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A finished valuation, ready for display
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The submitted property, echoed back
    pub attributes: PropertyAttributes,

    pub estimated_value: Decimal,

    /// Year the estimate was computed for
    pub current_year: i32,

    /// Past and projected values around the estimate
    pub trend: Vec<TrendPoint>,
}

impl Prediction {
    pub fn current_point(&self) -> Option<&TrendPoint> {
        self.trend.iter().find(|p| p.is_current)
    }
}

/// Runs the estimator and trend synthesizer for one fixed year
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecaster {
    pub estimator: PricingEstimator,
    pub synthesizer: TrendSynthesizer,
    pub current_year: i32,
}

impl Forecaster {
    pub fn new(current_year: i32) -> Self {
        Self {
            estimator: PricingEstimator::default(),
            synthesizer: TrendSynthesizer::default(),
            current_year,
        }
    }

    /// Forecaster pinned to this year on the local clock
    pub fn for_current_year() -> Self {
        Self::new(current_year())
    }

    pub fn with_estimator(mut self, estimator: PricingEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: TrendSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn predict(&self, attributes: PropertyAttributes, noise: &mut dyn NoiseSource) -> Prediction {
        let estimated_value = self.estimator.estimate(&attributes, self.current_year, noise);
        let trend = self.synthesizer.synthesize(estimated_value, self.current_year);

        tracing::debug!(
            square_footage = attributes.square_footage,
            location = %attributes.location,
            %estimated_value,
            "Computed prediction"
        );

        Prediction {
            attributes,
            estimated_value,
            current_year: self.current_year,
            trend,
        }
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::for_current_year()
    }
}

/// What the results panel is showing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayState {
    /// Nothing submitted yet
    #[default]
    NoPrediction,

    /// Waiting for the simulated model
    Pending { attributes: PropertyAttributes },

    Ready(Prediction),
}

impl DisplayState {
    pub fn is_pending(&self) -> bool {
        matches!(self, DisplayState::Pending { .. })
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            DisplayState::Ready(prediction) => Some(prediction),
            _ => None,
        }
    }

    /// Attributes of the submission being shown, if any
    pub fn attributes(&self) -> Option<&PropertyAttributes> {
        match self {
            DisplayState::NoPrediction => None,
            DisplayState::Pending { attributes } => Some(attributes),
            DisplayState::Ready(prediction) => Some(&prediction.attributes),
        }
    }
}

/// Handle for one submission; only the newest one can settle the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Display state plus the bookkeeping that makes the last submission win
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionBoard {
    state: DisplayState,
    latest: u64,
}

impl PredictionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Start a new submission, superseding any that is still pending
    pub fn submit(&mut self, attributes: PropertyAttributes) -> Ticket {
        self.latest += 1;
        self.state = DisplayState::Pending { attributes };
        Ticket { generation: self.latest }
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.generation == self.latest
    }

    /// Publish `prediction` if `ticket` is still the newest submission.
    ///
    /// Returns `false` and leaves the board untouched for a superseded
    /// ticket, or for a ticket that has already settled.
    pub fn settle(&mut self, ticket: Ticket, prediction: Prediction) -> bool {
        if !self.is_latest(ticket) || !self.state.is_pending() {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.latest,
                "Dropping superseded prediction"
            );
            return false;
        }

        self.state = DisplayState::Ready(prediction);
        true
    }
}
