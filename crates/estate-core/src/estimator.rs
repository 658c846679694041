//! Pricing Estimator
//!
//! Turns a property description into a plausible-looking price: a fixed
//! linear formula over the attributes, perturbed by up to ±10% of noise
//! drawn from an injected [`NoiseSource`].

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{Location, PropertyAttributes};

/// Source of uniform samples in `[0, 1)` for the estimator's noise term
///
/// Implement this to control the perturbation: tests pin it with
/// [`FixedNoise`], the server uses [`ThreadNoise`] or [`SeededNoise`], and
/// the browser hands in `Math.random` as a closure.
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

impl<F> NoiseSource for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Always returns the same sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedNoise(pub f64);

impl FixedNoise {
    /// Sample that cancels the noise term entirely
    pub const MIDPOINT: FixedNoise = FixedNoise(0.5);
}

impl NoiseSource for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Thread-local RNG from the `rand` crate
#[cfg(feature = "rand")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadNoise;

#[cfg(feature = "rand")]
impl NoiseSource for ThreadNoise {
    fn sample(&mut self) -> f64 {
        use rand::Rng;
        rand::rng().random::<f64>()
    }
}

/// Deterministic RNG for reproducible runs
#[cfg(feature = "rand")]
#[derive(Clone, Debug)]
pub struct SeededNoise(rand::rngs::StdRng);

#[cfg(feature = "rand")]
impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "rand")]
impl NoiseSource for SeededNoise {
    fn sample(&mut self) -> f64 {
        use rand::Rng;
        self.0.random::<f64>()
    }
}

/// Coefficients of the valuation formula
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorWeights {
    /// Starting price before any attribute is considered
    pub base_price: Decimal,
    pub per_square_foot: Decimal,
    pub per_bedroom: Decimal,
    pub per_bathroom: Decimal,
    /// Added once per year of building age (negative: older is cheaper)
    pub per_year_of_age: Decimal,
    pub urban_bonus: Decimal,
    pub suburban_bonus: Decimal,
    pub rural_bonus: Decimal,
    /// Maximum relative perturbation in either direction
    pub noise_ratio: Decimal,
    /// No estimate ever goes below this
    pub floor: Decimal,
}

impl Default for EstimatorWeights {
    fn default() -> Self {
        Self {
            base_price: dec!(250000),
            per_square_foot: dec!(150),
            per_bedroom: dec!(15000),
            per_bathroom: dec!(12000),
            per_year_of_age: dec!(-500),
            urban_bonus: dec!(50000),
            suburban_bonus: dec!(25000),
            rural_bonus: Decimal::ZERO,
            noise_ratio: dec!(0.1),
            floor: dec!(100000),
        }
    }
}

impl EstimatorWeights {
    pub fn location_bonus(&self, location: Location) -> Decimal {
        match location {
            Location::Urban => self.urban_bonus,
            Location::Suburban => self.suburban_bonus,
            Location::Rural => self.rural_bonus,
        }
    }
}

/// Simulated valuation model
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingEstimator {
    pub weights: EstimatorWeights,
}

impl PricingEstimator {
    pub fn new(weights: EstimatorWeights) -> Self {
        Self { weights }
    }

    /// Deterministic part of the estimate, before noise, rounding and floor
    pub fn base_value(&self, attrs: &PropertyAttributes, current_year: i32) -> Decimal {
        let w = &self.weights;

        w.base_price
            + Decimal::from(attrs.square_footage) * w.per_square_foot
            + Decimal::from(attrs.bedrooms) * w.per_bedroom
            + attrs.bathrooms * w.per_bathroom
            + Decimal::from(attrs.age(current_year)) * w.per_year_of_age
            + w.location_bonus(attrs.location)
    }

    /// Estimated price in whole currency units, never below the floor.
    ///
    /// Draws exactly one sample from `noise`. Identical inputs give
    /// different outputs unless the source is pinned.
    pub fn estimate(
        &self,
        attrs: &PropertyAttributes,
        current_year: i32,
        noise: &mut dyn NoiseSource,
    ) -> Decimal {
        let base = self.base_value(attrs, current_year);
        let unit = unit_sample(noise.sample());

        // Maps [0, 1) onto [-ratio, +ratio) of the base
        let perturbation = base * self.weights.noise_ratio * (dec!(2) * unit - Decimal::ONE);

        let estimate = (base + perturbation)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        estimate.max(self.weights.floor)
    }
}

/// Largest `f64` below 1
const UNIT_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Clamp a raw sample into `[0, 1)`; non-finite samples mean "no noise"
fn unit_sample(raw: f64) -> Decimal {
    if !raw.is_finite() {
        return dec!(0.5);
    }
    Decimal::from_f64_retain(raw.clamp(0.0, UNIT_MAX)).unwrap_or(dec!(0.5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::YesNo;

    fn example_attrs() -> PropertyAttributes {
        PropertyAttributes {
            square_footage: 1500,
            bedrooms: 3,
            bathrooms: dec!(2),
            year_built: 2000,
            location: Location::Suburban,
            lot_size: dec!(0.25),
            has_garage: YesNo::Yes,
            has_pool: YesNo::No,
        }
    }

    #[test]
    fn test_example_base_value() {
        let estimator = PricingEstimator::default();
        assert_eq!(estimator.base_value(&example_attrs(), 2023), dec!(557500));
    }

    #[test]
    fn test_midpoint_noise_is_exact() {
        let estimator = PricingEstimator::default();
        let mut noise = FixedNoise::MIDPOINT;

        let first = estimator.estimate(&example_attrs(), 2023, &mut noise);
        let second = estimator.estimate(&example_attrs(), 2023, &mut noise);
        assert_eq!(first, dec!(557500));
        assert_eq!(first, second);
    }

    #[test]
    fn test_noise_extremes_stay_within_ten_percent() {
        let estimator = PricingEstimator::default();
        let attrs = example_attrs();

        let low = estimator.estimate(&attrs, 2023, &mut FixedNoise(0.0));
        assert_eq!(low, dec!(501750));

        let high = estimator.estimate(&attrs, 2023, &mut FixedNoise(0.999_999));
        assert!(high > dec!(613000) && high <= dec!(613250), "{high}");

        // Out-of-contract samples are clamped rather than widening the band
        let clamped = estimator.estimate(&attrs, 2023, &mut FixedNoise(7.5));
        assert_eq!(clamped, dec!(613250));
        let nan = estimator.estimate(&attrs, 2023, &mut FixedNoise(f64::NAN));
        assert_eq!(nan, dec!(557500));
    }

    #[test]
    fn test_unit_sample_excludes_one() {
        assert!(unit_sample(1.0) < Decimal::ONE);
        assert!(unit_sample(7.5) < Decimal::ONE);
        assert!(unit_sample(UNIT_MAX) > dec!(0.999999));
        assert_eq!(unit_sample(-3.0), Decimal::ZERO);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random_estimates_stay_in_band() {
        let estimator = PricingEstimator::default();
        let attrs = example_attrs();
        let mut noise = ThreadNoise;

        for _ in 0..500 {
            let value = estimator.estimate(&attrs, 2023, &mut noise);
            assert!(value >= dec!(501750) && value <= dec!(613250), "{value}");
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_seeded_noise_is_reproducible() {
        let estimator = PricingEstimator::default();
        let attrs = example_attrs();

        let mut a = SeededNoise::new(42);
        let mut b = SeededNoise::new(42);
        for _ in 0..10 {
            assert_eq!(
                estimator.estimate(&attrs, 2023, &mut a),
                estimator.estimate(&attrs, 2023, &mut b)
            );
        }
    }

    #[test]
    fn test_floor_applies_to_cheapest_property() {
        // Smallest, oldest, rural property with a large downward swing
        let attrs = PropertyAttributes {
            square_footage: 500,
            bedrooms: 1,
            bathrooms: dec!(1),
            year_built: 1900,
            location: Location::Rural,
            ..example_attrs()
        };
        let mut weights = EstimatorWeights::default();
        weights.per_year_of_age = dec!(-3000);
        let estimator = PricingEstimator::new(weights);

        assert!(estimator.base_value(&attrs, 2023) < dec!(100000));
        assert_eq!(estimator.estimate(&attrs, 2023, &mut FixedNoise(0.0)), dec!(100000));
    }

    #[test]
    fn test_default_weights_never_fall_below_floor() {
        let estimator = PricingEstimator::default();
        let cheapest = PropertyAttributes {
            square_footage: 500,
            bedrooms: 1,
            bathrooms: dec!(1),
            year_built: 1900,
            location: Location::Rural,
            ..example_attrs()
        };
        let value = estimator.estimate(&cheapest, 2100, &mut FixedNoise(0.0));
        assert!(value >= dec!(100000));
    }

    #[test]
    fn test_location_bonus_ordering() {
        let estimator = PricingEstimator::default();
        let at = |location| {
            let attrs = PropertyAttributes { location, ..example_attrs() };
            estimator.base_value(&attrs, 2023)
        };

        let urban = at(Location::Urban);
        let suburban = at(Location::Suburban);
        let rural = at(Location::Rural);
        assert_eq!(urban - suburban, dec!(25000));
        assert_eq!(suburban - rural, dec!(25000));
        assert_eq!(urban - rural, dec!(50000));
    }

    #[test]
    fn test_pool_does_not_change_price() {
        let estimator = PricingEstimator::default();
        let with_pool = PropertyAttributes { has_pool: YesNo::Yes, ..example_attrs() };
        assert_eq!(
            estimator.base_value(&with_pool, 2023),
            estimator.base_value(&example_attrs(), 2023)
        );
    }

    #[test]
    fn test_closure_noise_source() {
        let estimator = PricingEstimator::default();
        let mut calls = 0;
        let mut noise = || {
            calls += 1;
            0.5
        };
        let value = estimator.estimate(&example_attrs(), 2023, &mut noise);
        assert_eq!(value, dec!(557500));
        assert_eq!(calls, 1);
    }
}
