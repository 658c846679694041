//! Trend Synthesizer
//!
//! Builds the decorative price history and projection shown next to an
//! estimate: values compound backward at a yearly decay rate and forward
//! at a yearly growth rate, centered on the current year.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One year on the trend chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub value: Decimal,
    /// Marks the point carrying the estimate itself
    pub is_current: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendSynthesizer {
    /// Multiplier applied once per year going backward
    pub yearly_decay: Decimal,
    /// Multiplier applied once per year going forward
    pub yearly_growth: Decimal,
    /// Years shown on each side of the current year
    pub years_each_side: u32,
}

impl Default for TrendSynthesizer {
    fn default() -> Self {
        Self {
            yearly_decay: dec!(0.95),
            yearly_growth: dec!(1.03),
            years_each_side: 5,
        }
    }
}

impl TrendSynthesizer {
    /// Number of points `synthesize` returns
    pub fn point_count(&self) -> usize {
        2 * self.years_each_side as usize + 1
    }

    /// Points ordered by ascending year; the middle one is `current_value`
    /// unrounded, all others are rounded to whole units. Projections that
    /// would exceed the `Decimal` range saturate at `Decimal::MAX`.
    pub fn synthesize(&self, current_value: Decimal, current_year: i32) -> Vec<TrendPoint> {
        let span = self.years_each_side;
        let mut points = Vec::with_capacity(self.point_count());

        for offset in (1..=span).rev() {
            points.push(TrendPoint {
                year: current_year - offset as i32,
                value: round_whole(scale(current_value, self.yearly_decay, offset)),
                is_current: false,
            });
        }

        points.push(TrendPoint {
            year: current_year,
            value: current_value,
            is_current: true,
        });

        for offset in 1..=span {
            points.push(TrendPoint {
                year: current_year + offset as i32,
                value: round_whole(scale(current_value, self.yearly_growth, offset)),
                is_current: false,
            });
        }

        points
    }
}

/// Synthesize with the default rates (5% yearly decay back, 3% growth forward)
pub fn synthesize(current_value: Decimal, current_year: i32) -> Vec<TrendPoint> {
    TrendSynthesizer::default().synthesize(current_value, current_year)
}

/// Smallest and largest value in the series
pub fn value_range(points: &[TrendPoint]) -> Option<(Decimal, Decimal)> {
    let min = points.iter().map(|p| p.value).min()?;
    let max = points.iter().map(|p| p.value).max()?;
    Some((min, max))
}

/// `value * rate^years`, multiplied out exactly; saturates on overflow
fn scale(value: Decimal, rate: Decimal, years: u32) -> Decimal {
    (0..years)
        .try_fold(Decimal::ONE, |acc, _| acc.checked_mul(rate))
        .and_then(|factor| value.checked_mul(factor))
        .unwrap_or_else(|| saturated(value, rate))
}

fn saturated(value: Decimal, rate: Decimal) -> Decimal {
    if value.is_sign_negative() == rate.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_center() {
        let points = synthesize(dec!(557500), 2023);
        assert_eq!(points.len(), 11);

        let current = &points[5];
        assert!(current.is_current);
        assert_eq!(current.value, dec!(557500));
        assert_eq!(current.year, 2023);
        assert_eq!(points.iter().filter(|p| p.is_current).count(), 1);

        let years: Vec<i32> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, (2018..=2028).collect::<Vec<_>>());
    }

    #[test]
    fn test_known_values() {
        let points = synthesize(dec!(100000), 2023);
        // 100000 * 0.95^5 = 77378.09375
        assert_eq!(points[0].value, dec!(77378));
        assert_eq!(points[4].value, dec!(95000));
        assert_eq!(points[6].value, dec!(103000));
        // 100000 * 1.03^5 = 115927.4074...
        assert_eq!(points[10].value, dec!(115927));
    }

    #[test]
    fn test_current_value_is_not_rounded() {
        let points = synthesize(dec!(123456.78), 2023);
        assert_eq!(points[5].value, dec!(123456.78));
        assert_eq!(points[4].value, dec!(117284));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(synthesize(dec!(557500), 2023), synthesize(dec!(557500), 2023));
    }

    #[test]
    fn test_monotonic_decay_and_growth() {
        let points = synthesize(dec!(432100), 2030);
        for pair in points.windows(2) {
            assert!(pair[0].value < pair[1].value, "{pair:?}");
        }
    }

    #[test]
    fn test_value_range() {
        let points = synthesize(dec!(100000), 2023);
        assert_eq!(value_range(&points), Some((dec!(77378), dec!(115927))));
        assert_eq!(value_range(&[]), None);
    }

    #[test]
    fn test_huge_values_saturate_instead_of_overflowing() {
        let points = synthesize(Decimal::MAX, 2023);
        assert_eq!(points.len(), 11);
        assert_eq!(points[5].value, Decimal::MAX);
        assert_eq!(points[10].value, Decimal::MAX);
        assert!(points[0].value < Decimal::MAX);

        let long = TrendSynthesizer { years_each_side: 2000, ..Default::default() };
        let points = long.synthesize(dec!(557500), 2023);
        assert_eq!(points.last().map(|p| p.value), Some(Decimal::MAX));
        assert_eq!(points[0].value, Decimal::ZERO);
    }

    #[test]
    fn test_custom_span() {
        let synth = TrendSynthesizer { years_each_side: 2, ..Default::default() };
        let points = synth.synthesize(dec!(200000), 2025);
        assert_eq!(points.len(), synth.point_count());
        assert_eq!(points[2].year, 2025);
        assert!(points[2].is_current);
    }
}
