//! Domain Models
//!
//! The property description a visitor submits, and the bounds each field
//! must respect. Uses `rust_decimal` for fractional quantities so that
//! half-bathrooms and lot sizes compare exactly.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EstateError, Result};

pub const SQUARE_FOOTAGE_MIN: u32 = 500;
pub const SQUARE_FOOTAGE_MAX: u32 = 5000;
pub const SQUARE_FOOTAGE_STEP: u32 = 50;

pub const BEDROOMS_MIN: u8 = 1;
pub const BEDROOMS_MAX: u8 = 8;

pub const BATHROOMS_MIN: Decimal = dec!(1);
pub const BATHROOMS_MAX: Decimal = dec!(5);
pub const BATHROOMS_STEP: Decimal = dec!(0.5);

/// Oldest construction year the form offers; the newest is the current year
pub const YEAR_BUILT_MIN: i32 = 1900;

pub const LOT_SIZE_MIN: Decimal = dec!(0.1);
pub const LOT_SIZE_MAX: Decimal = dec!(2.0);
pub const LOT_SIZE_STEP: Decimal = dec!(0.05);

/// Kind of neighbourhood the property sits in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Urban,
    #[default]
    Suburban,
    Rural,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Urban, Location::Suburban, Location::Rural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Urban => "Urban",
            Location::Suburban => "Suburban",
            Location::Rural => "Rural",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = EstateError;

    fn from_str(s: &str) -> Result<Self> {
        Location::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EstateError::InvalidChoice {
                field: "location",
                value: s.to_string(),
            })
    }
}

/// Yes/No answer as the form presents it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = EstateError;

    fn from_str(s: &str) -> Result<Self> {
        YesNo::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EstateError::InvalidChoice {
                field: "yes/no",
                value: s.to_string(),
            })
    }
}

/// Property description submitted for a valuation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyAttributes {
    /// Living area in square feet
    pub square_footage: u32,

    pub bedrooms: u8,

    /// Bathrooms in half-steps (1.5 = one full bath plus a half bath)
    pub bathrooms: Decimal,

    pub year_built: i32,

    pub location: Location,

    /// Lot size in acres
    pub lot_size: Decimal,

    pub has_garage: YesNo,

    /// Collected by the form but not priced
    pub has_pool: YesNo,
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self {
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
}

impl PropertyAttributes {
    /// Age of the building in `current_year`; negative for future construction years
    pub fn age(&self, current_year: i32) -> i32 {
        current_year - self.year_built
    }

    /// Check every field against the bounds the form enforces.
    ///
    /// The browser widgets cannot produce out-of-range values, but API
    /// clients can, so the server calls this before estimating.
    pub fn validate(&self, current_year: i32) -> Result<()> {
        if !(SQUARE_FOOTAGE_MIN..=SQUARE_FOOTAGE_MAX).contains(&self.square_footage) {
            return Err(EstateError::out_of_range(
                "square_footage",
                self.square_footage,
                SQUARE_FOOTAGE_MIN,
                SQUARE_FOOTAGE_MAX,
            ));
        }

        if !(BEDROOMS_MIN..=BEDROOMS_MAX).contains(&self.bedrooms) {
            return Err(EstateError::out_of_range(
                "bedrooms",
                self.bedrooms,
                BEDROOMS_MIN,
                BEDROOMS_MAX,
            ));
        }

        if self.bathrooms < BATHROOMS_MIN || self.bathrooms > BATHROOMS_MAX {
            return Err(EstateError::out_of_range(
                "bathrooms",
                self.bathrooms,
                BATHROOMS_MIN,
                BATHROOMS_MAX,
            ));
        }
        if !(self.bathrooms % BATHROOMS_STEP).is_zero() {
            return Err(EstateError::InvalidStep {
                field: "bathrooms",
                value: self.bathrooms.to_string(),
                step: BATHROOMS_STEP.to_string(),
            });
        }

        if self.year_built < YEAR_BUILT_MIN || self.year_built > current_year {
            return Err(EstateError::out_of_range(
                "year_built",
                self.year_built,
                YEAR_BUILT_MIN,
                current_year,
            ));
        }

        if self.lot_size < LOT_SIZE_MIN || self.lot_size > LOT_SIZE_MAX {
            return Err(EstateError::out_of_range(
                "lot_size",
                self.lot_size,
                LOT_SIZE_MIN,
                LOT_SIZE_MAX,
            ));
        }

        Ok(())
    }
}

/// Inclusive numeric range with the step the form widget uses
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRange<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

/// Widget bounds for every field, resolved for a given year
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeBounds {
    pub square_footage: FieldRange<u32>,
    pub bedrooms: FieldRange<u8>,
    pub bathrooms: FieldRange<Decimal>,
    pub year_built: FieldRange<i32>,
    pub lot_size: FieldRange<Decimal>,
    pub locations: Vec<Location>,
}

impl AttributeBounds {
    pub fn for_year(current_year: i32) -> Self {
        Self {
            square_footage: FieldRange {
                min: SQUARE_FOOTAGE_MIN,
                max: SQUARE_FOOTAGE_MAX,
                step: SQUARE_FOOTAGE_STEP,
            },
            bedrooms: FieldRange { min: BEDROOMS_MIN, max: BEDROOMS_MAX, step: 1 },
            bathrooms: FieldRange {
                min: BATHROOMS_MIN,
                max: BATHROOMS_MAX,
                step: BATHROOMS_STEP,
            },
            year_built: FieldRange { min: YEAR_BUILT_MIN, max: current_year, step: 1 },
            lot_size: FieldRange {
                min: LOT_SIZE_MIN,
                max: LOT_SIZE_MAX,
                step: LOT_SIZE_STEP,
            },
            locations: Location::ALL.to_vec(),
        }
    }
}

/// Bedroom counts offered by the form, ascending
pub fn bedroom_choices() -> impl Iterator<Item = u8> {
    BEDROOMS_MIN..=BEDROOMS_MAX
}

/// Bathroom counts offered by the form: 1, 1.5, 2, ... 5
pub fn bathroom_choices() -> Vec<Decimal> {
    let mut choices = Vec::new();
    let mut value = BATHROOMS_MIN;
    while value <= BATHROOMS_MAX {
        choices.push(value);
        value += BATHROOMS_STEP;
    }
    choices
}
