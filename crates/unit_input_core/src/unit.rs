//! Measurement units and their bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnitInputError;

/// Hard ceiling for any value shown in percent.
pub const PERCENT_CEILING: f64 = 100.0;

/// The two modes the editor can measure in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Percentage, bounded to `[0, 100]`.
    #[default]
    #[serde(rename = "%")]
    Percent,
    /// Pixels, bounded only below by the configured minimum.
    #[serde(rename = "px")]
    Pixel,
}

impl Unit {
    /// Both units in toggle order.
    pub const ALL: [Self; 2] = [Self::Percent, Self::Pixel];

    /// Returns the label shown on the unit toggle.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Pixel => "px",
        }
    }

    /// Returns true for [`Unit::Percent`].
    #[inline]
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent)
    }

    /// Forces `value` into this unit's range.
    ///
    /// The percent ceiling is checked before the floor, so a `min` above 100
    /// never lifts a percent value past the ceiling.
    #[must_use]
    pub fn clamp(self, value: f64, min: f64) -> f64 {
        if self.is_percent() && value > PERCENT_CEILING {
            PERCENT_CEILING
        } else if value < min {
            min
        } else {
            value
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "%" => Ok(Self::Percent),
            "px" => Ok(Self::Pixel),
            other => Err(UnitInputError::UnknownUnit(other.to_string())),
        }
    }
}
