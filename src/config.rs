//! Converter configuration.

use crate::error::WordsError;
use rust_decimal::RoundingStrategy;
use std::fmt;
use std::str::FromStr;

/// Rounding rule applied when an amount carries more than two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round half away from zero: `0.125` becomes `0.13`.
    #[default]
    HalfUp,
    /// Round half to even (banker's rounding): `0.125` becomes `0.12`.
    HalfEven,
}

impl RoundingMode {
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = WordsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half-up" | "half_up" => Ok(RoundingMode::HalfUp),
            "half-even" | "half_even" | "bankers" => Ok(RoundingMode::HalfEven),
            _ => Err(WordsError::InvalidArgument {
                flag: "--rounding".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfUp => write!(f, "half-up"),
            RoundingMode::HalfEven => write!(f, "half-even"),
        }
    }
}

/// Settings for a [`Converter`](crate::Converter).
///
/// The default rounds half away from zero and only limits amounts by
/// what the scale table can name (up to 99,99,99,999 rupees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConverterConfig {
    /// How to round to the nearest paisa.
    pub rounding: RoundingMode,

    /// Largest accepted rupee value. Amounts above it are `InvalidAmount`.
    pub max_rupees: Option<u128>,
}

impl ConverterConfig {
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_max_rupees(mut self, max_rupees: u128) -> Self {
        self.max_rupees = Some(max_rupees);
        self
    }
}
