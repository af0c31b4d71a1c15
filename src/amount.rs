//! Monetary amounts and their normalization into whole rupees and paise.
//!
//! Uses `rust_decimal` so rounding to the nearest paisa happens on exact
//! decimal digits rather than on binary floating-point values.

use crate::config::ConverterConfig;
use crate::error::{Result, WordsError};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by a rupee amount.
const PAISE_SCALE: u32 = 2;

/// An amount of rupees as supplied by the caller.
///
/// The value is kept as given; sign and range checks happen in
/// [`Amount::normalize`].
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use rupee_words::{Amount, ConverterConfig};
///
/// let amount = Amount::from_str("1234.56").unwrap();
/// let normalized = amount.normalize(&ConverterConfig::default()).unwrap();
/// assert_eq!(normalized.rupees, 1234);
/// assert_eq!(normalized.paise, 56);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero rupees.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Builds an amount from a float.
    ///
    /// The float goes through its shortest round-trip decimal form, so
    /// `1234.56_f64` becomes exactly `1234.56` and not `1234.5599999...`.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(WordsError::invalid_amount(value.to_string(), "amount is not finite"));
        }
        Self::from_str(&value.to_string())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to the nearest paisa and splits into rupees and paise.
    pub fn normalize(&self, config: &ConverterConfig) -> Result<NormalizedAmount> {
        if self.0 < Decimal::ZERO {
            return Err(WordsError::invalid_amount(self.0.to_string(), "amount is negative"));
        }

        let mut rounded = self
            .0
            .round_dp_with_strategy(PAISE_SCALE, config.rounding.strategy());
        rounded.rescale(PAISE_SCALE);
        // rescale falls back to a smaller scale when the mantissa would overflow
        if rounded.scale() != PAISE_SCALE {
            return Err(WordsError::invalid_amount(
                self.0.to_string(),
                "amount has too many digits to count in paise",
            ));
        }

        let total_paise = u128::try_from(rounded.mantissa()).map_err(|_| {
            WordsError::invalid_amount(self.0.to_string(), "amount is negative")
        })?;
        let normalized = NormalizedAmount::from_paise(total_paise);

        if let Some(max) = config.max_rupees {
            if normalized.rupees > max {
                return Err(WordsError::invalid_amount(
                    self.0.to_string(),
                    format!("amount exceeds the configured maximum of {} rupees", max),
                ));
            }
        }

        debug!("Normalized {} to {}", self.0, normalized);
        Ok(normalized)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl TryFrom<f64> for Amount {
    type Error = WordsError;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Amount::from_f64(value)
    }
}

impl FromStr for Amount {
    type Err = WordsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WordsError::invalid_amount(s, "amount is empty"));
        }
        Decimal::from_str(trimmed)
            .map(Amount)
            .map_err(|e| WordsError::invalid_amount(trimmed, e.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// An amount split into whole rupees and paise.
///
/// # Invariants
///
/// - `paise` is always in `0..=99`
/// - `rupees * 100 + paise` is the input rounded to the nearest paisa
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedAmount {
    pub rupees: u128,
    pub paise: u8,
}

impl NormalizedAmount {
    pub fn from_paise(total_paise: u128) -> Self {
        NormalizedAmount {
            rupees: total_paise / 100,
            paise: (total_paise % 100) as u8,
        }
    }

    pub fn total_paise(&self) -> u128 {
        self.rupees * 100 + u128::from(self.paise)
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.rupees, self.paise)
    }
}
