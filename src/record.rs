//! CSV record models for batch conversion.

use crate::amount::Amount;
use crate::error::{Result, WordsError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw input row as read from CSV.
///
/// Both columns are read as strings so a bad amount can be reported with
/// its row number instead of aborting the whole file.
#[derive(Debug, Deserialize)]
pub struct AmountRecord {
    /// Caller-supplied identifier, copied to the output as is
    #[serde(default)]
    pub id: Option<String>,

    /// Decimal amount in rupees
    pub amount: Option<String>,
}

impl AmountRecord {
    /// Parses the amount column.
    pub fn parse_amount(&self) -> Result<Amount> {
        let raw = self.amount.as_deref().unwrap_or("").trim();
        if raw.is_empty() {
            return Err(WordsError::invalid_amount("", "amount column is empty"));
        }
        Amount::from_str(raw)
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Output row: the identifier, the amount rounded to paise, and its words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordsRecord {
    pub id: String,
    pub amount: String,
    pub words: String,
}
