//! Amount to words conversion.
//!
//! Runs an amount through normalization, Indian grouping, chunk rendering
//! and scale words, then composes the final sentence. A conversion holds
//! no state, so one `Converter` can be shared freely across threads.

use crate::amount::{Amount, NormalizedAmount};
use crate::config::ConverterConfig;
use crate::error::Result;
use crate::grouping::group_indian;
use crate::scale::apply_scale;
use crate::words::{render_below_hundred, render_chunk};
use log::debug;
use std::str::FromStr;

/// Converts amounts to words with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Converter { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts an amount into a sentence such as
    /// "One Thousand Two Hundred Thirty Four Rupees and Fifty Six Paise only".
    pub fn convert(&self, amount: &Amount) -> Result<String> {
        let normalized = amount.normalize(&self.config)?;
        self.convert_normalized(normalized)
    }

    /// Parses and converts a decimal string.
    pub fn convert_str(&self, input: &str) -> Result<String> {
        self.convert(&Amount::from_str(input)?)
    }

    /// Converts an already normalized amount.
    pub fn convert_normalized(&self, amount: NormalizedAmount) -> Result<String> {
        let mut phrases = Vec::new();
        for chunk in group_indian(amount.rupees)? {
            let scaled = apply_scale(&render_chunk(chunk.value)?, chunk.scale)?;
            if !scaled.is_empty() {
                phrases.push(scaled);
            }
        }

        let paise_words = render_below_hundred(amount.paise)?;
        let sentence = compose(&phrases, &paise_words);
        debug!("Converted {} to '{}'", amount, sentence);
        Ok(sentence)
    }
}

/// Converts an amount with the default configuration.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use rupee_words::{amount_to_words, Amount};
///
/// let amount = Amount::from_str("1234.56").unwrap();
/// assert_eq!(
///     amount_to_words(&amount).unwrap(),
///     "One Thousand Two Hundred Thirty Four Rupees and Fifty Six Paise only"
/// );
/// ```
pub fn amount_to_words(amount: &Amount) -> Result<String> {
    Converter::default().convert(amount)
}

/// Joins scaled chunk phrases and attaches the currency words.
///
/// `phrases` holds only the non-empty scaled phrases, most significant
/// first; an empty slice means zero rupees. An empty `paise` phrase means
/// zero paise.
pub fn compose(phrases: &[String], paise: &str) -> String {
    let rupees = if phrases.is_empty() {
        "Zero".to_string()
    } else {
        capitalize_first(&phrases.join(" "))
    };

    if paise.is_empty() {
        format!("{} Rupees only", rupees)
    } else {
        format!("{} Rupees and {} Paise only", rupees, paise)
    }
}

fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
