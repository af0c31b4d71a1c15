//! Scale words for Indian digit groups.

use crate::error::{Result, WordsError};

/// Scale word per group index, least significant first.
///
/// Index 0 is the three-digit units group and carries no word. Each index
/// after Thousand multiplies by 100 rather than 1000.
pub const SCALE_TABLE: [&str; 4] = ["", "Thousand", "Lakh", "Crore"];

/// Highest scale index that has a word.
pub const MAX_SCALE: usize = SCALE_TABLE.len() - 1;

/// Looks up the scale word for a group index.
pub fn scale_word(scale: usize) -> Result<&'static str> {
    SCALE_TABLE
        .get(scale)
        .copied()
        .ok_or(WordsError::UnsupportedScale { scale })
}

/// Appends the scale word for `scale` to a rendered chunk phrase.
///
/// Empty phrases (zero chunks) stay empty and the units group gets no
/// suffix. An index without a table entry is an error even for an empty
/// phrase.
pub fn apply_scale(phrase: &str, scale: usize) -> Result<String> {
    let word = scale_word(scale)?;
    if phrase.is_empty() || word.is_empty() {
        return Ok(phrase.to_string());
    }
    Ok(format!("{} {}", phrase, word))
}
