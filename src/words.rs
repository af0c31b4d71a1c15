//! English words for a single digit group (0..=999).
//!
//! Compound tens and units are joined with a single space, never a hyphen:
//! 21 is "Twenty One". Every word starts with an uppercase letter.

use crate::error::{Result, WordsError};

const UNITS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Largest value a single chunk can hold.
pub const MAX_CHUNK: u16 = 999;

/// Renders a chunk value without any scale word.
///
/// `0` renders as the empty phrase; the caller decides when a whole
/// number is "Zero".
pub fn render_chunk(value: u16) -> Result<String> {
    if value > MAX_CHUNK {
        return Err(WordsError::UnsupportedMagnitude {
            rupees: u128::from(value),
            chunks: 1,
        });
    }

    let hundreds = usize::from(value / 100);
    let rest = value % 100;

    let mut words: Vec<&'static str> = Vec::with_capacity(4);
    if hundreds > 0 {
        words.push(UNITS[hundreds]);
        words.push("Hundred");
    }
    push_below_hundred(&mut words, rest);

    Ok(words.join(" "))
}

/// Renders a value in `0..=99`, as used for paise.
pub fn render_below_hundred(value: u8) -> Result<String> {
    if value > 99 {
        return Err(WordsError::UnsupportedMagnitude {
            rupees: u128::from(value),
            chunks: 1,
        });
    }
    let mut words = Vec::with_capacity(2);
    push_below_hundred(&mut words, u16::from(value));
    Ok(words.join(" "))
}

fn push_below_hundred(words: &mut Vec<&'static str>, value: u16) {
    let value = usize::from(value);
    match value {
        0 => {}
        1..=9 => words.push(UNITS[value]),
        10..=19 => words.push(TEENS[value - 10]),
        _ => {
            words.push(TENS[value / 10]);
            if value % 10 != 0 {
                words.push(UNITS[value % 10]);
            }
        }
    }
}
