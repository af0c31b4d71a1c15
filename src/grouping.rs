//! Indian digit grouping.
//!
//! The rightmost group holds up to three digits and every group to its left
//! holds two: `1234567` groups as `12|34|567`.

use crate::error::{Result, WordsError};
use crate::scale::MAX_SCALE;
use log::debug;

/// One digit group of a rupee value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Group value, `0..=999` for the units group and `0..=99` above it.
    pub value: u16,

    /// Position from the right: 0 = units, 1 = thousand, 2 = lakh, 3 = crore.
    pub scale: usize,
}

impl Chunk {
    /// Place value of the group's lowest digit.
    pub fn place_value(&self) -> Option<u128> {
        match self.scale {
            0 => Some(1),
            s => 100u128
                .checked_pow(u32::try_from(s - 1).ok()?)
                .and_then(|p| p.checked_mul(1000)),
        }
    }
}

/// Splits a rupee value into Indian digit groups, most significant first.
///
/// Zero yields a single zero chunk. Values that need a group beyond Crore
/// are rejected with `UnsupportedMagnitude`.
///
/// # Examples
///
/// ```
/// use rupee_words::grouping::group_indian;
///
/// let values: Vec<u16> = group_indian(1234567).unwrap().iter().map(|c| c.value).collect();
/// assert_eq!(values, vec![12, 34, 567]);
/// ```
pub fn group_indian(rupees: u128) -> Result<Vec<Chunk>> {
    let mut values = vec![(rupees % 1000) as u16];
    let mut rest = rupees / 1000;
    while rest > 0 {
        values.push((rest % 100) as u16);
        rest /= 100;
    }

    if values.len() > MAX_SCALE + 1 {
        return Err(WordsError::UnsupportedMagnitude {
            rupees,
            chunks: values.len(),
        });
    }

    let chunks: Vec<Chunk> = values
        .into_iter()
        .enumerate()
        .rev()
        .map(|(scale, value)| Chunk { value, scale })
        .collect();

    debug!("Grouped {} into {:?}", rupees, chunks);
    Ok(chunks)
}

/// Reassembles a rupee value from its chunks.
///
/// Returns `None` when the result would overflow.
pub fn chunks_to_integer(chunks: &[Chunk]) -> Option<u128> {
    chunks.iter().try_fold(0u128, |acc, chunk| {
        let part = chunk.place_value()?.checked_mul(u128::from(chunk.value))?;
        acc.checked_add(part)
    })
}
