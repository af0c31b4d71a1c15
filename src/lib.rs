//! # Rupee Words
//!
//! Converts rupee amounts into English words using the Indian numbering
//! system (thousand, lakh, crore), as printed on invoices:
//! `1234.56` becomes "One Thousand Two Hundred Thirty Four Rupees and
//! Fifty Six Paise only".
//!
//! ## Pipeline
//!
//! - **Normalization**: the amount is rounded to whole paise with `rust_decimal`
//! - **Grouping**: rupees split as `..|2|2|3` digits, most significant first
//! - **Rendering**: each group (0..=999) becomes words, then gets its scale word
//! - **Composition**: groups are joined and the currency words attached
//!
//! Conversions are pure functions of their input. Amounts that are negative
//! or need a scale word beyond Crore are rejected, never approximated.
//!
//! ## Example
//!
//! ```
//! use rupee_words::Converter;
//!
//! let converter = Converter::default();
//! assert_eq!(converter.convert_str("100000").unwrap(), "One Lakh Rupees only");
//! ```

pub mod amount;
pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod grouping;
pub mod record;
pub mod scale;
pub mod words;

pub use amount::{Amount, NormalizedAmount};
pub use batch::{BatchConverter, BatchSummary};
pub use config::{ConverterConfig, RoundingMode};
pub use converter::{amount_to_words, Converter};
pub use error::{Result, WordsError};
pub use grouping::Chunk;
pub use record::{AmountRecord, WordsRecord};
