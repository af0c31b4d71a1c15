//! Edge case tests for amount-to-words conversion.
//!
//! Exercises the library through its public API: single conversions,
//! group boundaries, paise handling, and batch CSV processing.

use rupee_words::grouping::{chunks_to_integer, group_indian};
use rupee_words::words::render_chunk;
use rupee_words::{amount_to_words, Amount, BatchConverter, Converter, WordsError};
use std::io::Cursor;
use std::str::FromStr;

fn words(input: &str) -> String {
    amount_to_words(&Amount::from_str(input).unwrap()).unwrap()
}

fn error(input: &str) -> WordsError {
    Converter::default().convert_str(input).unwrap_err()
}

fn run_csv(csv: &str) -> String {
    let mut output = Vec::new();
    BatchConverter::default()
        .convert_csv(Cursor::new(csv), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

// ==================== REFERENCE AMOUNTS ====================

#[test]
fn test_reference_amounts() {
    assert_eq!(words("0"), "Zero Rupees only");
    assert_eq!(words("100"), "One Hundred Rupees only");
    assert_eq!(
        words("1234.56"),
        "One Thousand Two Hundred Thirty Four Rupees and Fifty Six Paise only"
    );
    assert_eq!(words("100000"), "One Lakh Rupees only");
    assert_eq!(words("10000000"), "One Crore Rupees only");
}

#[test]
fn test_negative_amount_is_invalid() {
    assert!(matches!(error("-5"), WordsError::InvalidAmount { .. }));
}

// ==================== GROUP BOUNDARIES ====================

#[test]
fn test_thousand_boundaries() {
    assert_eq!(words("999"), "Nine Hundred Ninety Nine Rupees only");
    assert_eq!(words("1000"), "One Thousand Rupees only");
    assert_eq!(words("1001"), "One Thousand One Rupees only");
    assert_eq!(words("99999"), "Ninety Nine Thousand Nine Hundred Ninety Nine Rupees only");
}

#[test]
fn test_lakh_boundaries() {
    assert_eq!(words("100001"), "One Lakh One Rupees only");
    assert_eq!(words("110000"), "One Lakh Ten Thousand Rupees only");
    assert_eq!(
        words("1234567"),
        "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees only"
    );
    assert_eq!(
        words("9999999"),
        "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Rupees only"
    );
}

#[test]
fn test_crore_with_zero_middle_groups() {
    assert_eq!(words("50000020"), "Five Crore Twenty Rupees only");
    assert_eq!(words("10100000"), "One Crore One Lakh Rupees only");
}

#[test]
fn test_beyond_crore_is_unsupported() {
    assert!(matches!(
        error("1000000000"),
        WordsError::UnsupportedMagnitude { .. }
    ));
    assert!(matches!(
        error("123456789012"),
        WordsError::UnsupportedMagnitude { .. }
    ));
}

// ==================== PAISE ====================

#[test]
fn test_paise_only() {
    assert_eq!(words("0.01"), "Zero Rupees and One Paise only");
    assert_eq!(words("0.99"), "Zero Rupees and Ninety Nine Paise only");
}

#[test]
fn test_paise_teens_and_tens() {
    assert_eq!(words("5.15"), "Five Rupees and Fifteen Paise only");
    assert_eq!(words("5.40"), "Five Rupees and Forty Paise only");
}

#[test]
fn test_sub_paisa_digits_round() {
    assert_eq!(words("10.004"), "Ten Rupees only");
    assert_eq!(words("10.005"), "Ten Rupees and One Paise only");
    assert_eq!(words("0.999"), "One Rupees only");
}

#[test]
fn test_trailing_zero_paise() {
    assert_eq!(words("250.00"), "Two Hundred Fifty Rupees only");
}

// ==================== INPUT FORMS ====================

#[test]
fn test_float_input() {
    let amount = Amount::from_f64(0.1 + 0.2).unwrap();
    assert_eq!(amount_to_words(&amount).unwrap(), "Zero Rupees and Thirty Paise only");
}

#[test]
fn test_non_finite_float_is_invalid() {
    assert!(matches!(
        Amount::from_f64(f64::NAN).unwrap_err(),
        WordsError::InvalidAmount { .. }
    ));
}

#[test]
fn test_integer_input() {
    let amount = Amount::from(2_500_000u64);
    assert_eq!(amount_to_words(&amount).unwrap(), "Twenty Five Lakh Rupees only");
}

#[test]
fn test_garbage_input_is_invalid() {
    assert!(matches!(error("12a"), WordsError::InvalidAmount { .. }));
    assert!(matches!(error(""), WordsError::InvalidAmount { .. }));
}

// ==================== PROPERTIES ====================

#[test]
fn test_grouping_round_trips() {
    for rupees in (0u128..=999_999_999).step_by(104_729) {
        let chunks = group_indian(rupees).unwrap();
        assert_eq!(chunks_to_integer(&chunks), Some(rupees));
    }
}

#[test]
fn test_every_chunk_value_renders() {
    assert_eq!(render_chunk(0).unwrap(), "");
    for value in 1..=999 {
        assert!(!render_chunk(value).unwrap().is_empty());
    }
}

#[test]
fn test_conversion_is_idempotent() {
    let converter = Converter::default();
    for input in ["0", "7.07", "100000", "98765432.10"] {
        assert_eq!(
            converter.convert_str(input).unwrap(),
            converter.convert_str(input).unwrap()
        );
    }
}

#[test]
fn test_no_hyphens_anywhere() {
    for input in ["21", "99.99", "45678", "87654321.21"] {
        assert!(!words(input).contains('-'));
    }
}

// ==================== CSV ====================

#[test]
fn test_csv_with_extra_columns() {
    let output = run_csv("id,amount,note\n1,42,misc\n");
    assert!(output.contains("1,42.00,Forty Two Rupees only"));
}

#[test]
fn test_csv_with_short_row() {
    let output = run_csv("id,amount\n1\n2,3\n");
    assert_eq!(output.lines().count(), 2);
    assert!(output.contains("2,3.00,Three Rupees only"));
}

#[test]
fn test_csv_ids_are_preserved() {
    let output = run_csv("id,amount\n  INV/2024/17 ,1\n");
    assert!(output.contains("INV/2024/17,1.00,One Rupees only"));
}
