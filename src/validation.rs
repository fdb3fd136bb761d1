//! Field validation shared by the transaction model and the input shell.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ValidationError;

static CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Normalizes an 8-digit date (with or without dashes) into `YYYY-MM-DD`.
///
/// Accepts `20240315` and `2024-03-15` alike; rejects anything that is not a
/// real calendar date between 1900 and 2100, leap-year February included.
pub fn normalize_date(input: &str) -> Result<String, ValidationError> {
    let cleaned: String = input.chars().filter(|c| *c != '-').collect();
    if cleaned.len() != 8 || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::DateFormat);
    }

    // The unwraps cannot fail: all eight characters are ASCII digits.
    let year: i32 = cleaned[0..4].parse().unwrap();
    let month: u32 = cleaned[4..6].parse().unwrap();
    let day: u32 = cleaned[6..8].parse().unwrap();

    if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ValidationError::DateRange);
    }

    // Month-specific day caps, including leap-year February.
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::DateRange)?;

    Ok(date.format("%Y-%m-%d").to_string())
}

/// Zero is a valid amount; only negatives are rejected.
pub fn check_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}

/// `field` names the label column ("Source" or "Category") for the message.
pub fn check_label(label: &str, field: &'static str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::InvalidLabel(field));
    }
    Ok(())
}

/// Accepts only the canonical zero-padded form, and only real calendar dates.
pub fn check_date(date: &str) -> Result<(), ValidationError> {
    if !CANONICAL_DATE.is_match(date) {
        return Err(ValidationError::InvalidDate);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
    Ok(())
}
