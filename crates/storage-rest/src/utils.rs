//! Parsing helpers for loosely typed data service columns.
//!
//! The data service returns monetary columns either as JSON numbers or as
//! numeric strings, and dates either as plain dates or as timestamps. These
//! helpers turn them into typed values and fail loudly on anything else.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use eparnova_core::errors::{Error, Result, ValidationError};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parses a monetary value. Accepts JSON numbers and numeric strings
/// (`,` as decimal separator, spaces as thousands separators). Negative
/// amounts are rejected.
pub fn parse_amount(value: Option<&Value>, field: &str) -> Result<Decimal> {
    let amount = match value {
        None | Some(Value::Null) => {
            return Err(Error::Validation(ValidationError::MissingField(
                field.to_string(),
            )))
        }
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))?,
        Some(Value::String(s)) => {
            let normalized: String = s
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            if normalized.is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
            Decimal::from_str(&normalized).map_err(|_| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "'{}' is not a valid amount for {}",
                    s, field
                )))
            })?
        }
        Some(other) => {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} must be a number, got {}",
                field, other
            ))))
        }
    };

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} must not be negative, got {}",
            field, amount
        ))));
    }
    Ok(amount)
}

/// Parses an acquisition date given as `YYYY-MM-DD`, a naive datetime, or an
/// RFC 3339 timestamp. Only the calendar date is kept.
pub fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate> {
    let raw = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Validation(ValidationError::MissingField(field.to_string())))?;

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|e| Error::Validation(ValidationError::DateTimeParse(e)))
}
