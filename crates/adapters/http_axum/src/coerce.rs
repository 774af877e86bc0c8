//! Lenient number parsing for form and JSON payloads.
//!
//! Browsers submit every form field as text and the public site sends
//! numbers either as JSON numbers or as strings, so both are accepted.
//! Anything that does not read as a number is rejected with a
//! [`ValidationError`] instead of being stored.

use serde::{Deserialize, Deserializer};

use eatery_domain::error::ValidationError;
use eatery_domain::review::{MAX_RATING, MIN_RATING};

pub(crate) fn parse_price(value: &str) -> Result<f64, ValidationError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field: "price",
            value: value.to_string(),
        })
}

pub(crate) fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

pub(crate) fn guests(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|guests| *guests >= 1)
        .ok_or(ValidationError::GuestsOutOfRange)
}

pub(crate) fn rating(value: i64) -> Result<u8, ValidationError> {
    u8::try_from(value)
        .ok()
        .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
        .ok_or(ValidationError::RatingOutOfRange {
            min: MIN_RATING,
            max: MAX_RATING,
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// `deserialize_with` target for a price given as number or string.
pub(crate) fn price_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        #[allow(clippy::cast_precision_loss)]
        Loose::Integer(value) => Ok(value as f64),
        Loose::Float(value) => Ok(value),
        Loose::Text(text) => parse_price(&text).map_err(serde::de::Error::custom),
    }
}

/// `deserialize_with` target for a guest count given as number or string.
pub(crate) fn guests_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    integer_from_any("guests", deserializer)
}

/// `deserialize_with` target for a rating given as number or string.
pub(crate) fn rating_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    integer_from_any("rating", deserializer)
}

fn integer_from_any<'de, D>(field: &'static str, deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Integer(value) => Ok(value),
        #[allow(clippy::cast_possible_truncation)]
        Loose::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => Ok(value as i64),
        Loose::Float(value) => Err(serde::de::Error::custom(format!(
            "{field} must be an integer, got {value}"
        ))),
        Loose::Text(text) => parse_integer(field, &text).map_err(serde::de::Error::custom),
    }
}
