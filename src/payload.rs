//! Request-body decoding shared by the JSON endpoints.

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::ApiError;

/// The only media type accepted by the JSON endpoints
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Reject anything but an exact `application/json` Content-Type
///
/// No parameters (`; charset=utf-8`) and no case folding are tolerated.
pub fn check_json_content_type(header: Option<&str>) -> Result<(), ApiError> {
    if header == Some(JSON_MEDIA_TYPE) {
        Ok(())
    } else {
        tracing::debug!("Rejected content type: {:?}", header);
        Err(ApiError::UnsupportedMediaType)
    }
}

/// Content-Type header value; a non-ASCII header is treated as absent
pub fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
}

/// Decode a body that must be a JSON object into `T`
///
/// Arrays are refused even when serde could fill `T` positionally from them.
pub fn parse_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: JsonValue = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Request body is not valid JSON: {}", e);
        ApiError::BadRequest
    })?;

    if !value.is_object() {
        tracing::debug!("Request body is not a JSON object");
        return Err(ApiError::BadRequest);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Request body is missing required fields: {}", e);
        ApiError::BadRequest
    })
}

/// Textual form of a JSON value
///
/// Strings are kept verbatim, booleans and null are spelled `True`, `False`
/// and `None`, floats go through [`format_float`]. Arrays and objects are
/// stored as compact JSON.
pub fn as_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(true) => "True".to_string(),
        JsonValue::Bool(false) => "False".to_string(),
        JsonValue::Null => "None".to_string(),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_float(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Interpret a JSON value as a float
///
/// Numbers are taken as-is, strings are trimmed and parsed (including
/// `inf`/`nan` spellings and `_` digit separators), booleans count as 1 and 0.
pub fn as_float(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => strip_digit_separators(s.trim())?.parse::<f64>().ok(),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

/// Drop `_` separators; each one must sit between two ASCII digits
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !before.is_some_and(|b| b.is_ascii_digit()) || !after.is_some_and(|b| b.is_ascii_digit()) {
                return None;
            }
        } else {
            stripped.push(c);
        }
    }
    Some(stripped)
}

/// Render a float with the shortest digits that round-trip
///
/// Decimal exponents in `-4..16` use fixed notation and always carry a
/// fractional part (`3.0`), others use scientific notation with a signed,
/// two-digit exponent (`1e+16`, `2.5e-07`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-2.5e0", "1e16"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        let (int_part, frac_part) = if exponent >= 0 {
            let point = exponent as usize + 1;
            if digits.len() <= point {
                (format!("{}{}", digits, "0".repeat(point - digits.len())), "0".to_string())
            } else {
                (digits[..point].to_string(), digits[point..].to_string())
            }
        } else {
            let zeros = "0".repeat((-exponent - 1) as usize);
            ("0".to_string(), format!("{}{}", zeros, digits))
        };
        format!("{}{}.{}", sign, int_part, frac_part)
    } else {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, rest)
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.abs())
    }
}
