//! Request parameter parsing and validation.
//!
//! All field checks happen here, before any database call; the helpers
//! produce `AppError::Validation` naming the offending field.

use std::str::FromStr;

use rust_decimal::Decimal;

use cambio_shared::AppError;

/// Maximum length of a currency display name.
pub const MAX_NAME_LEN: usize = 50;
/// Maximum length of a currency sign.
pub const MAX_SIGN_LEN: usize = 5;

/// Parses a 3-letter currency code, normalizing to uppercase.
pub fn parse_currency_code(raw: &str) -> Result<String, AppError> {
    let code = raw.trim();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(AppError::Validation(format!(
            "Invalid currency code: {raw}"
        )))
    }
}

/// Splits a 6-letter path segment into (base, target) currency codes.
pub fn parse_pair_path(raw: &str) -> Result<(String, String), AppError> {
    let pair = raw.trim();
    if pair.len() == 6 && pair.bytes().all(|b| b.is_ascii_alphabetic()) {
        let (base, target) = pair.split_at(3);
        Ok((base.to_ascii_uppercase(), target.to_ascii_uppercase()))
    } else {
        Err(AppError::Validation(
            "Currency codes not present in address".to_string(),
        ))
    }
}

/// Parses a decimal field, rejecting non-numeric input.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("Invalid {field}: {raw}")))
}

/// Parses a rate field, which must be a positive decimal.
pub fn parse_rate(raw: &str) -> Result<Decimal, AppError> {
    let rate = parse_decimal("rate", raw)?;
    if rate > Decimal::ZERO {
        Ok(rate)
    } else {
        Err(AppError::Validation(
            "Exchange rate must be positive".to_string(),
        ))
    }
}

/// Validates a currency display name (non-blank, at most 50 characters).
pub fn parse_currency_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        Err(AppError::Validation(format!(
            "Invalid currency name: {raw}"
        )))
    } else {
        Ok(name.to_string())
    }
}

/// Validates a currency sign (non-blank, at most 5 characters).
pub fn parse_currency_sign(raw: &str) -> Result<String, AppError> {
    let sign = raw.trim();
    if sign.is_empty() || sign.chars().count() > MAX_SIGN_LEN {
        Err(AppError::Validation(format!(
            "Invalid currency sign: {raw}"
        )))
    } else {
        Ok(sign.to_string())
    }
}
