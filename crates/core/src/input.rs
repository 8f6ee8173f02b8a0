//! Numeric coercion for calculator text fields.

use thiserror::Error;

/// Generic bad-input marker. The shell renders every instance as a single
/// "Error" state with no field-level detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unparsable numeric input")]
pub struct InputError;

/// Parse a required floating-point field. Blank input is a parse failure.
pub fn parse_f64(text: &str) -> Result<f64, InputError> {
    text.trim().parse::<f64>().map_err(|_| InputError)
}

/// Parse an integer field, with blank input falling back to `default`.
pub fn parse_i64_or(text: &str, default: i64) -> Result<i64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse::<i64>().map_err(|_| InputError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_float_field_is_an_error() {
        assert_eq!(parse_f64(""), Err(InputError));
        assert_eq!(parse_f64("   "), Err(InputError));
    }

    #[test]
    fn float_field_accepts_sign_and_fraction() {
        assert_eq!(parse_f64(" -12.5 "), Ok(-12.5));
    }

    #[test]
    fn blank_int_field_uses_default() {
        assert_eq!(parse_i64_or("", 4), Ok(4));
        assert_eq!(parse_i64_or("  ", 0), Ok(0));
    }

    #[test]
    fn garbage_int_field_is_an_error() {
        assert_eq!(parse_i64_or("ten", 0), Err(InputError));
    }
}
