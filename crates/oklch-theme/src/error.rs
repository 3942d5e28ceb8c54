//! Error types for the strict parsers.
//!
//! The soft entry points ([`parse_oklch`](crate::parse_oklch),
//! [`ThemeSet::from_css_text`](crate::ThemeSet::from_css_text)) never return
//! these; they substitute neutral defaults instead.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Error returned when color text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Text does not contain an `oklch(L C H)` expression
    #[error("not an oklch() expression: {0:?}")]
    NotOklch(String),

    /// A component of the expression is not a valid number
    #[error("invalid oklch component: {0}")]
    InvalidNumber(#[from] ParseFloatError),

    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error returned when a strategy name is not one of the four known ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme strategy {0:?} (expected standard, vivid, minimal or professional)")]
pub struct UnknownStrategy(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = ParseColorError::NotOklch("red".to_string());
        assert_eq!(error.to_string(), "not an oklch() expression: \"red\"");

        let error = ParseColorError::InvalidLength;
        assert_eq!(
            error.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );

        let error = UnknownStrategy("loud".to_string());
        assert_eq!(
            error.to_string(),
            "unknown theme strategy \"loud\" (expected standard, vivid, minimal or professional)"
        );
    }

    #[test]
    fn test_from_parse_errors() {
        let float_err = "x".parse::<f64>().unwrap_err();
        assert!(matches!(
            ParseColorError::from(float_err),
            ParseColorError::InvalidNumber(_)
        ));

        let int_err = u8::from_str_radix("zz", 16).unwrap_err();
        assert!(matches!(
            ParseColorError::from(int_err),
            ParseColorError::InvalidHex(_)
        ));
    }
}
