// ============================================================================
// Format Errors
// Error types raised while rendering decimal amounts
// ============================================================================

use std::fmt;

/// Errors that can occur while rendering an amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Requested fractional digits exceed the supported maximum
    InvalidPrecision { precision: u32, max: u32 },
    /// Numeric rounding-mode code outside 0..=8
    InvalidRoundingMode(u8),
    /// Rounding-mode name that does not match any known mode
    UnknownRoundingMode(String),
    /// Scaling the amount left the representable range
    Overflow,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidPrecision { precision, max } => write!(
                f,
                "invalid precision: {} exceeds the maximum of {}",
                precision, max
            ),
            FormatError::InvalidRoundingMode(code) => {
                write!(f, "invalid rounding mode: {} is not in 0..=8", code)
            },
            FormatError::UnknownRoundingMode(name) => {
                write!(f, "unknown rounding mode: {:?}", name)
            },
            FormatError::Overflow => {
                write!(f, "arithmetic overflow: amount could not be scaled")
            },
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
