// ============================================================================
// Amount Format Library
// Human-readable rendering of arbitrary-precision decimal amounts
// ============================================================================

//! # Amount Format
//!
//! Renders [`rust_decimal::Decimal`] amounts for display.
//!
//! ## Features
//!
//! - **Fixed precision** with trailing zeros kept
//! - **Custom separators** for digit groups of three and the decimal mark
//! - **Nine rounding modes**, truncation toward zero by default
//! - **Magnitude abbreviation** with `T`, `B`, `M` and `k` suffixes
//!
//! ## Example
//!
//! ```rust
//! use amount_format::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let amount: Decimal = "1234567.891".parse().unwrap();
//!
//! // Plain rendering, truncated to two decimals
//! let plain = format_amount(&amount, 2, ",", ".", None, None).unwrap();
//! assert_eq!(plain, "1,234,567.89");
//!
//! // Abbreviated, rounded half-up
//! let short = format_amount(&amount, 2, ",", ".", Some(RoundingMode::HalfUp), Some(true)).unwrap();
//! assert_eq!(short, "1.23 M");
//!
//! // Reusable formatter with German-style separators
//! let formatter = AmountFormatter::new(FormatOptions::new(2).with_separators(".", ",")).unwrap();
//! assert_eq!(formatter.format(&amount).unwrap(), "1.234.567,89");
//! ```

pub mod domain;
pub mod formatter;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        build_separator_config, find_abbreviation, AbbreviationRule, FormatOptions,
        SeparatorConfig, ABBREVIATION_RULES,
    };
    pub use crate::formatter::{format_amount, format_with_options, AmountFormatter};
    pub use crate::numeric::{
        render_decimal, Amount, FormatError, FormatResult, RoundingMode, MAX_PRECISION,
    };
}
