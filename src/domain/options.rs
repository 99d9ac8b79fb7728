// ============================================================================
// Format Options
// Per-call configuration for rendering an amount
// ============================================================================

use super::separator::SeparatorConfig;
use crate::numeric::{FormatError, FormatResult, RoundingMode, MAX_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to turn an amount into a display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Number of digits after the decimal separator
    pub precision: u32,

    /// Grouping and decimal marks
    pub separators: SeparatorConfig,

    /// Optional: rounding mode
    /// None means truncate toward zero
    pub rounding_mode: Option<RoundingMode>,

    /// Scale large amounts down and append T/B/M/k
    pub abbreviate: bool,
}

impl FormatOptions {
    /// Create options with the given precision and defaults for the rest
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            separators: SeparatorConfig::default(),
            rounding_mode: None,
            abbreviate: false,
        }
    }

    /// Builder method: Set thousand and decimal separators
    pub fn with_separators(
        mut self,
        thousand_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
    ) -> Self {
        self.separators = SeparatorConfig::new(thousand_separator, decimal_separator);
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = Some(mode);
        self
    }

    /// Builder method: Enable or disable magnitude abbreviation
    pub fn with_abbreviation(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        self
    }

    /// The rounding mode actually applied.
    #[inline]
    pub fn effective_rounding_mode(&self) -> RoundingMode {
        self.rounding_mode.unwrap_or(RoundingMode::ROUND_DOWN)
    }

    /// Validate the options
    pub fn validate(&self) -> FormatResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(FormatError::InvalidPrecision {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.precision, 2);
        assert_eq!(options.separators, SeparatorConfig::default());
        assert_eq!(options.rounding_mode, None);
        assert_eq!(options.effective_rounding_mode(), RoundingMode::Down);
        assert!(!options.abbreviate);
    }

    #[test]
    fn test_builder() {
        let options = FormatOptions::new(4)
            .with_separators(".", ",")
            .with_rounding_mode(RoundingMode::HalfEven)
            .with_abbreviation(true);

        assert_eq!(options.precision, 4);
        assert_eq!(options.separators.group_separator, ".");
        assert_eq!(options.separators.decimal_separator, ",");
        assert_eq!(options.effective_rounding_mode(), RoundingMode::HalfEven);
        assert!(options.abbreviate);
    }

    #[test]
    fn test_validate() {
        assert!(FormatOptions::new(0).validate().is_ok());
        assert!(FormatOptions::new(MAX_PRECISION).validate().is_ok());
        assert!(matches!(
            FormatOptions::new(MAX_PRECISION + 1).validate(),
            Err(FormatError::InvalidPrecision { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"precision":3,"rounding_mode":"half_up"}"#).unwrap();
        assert_eq!(options.precision, 3);
        assert_eq!(options.rounding_mode, Some(RoundingMode::HalfUp));
        assert_eq!(options.separators, SeparatorConfig::default());
        assert!(!options.abbreviate);
    }
}
