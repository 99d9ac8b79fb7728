// ============================================================================
// Amount Formatter
// Precision, separators, rounding and magnitude abbreviation in one call
// ============================================================================

use crate::domain::{find_abbreviation, FormatOptions, SeparatorConfig};
use crate::numeric::{render_decimal, Amount, FormatError, FormatResult, RoundingMode};

/// Reusable formatter bound to one set of [`FormatOptions`].
///
/// Holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountFormatter {
    options: FormatOptions,
}

impl AmountFormatter {
    /// Create a formatter after validating `options`.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if the precision is out of range.
    pub fn new(options: FormatOptions) -> FormatResult<Self> {
        if let Err(err) = options.validate() {
            tracing::debug!(error = %err, "Rejected format options");
            return Err(err);
        }
        Ok(Self { options })
    }

    /// The options this formatter applies.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format `amount` with the bound options.
    pub fn format(&self, amount: &Amount) -> FormatResult<String> {
        format_with_options(amount, &self.options)
    }
}

/// Format `amount` for display.
///
/// - `precision`: digits after the decimal separator, trailing zeros kept
/// - `thousand_separator` / `decimal_separator`: inserted verbatim
/// - `rounding_mode`: `None` truncates toward zero
/// - `abbreviate`: `Some(true)` scales amounts of at least one thousand
///   down to the largest matching magnitude and appends `" T"`, `" B"`,
///   `" M"` or `" k"`; `None` means no abbreviation
///
/// # Example
/// ```
/// use amount_format::formatter::format_amount;
/// use rust_decimal::Decimal;
///
/// let s = format_amount(&Decimal::from(1_234_567), 2, ",", ".", None, Some(true)).unwrap();
/// assert_eq!(s, "1.23 M");
/// ```
pub fn format_amount(
    amount: &Amount,
    precision: u32,
    thousand_separator: &str,
    decimal_separator: &str,
    rounding_mode: Option<RoundingMode>,
    abbreviate: Option<bool>,
) -> FormatResult<String> {
    let options = FormatOptions {
        precision,
        separators: SeparatorConfig::new(thousand_separator, decimal_separator),
        rounding_mode,
        abbreviate: abbreviate.unwrap_or(false),
    };
    format_with_options(amount, &options)
}

/// Format `amount` as described by `options`.
pub fn format_with_options(amount: &Amount, options: &FormatOptions) -> FormatResult<String> {
    let rounding = options.effective_rounding_mode();

    if options.abbreviate {
        if let Some(rule) = find_abbreviation(amount) {
            let scaled = amount
                .checked_div(rule.threshold())
                .ok_or(FormatError::Overflow)?;
            let body = render_decimal(&scaled, options.precision, rounding, &options.separators)?;

            tracing::trace!(
                %amount,
                precision = options.precision,
                %rounding,
                suffix = rule.suffix,
                "Formatted abbreviated amount"
            );
            return Ok(format!("{} {}", body, rule.suffix));
        }
    }

    let out = render_decimal(amount, options.precision, rounding, &options.separators)?;
    tracing::trace!(
        %amount,
        precision = options.precision,
        %rounding,
        "Formatted amount"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MAX_PRECISION;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fmt(s: &str, precision: u32, abbreviate: bool) -> String {
        format_amount(&dec(s), precision, ",", ".", None, Some(abbreviate)).unwrap()
    }

    #[test]
    fn test_abbreviates_millions() {
        assert_eq!(fmt("1234567", 2, true), "1.23 M");
    }

    #[test]
    fn test_below_thousand_not_abbreviated() {
        assert_eq!(fmt("999", 2, true), "999.00");
        assert_eq!(fmt("999.999", 2, true), "999.99");
    }

    #[test]
    fn test_zero_with_abbreviation() {
        assert_eq!(fmt("0", 2, true), "0.00");
        assert_eq!(fmt("0", 2, true), fmt("0", 2, false));
    }

    #[test]
    fn test_plain_formatting() {
        assert_eq!(
            format_amount(&dec("1234567.89"), 2, ",", ".", None, None).unwrap(),
            "1,234,567.89"
        );
    }

    #[test]
    fn test_default_rounding_truncates() {
        assert_eq!(fmt("1.999", 1, false), "1.9");
        assert_eq!(
            format_amount(&dec("1.999"), 1, ",", ".", Some(RoundingMode::HalfUp), None).unwrap(),
            "2.0"
        );
    }

    #[test]
    fn test_each_magnitude() {
        assert_eq!(fmt("1000", 1, true), "1.0 k");
        assert_eq!(fmt("2500000000", 1, true), "2.5 B");
        assert_eq!(fmt("7000000000000", 0, true), "7 T");
    }

    #[test]
    fn test_trillions_never_fall_through() {
        assert_eq!(fmt("1500000000000000", 2, true), "1,500.00 T");
    }

    #[test]
    fn test_negative_abbreviation() {
        assert_eq!(fmt("-1234567", 2, true), "-1.23 M");
        assert_eq!(fmt("-999", 0, true), "-999");
    }

    #[test]
    fn test_rounding_applies_to_scaled_value() {
        let s = format_amount(
            &dec("1999999"),
            1,
            ",",
            ".",
            Some(RoundingMode::HalfUp),
            Some(true),
        )
        .unwrap();
        assert_eq!(s, "2.0 M");

        assert_eq!(fmt("1999999", 1, true), "1.9 M");
    }

    #[test]
    fn test_locale_separators() {
        let s = format_amount(&dec("1234567.891"), 2, ".", ",", None, None).unwrap();
        assert_eq!(s, "1.234.567,89");

        let s = format_amount(&dec("1234567891"), 3, ".", ",", None, Some(true)).unwrap();
        assert_eq!(s, "1,234 B");
    }

    #[test]
    fn test_invalid_precision_propagates() {
        let result = format_amount(&dec("1"), MAX_PRECISION + 1, ",", ".", None, Some(true));
        assert!(matches!(result, Err(FormatError::InvalidPrecision { .. })));

        let result = format_amount(&dec("5000"), MAX_PRECISION + 1, ",", ".", None, Some(true));
        assert!(matches!(result, Err(FormatError::InvalidPrecision { .. })));
    }

    #[test]
    fn test_formatter_reuse() {
        let formatter = AmountFormatter::new(
            FormatOptions::new(1)
                .with_separators("'", ".")
                .with_abbreviation(true),
        )
        .unwrap();

        assert_eq!(formatter.format(&dec("4321")).unwrap(), "4.3 k");
        assert_eq!(formatter.format(&dec("12.34")).unwrap(), "12.3");
        assert_eq!(formatter.options().precision, 1);
    }

    #[test]
    fn test_formatter_rejects_invalid_options() {
        let result = AmountFormatter::new(FormatOptions::new(MAX_PRECISION + 1));
        assert!(matches!(result, Err(FormatError::InvalidPrecision { .. })));
    }

    #[test]
    fn test_formatter_default() {
        let formatter = AmountFormatter::default();
        assert_eq!(formatter.format(&dec("1234.5678")).unwrap(), "1,234.56");
    }

    #[test]
    fn test_formatter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AmountFormatter>();
    }
}
