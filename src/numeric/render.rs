// ============================================================================
// Decimal Rendering
// Fixed-precision string rendering with digit grouping
// ============================================================================

use super::errors::{FormatError, FormatResult};
use super::rounding::RoundingMode;
use crate::domain::SeparatorConfig;
use rust_decimal::Decimal;

/// Largest accepted number of fractional digits.
pub const MAX_PRECISION: u32 = 1_000_000_000;

/// Render `amount` with exactly `precision` fractional digits.
///
/// The value is rounded with `rounding`, then padded with trailing zeros.
/// Padding may go past the 28-digit scale limit of [`Decimal`]; the extra
/// digits are always zero. Integer digits are grouped from the right using
/// `separators.group_size`.
///
/// A rounded value of zero is printed without a sign.
///
/// # Errors
/// Returns `InvalidPrecision` if `precision` exceeds [`MAX_PRECISION`].
///
/// # Example
/// ```
/// use amount_format::domain::build_separator_config;
/// use amount_format::numeric::{render_decimal, RoundingMode};
/// use rust_decimal::Decimal;
///
/// let amount: Decimal = "1234567.891".parse().unwrap();
/// let separators = build_separator_config(".", ",");
/// let s = render_decimal(&amount, 2, RoundingMode::Down, &separators).unwrap();
/// assert_eq!(s, "1.234.567,89");
/// ```
pub fn render_decimal(
    amount: &Decimal,
    precision: u32,
    rounding: RoundingMode,
    separators: &SeparatorConfig,
) -> FormatResult<String> {
    if precision > MAX_PRECISION {
        return Err(FormatError::InvalidPrecision {
            precision,
            max: MAX_PRECISION,
        });
    }

    let rounded = if precision < amount.scale() {
        rounding.round(*amount, precision)
    } else {
        *amount
    };

    let digits = rounded.abs().to_string();
    let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let precision = precision as usize;
    let mut out = String::with_capacity(
        digits.len() + precision + int_digits.len() / 3 * separators.group_separator.len() + 2,
    );

    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }

    push_grouped(
        &mut out,
        int_digits,
        separators.group_size,
        &separators.group_separator,
    );

    if precision > 0 {
        out.push_str(&separators.decimal_separator);
        out.push_str(frac_digits);
        for _ in frac_digits.len()..precision {
            out.push('0');
        }
    }

    Ok(out)
}

/// Append ASCII `digits` to `out`, inserting `separator` every `group_size`
/// digits counted from the right. A group size of zero disables grouping.
fn push_grouped(out: &mut String, digits: &str, group_size: usize, separator: &str) {
    if group_size == 0 || digits.len() <= group_size {
        out.push_str(digits);
        return;
    }

    let first = match digits.len() % group_size {
        0 => group_size,
        rem => rem,
    };
    out.push_str(&digits[..first]);

    let mut idx = first;
    while idx < digits.len() {
        out.push_str(separator);
        out.push_str(&digits[idx..idx + group_size]);
        idx += group_size;
    }
}
