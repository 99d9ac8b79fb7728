// ============================================================================
// Magnitude Abbreviations
// Fixed table of (exponent, suffix) pairs: T, B, M, k
// ============================================================================

use rust_decimal::Decimal;

/// Scale an amount down by `10^exponent` and tag it with `suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbbreviationRule {
    pub exponent: u32,
    pub suffix: &'static str,
}

impl AbbreviationRule {
    pub const fn new(exponent: u32, suffix: &'static str) -> Self {
        Self { exponent, suffix }
    }

    /// `10^exponent` as a decimal.
    #[inline]
    pub fn threshold(&self) -> Decimal {
        Decimal::from(10u64.pow(self.exponent))
    }

    /// Whether `amount` is large enough, in absolute value, for this rule.
    #[inline]
    pub fn applies_to(&self, amount: &Decimal) -> bool {
        amount.abs() >= self.threshold()
    }
}

/// Abbreviation rules, largest magnitude first.
pub static ABBREVIATION_RULES: [AbbreviationRule; 4] = [
    AbbreviationRule::new(12, "T"),
    AbbreviationRule::new(9, "B"),
    AbbreviationRule::new(6, "M"),
    AbbreviationRule::new(3, "k"),
];

/// First rule in [`ABBREVIATION_RULES`] that applies to `amount`, if any.
///
/// The table is ordered by descending exponent, so the largest applicable
/// magnitude wins.
pub fn find_abbreviation(amount: &Decimal) -> Option<&'static AbbreviationRule> {
    ABBREVIATION_RULES
        .iter()
        .find(|rule| rule.applies_to(amount))
}
