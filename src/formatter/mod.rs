// ============================================================================
// Formatter Module
// Public entry points for turning amounts into display strings
// ============================================================================

mod amount_formatter;

pub use amount_formatter::{format_amount, format_with_options, AmountFormatter};
