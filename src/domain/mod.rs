// ============================================================================
// Domain Models Module
// Value objects describing how an amount is displayed
// ============================================================================

pub mod abbreviation;
pub mod options;
pub mod separator;

pub use abbreviation::{find_abbreviation, AbbreviationRule, ABBREVIATION_RULES};
pub use options::FormatOptions;
pub use separator::{build_separator_config, SeparatorConfig};
