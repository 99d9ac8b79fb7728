// ============================================================================
// Separator Configuration
// Digit grouping and decimal mark used when rendering amounts
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Group size, group separator and decimal separator for one rendering.
///
/// Separators are inserted verbatim and may be any string, including an
/// empty one. Nothing checks that the two separators differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeparatorConfig {
    /// Digits per integer group (always 3 when built by this crate)
    pub group_size: usize,
    /// Inserted between integer digit groups
    pub group_separator: String,
    /// Inserted between the integer and fractional part
    pub decimal_separator: String,
}

impl SeparatorConfig {
    /// Digits per group used for every configuration built here.
    pub const GROUP_SIZE: usize = 3;

    /// Create a configuration with groups of three digits.
    pub fn new(group_separator: impl Into<String>, decimal_separator: impl Into<String>) -> Self {
        Self {
            group_size: Self::GROUP_SIZE,
            group_separator: group_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }
}

impl Default for SeparatorConfig {
    /// `1,234.56` style.
    fn default() -> Self {
        Self::new(",", ".")
    }
}

/// Build a separator configuration from a thousand and a decimal separator.
pub fn build_separator_config(thousand_separator: &str, decimal_separator: &str) -> SeparatorConfig {
    SeparatorConfig::new(thousand_separator, decimal_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_separator_config() {
        let config = build_separator_config(".", ",");
        assert_eq!(
            config,
            SeparatorConfig {
                group_size: 3,
                group_separator: ".".to_string(),
                decimal_separator: ",".to_string(),
            }
        );
    }

    #[test]
    fn test_builds_are_independent() {
        let mut a = build_separator_config(",", ".");
        let b = build_separator_config(",", ".");
        a.group_separator.push('!');
        assert_eq!(b.group_separator, ",");
    }

    #[test]
    fn test_default() {
        let config = SeparatorConfig::default();
        assert_eq!(config.group_size, SeparatorConfig::GROUP_SIZE);
        assert_eq!(config.group_separator, ",");
        assert_eq!(config.decimal_separator, ".");
    }

    #[test]
    fn test_identical_separators_accepted() {
        let config = build_separator_config(".", ".");
        assert_eq!(config.group_separator, config.decimal_separator);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = build_separator_config("'", ".");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"group_size":3,"group_separator":"'","decimal_separator":"."}"#
        );
        let back: SeparatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
