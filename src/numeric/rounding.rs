// ============================================================================
// Rounding Modes
// Policies for reducing an amount to a fixed number of fractional digits
// ============================================================================

use super::errors::{FormatError, FormatResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied when an amount has more fractional digits than
/// the requested precision.
///
/// The numeric codes (`0..=8`) follow the numbering used by the common
/// arbitrary-precision decimal libraries, so configuration coming from a
/// frontend can be passed through as-is via [`TryFrom<u8>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncation)
    #[default]
    Down,
    /// Toward positive infinity
    Ceil,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven,
    /// Nearest neighbour, ties toward positive infinity
    HalfCeil,
    /// Nearest neighbour, ties toward negative infinity
    HalfFloor,
}

impl RoundingMode {
    /// Truncate toward zero. Used whenever no mode is given.
    pub const ROUND_DOWN: Self = RoundingMode::Down;

    /// All modes, ordered by numeric code.
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceil,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfCeil,
        RoundingMode::HalfFloor,
    ];

    /// Numeric code of this mode.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// snake_case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
            RoundingMode::Ceil => "ceil",
            RoundingMode::Floor => "floor",
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfDown => "half_down",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::HalfCeil => "half_ceil",
            RoundingMode::HalfFloor => "half_floor",
        }
    }

    /// Resolve the `rust_decimal` strategy for a value of the given sign.
    ///
    /// `HalfCeil` and `HalfFloor` have no direct counterpart, so the
    /// midpoint direction is picked from the sign of the value.
    pub fn strategy_for(self, value: &Decimal) -> RoundingStrategy {
        let negative = value.is_sign_negative();
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceil => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfCeil if negative => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfCeil => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfFloor if negative => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfFloor => RoundingStrategy::MidpointTowardZero,
        }
    }

    /// Round `value` to `dp` fractional digits.
    #[inline]
    pub fn round(self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.strategy_for(&value))
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = FormatError;

    fn try_from(code: u8) -> FormatResult<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(FormatError::InvalidRoundingMode(code))
    }
}

impl FromStr for RoundingMode {
    type Err = FormatError;

    /// Parse a mode name, e.g. `"down"`, `"half_up"` or `"HALF-EVEN"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| FormatError::UnknownRoundingMode(s.to_string()))
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
