// ============================================================================
// Numeric Module
// Rounding and rendering on top of rust_decimal
// ============================================================================
//
// This module provides:
// - RoundingMode: rounding policies with numeric codes 0..=8
// - render_decimal: fixed-precision rendering with grouped digits
// - FormatError: Error types for rendering
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Amounts are rust_decimal::Decimal; this module never re-implements arithmetic

mod errors;
mod render;
mod rounding;

pub use errors::{FormatError, FormatResult};
pub use render::{render_decimal, MAX_PRECISION};
pub use rounding::RoundingMode;

/// The amount type accepted by every formatting operation.
pub type Amount = rust_decimal::Decimal;
