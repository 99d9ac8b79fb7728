// ============================================================================
// Basic Usage Example
// ============================================================================

use amount_format::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), FormatError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Amount Format Example ===\n");

    let amounts: Vec<Decimal> = [
        "0",
        "999.999",
        "1234.5678",
        "-1234567.891",
        "2500000000",
        "7300000000000",
    ]
    .iter()
    .filter_map(|s| s.parse().ok())
    .collect();

    // Plain rendering with default truncation
    println!("Plain (en):");
    for amount in &amounts {
        println!("  {:>16} -> {}", amount, format_amount(amount, 2, ",", ".", None, None)?);
    }

    // Abbreviated with German-style separators
    let formatter = AmountFormatter::new(
        FormatOptions::new(2)
            .with_separators(".", ",")
            .with_rounding_mode(RoundingMode::HalfUp)
            .with_abbreviation(true),
    )?;

    println!("\nAbbreviated (de, half_up):");
    for amount in &amounts {
        println!("  {:>16} -> {}", amount, formatter.format(amount)?);
    }

    // Rounding modes side by side
    let amount: Decimal = "-2.345".parse().unwrap_or_default();
    println!("\nRounding {} to 2 decimals:", amount);
    for mode in RoundingMode::ALL {
        println!(
            "  {:<10} -> {}",
            mode,
            format_amount(&amount, 2, ",", ".", Some(mode), None)?
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
