// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numeral::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Roman Numeral Example ===\n");

    // Build numerals from integers and strings
    let year = StrictNumeral::from_integer(1994).unwrap();
    let parsed: StrictNumeral = "xlii".parse().unwrap();
    println!("1994 -> {}", year);
    println!("\"xlii\" -> {}", parsed.to_integer());

    // Checked arithmetic
    println!("\n=== Arithmetic ===");
    let operations = [
        ("+", year + parsed),
        ("-", year - parsed),
        ("*", year * parsed),
        ("/", year / parsed),
    ];
    for (symbol, result) in operations {
        match result {
            Ok(value) => println!("  {} {} {} = {}", year, symbol, parsed, value),
            Err(err) => println!("  {} {} {} failed: {}", year, symbol, parsed, err),
        }
    }

    // Rejected inputs
    println!("\n=== Rejected Inputs ===");
    for input in ["", "-X", "MCMB", "MMMM"] {
        match input.parse::<StrictNumeral>() {
            Ok(value) => println!("  {:?} -> {}", input, value),
            Err(err) => println!("  {:?} -> {}", input, err),
        }
    }

    // Absent operands
    println!("\n=== Absent Operands ===");
    if let Err(err) = operands::add(Some(&year), None) {
        println!("  strict add: {}", err);
    }
    let five = PermissiveNumeral::from_integer(-5).unwrap();
    println!(
        "  permissive less_than(absent, V): {:?}",
        operands::less_than(None, Some(&five))
    );
    println!(
        "  permissive zero: {} (truthy: {})",
        PermissiveNumeral::ZERO,
        PermissiveNumeral::ZERO.is_truthy()
    );
}
