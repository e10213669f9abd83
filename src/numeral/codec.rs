// ============================================================================
// Roman Numeral Codec
// Symbol table plus greedy encoding and right-to-left decoding
// ============================================================================

use super::errors::FormatError;
use arrayvec::ArrayString;

/// Longest canonical numeral in range (3888 = `MMMDCCCLXXXVIII`).
pub const MAX_SYMBOLS: usize = 15;

/// Fixed-capacity buffer holding an encoded numeral.
pub type SymbolBuffer = ArrayString<16>;

/// Symbol used for a zero magnitude by the permissive variant.
pub const ZERO_SYMBOL: char = 'N';

/// Descending (value, symbol) pairs, pure powers and subtractive pairs.
const ENCODE_TABLE: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of a single symbol, matched case-insensitively.
#[inline]
pub const fn symbol_value(symbol: char) -> Option<u16> {
    match symbol.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Encode a magnitude into its canonical symbols.
///
/// Zero encodes as [`ZERO_SYMBOL`]. Callers keep `magnitude` within
/// 0..=3999 so the output never exceeds [`MAX_SYMBOLS`].
pub fn encode(magnitude: u16) -> SymbolBuffer {
    debug_assert!(magnitude <= 3999, "magnitude {} out of range", magnitude);
    let mut out = SymbolBuffer::new();
    if magnitude == 0 {
        out.push(ZERO_SYMBOL);
        return out;
    }

    let mut remaining = magnitude;
    for &(value, symbol) in ENCODE_TABLE.iter() {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

/// Decode symbols into an unchecked magnitude.
///
/// Scans right to left: a symbol smaller than its right-hand neighbour is
/// subtracted, anything else is added. Non-canonical input such as `IIII`
/// decodes to its additive value. The result is not range-checked.
///
/// # Errors
/// - `Empty` for an empty input
/// - `InvalidCharacter` naming the first (upper-cased) symbol outside the alphabet
pub fn decode(symbols: &str) -> Result<u64, FormatError> {
    if symbols.is_empty() {
        return Err(FormatError::Empty);
    }

    if let Some(bad) = symbols.chars().find(|c| symbol_value(*c).is_none()) {
        return Err(FormatError::InvalidCharacter(bad.to_ascii_uppercase()));
    }

    let mut result: i64 = 0;
    let mut previous: u16 = 0;
    for current in symbols.chars().rev().filter_map(symbol_value) {
        if current < previous {
            result -= current as i64;
        } else {
            result += current as i64;
        }
        previous = current;
    }

    // A strictly descending run sums to less than the symbol heading it.
    Ok(result.max(0) as u64)
}
