// ============================================================================
// Numeral Module
// Bounded Roman numeral value type
// ============================================================================
//
// This module provides:
// - Numeral<P>: Roman numeral with a compile-time strict/permissive policy
// - NumeralError: Error types for construction and arithmetic
// - StrictNumeral/PermissiveNumeral type aliases
// - operands: entry points accepting absent (Option) operands
//
// Design principles:
// - Magnitude is the only state; symbols are derived on demand
// - All fallible operations return Result (no panics)
// - Encoding uses a fixed 16-byte buffer, no heap allocation

mod codec;
mod errors;
pub mod operands;
mod roman;
mod variant;

pub use codec::{symbol_value, SymbolBuffer, MAX_SYMBOLS, ZERO_SYMBOL};
pub use errors::{FormatError, NumeralError, NumeralResult, Operand, RangeError};
pub use roman::{Numeral, PermissiveNumeral, StrictNumeral};
pub use variant::{AbsentOperands, Variant, MAX_MAGNITUDE};
