// ============================================================================
// Numeral Errors
// Error types for Roman numeral construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining numerals.
///
/// The `Display` text of every variant is part of the public contract and
/// must stay stable for callers that match on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// A magnitude (input or arithmetic result) is outside the representable range
    OutOfRange(RangeError),
    /// A string input could not be decoded
    InvalidFormat(FormatError),
    /// A binary operation received an absent operand
    NullOperand(Operand),
    /// Attempted division by zero (permissive variant only)
    DivisionByZero,
    /// A decimal input carried a fractional part
    PrecisionLoss,
}

/// Which range check was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// Constructor input outside `[min, max]`
    Value { min: u16, max: u16 },
    /// Sum or product above the maximum
    ResultTooLarge,
    /// Difference at or below zero
    ResultNotPositive,
    /// Quotient below one
    QuotientBelowOne,
}

/// Why a string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Input string is empty
    Empty,
    /// Input string carries a leading negative marker
    Negative,
    /// Input contains a character outside the symbol alphabet
    InvalidCharacter(char),
}

/// Operand position of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    /// Parameter name used in error messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Operand::A => "a",
            Operand::B => "b",
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Value { min, max } => {
                write!(f, "Value must be between {} and {}.", min, max)
            },
            RangeError::ResultTooLarge => write!(f, "Resulting value must be ≤ 3999."),
            RangeError::ResultNotPositive => write!(
                f,
                "Roman numerals cannot represent zero or negative values."
            ),
            RangeError::QuotientBelowOne => write!(f, "Resulting value must be >= 1."),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Empty => write!(f, "Roman numeral cannot be empty."),
            FormatError::Negative => write!(f, "Value must be positive."),
            FormatError::InvalidCharacter(c) => {
                write!(f, "Invalid Roman numeral character: '{}'.", c)
            },
        }
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::OutOfRange(range) => fmt::Display::fmt(range, f),
            NumeralError::InvalidFormat(format) => fmt::Display::fmt(format, f),
            NumeralError::NullOperand(operand) => {
                write!(f, "Value cannot be null. (Parameter '{}')", operand.name())
            },
            NumeralError::DivisionByZero => write!(f, "Division by zero."),
            NumeralError::PrecisionLoss => write!(f, "Value must be a whole number."),
        }
    }
}

impl std::error::Error for NumeralError {}

impl From<RangeError> for NumeralError {
    #[inline]
    fn from(err: RangeError) -> Self {
        NumeralError::OutOfRange(err)
    }
}

impl From<FormatError> for NumeralError {
    #[inline]
    fn from(err: FormatError) -> Self {
        NumeralError::InvalidFormat(err)
    }
}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
