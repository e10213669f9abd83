// ============================================================================
// Optional Operands
// Entry points for callers that may hold an absent numeral
// ============================================================================
//
// Arithmetic always fails with `NullOperand` on an absent side, checking `a`
// before `b`. Comparisons follow the variant's `AbsentOperands` policy:
// the strict variant fails, the permissive variant answers `false`.
// `compare` is total and never fails: absent sorts after every present value.

use super::errors::{NumeralError, NumeralResult, Operand};
use super::roman::Numeral;
use super::variant::AbsentOperands;
use std::cmp::Ordering;

/// Unwrap both operands or name the first missing one.
#[inline]
fn require<'a, const P: bool>(
    a: Option<&'a Numeral<P>>,
    b: Option<&'a Numeral<P>>,
) -> NumeralResult<(&'a Numeral<P>, &'a Numeral<P>)> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(absent(Operand::A)),
        (Some(_), None) => Err(absent(Operand::B)),
    }
}

#[cold]
fn absent(operand: Operand) -> NumeralError {
    tracing::debug!(operand = operand.name(), "absent numeral operand");
    NumeralError::NullOperand(operand)
}

/// Apply `predicate` to present operands, or resolve an absent one by policy.
fn compare_with<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
    predicate: impl FnOnce(&Numeral<P>, &Numeral<P>) -> bool,
) -> NumeralResult<bool> {
    match Numeral::<P>::VARIANT.absent_operands() {
        AbsentOperands::Fail => require(a, b).map(|(a, b)| predicate(a, b)),
        AbsentOperands::CompareFalse => match (a, b) {
            (Some(a), Some(b)) => Ok(predicate(a, b)),
            _ => {
                tracing::debug!("absent numeral operand, comparison is false");
                Ok(false)
            },
        },
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

/// `a + b`; see [`Numeral::checked_add`].
pub fn add<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<Numeral<P>> {
    let (a, b) = require(a, b)?;
    a.checked_add(*b)
}

/// `a - b`; see [`Numeral::checked_sub`].
pub fn subtract<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<Numeral<P>> {
    let (a, b) = require(a, b)?;
    a.checked_sub(*b)
}

/// `a * b`; see [`Numeral::checked_mul`].
pub fn multiply<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<Numeral<P>> {
    let (a, b) = require(a, b)?;
    a.checked_mul(*b)
}

/// `a / b`; see [`Numeral::checked_div`].
pub fn divide<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<Numeral<P>> {
    let (a, b) = require(a, b)?;
    a.checked_div(*b)
}

// ============================================================================
// Comparison
// ============================================================================

pub fn less_than<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<bool> {
    compare_with(a, b, |a, b| a < b)
}

pub fn greater_than<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<bool> {
    compare_with(a, b, |a, b| a > b)
}

pub fn less_or_equal<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<bool> {
    compare_with(a, b, |a, b| a <= b)
}

pub fn greater_or_equal<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<bool> {
    compare_with(a, b, |a, b| a >= b)
}

/// Value equality.
///
/// The permissive variant treats two absent operands as equal and a single
/// absent operand as unequal.
pub fn equals<const P: bool>(
    a: Option<&Numeral<P>>,
    b: Option<&Numeral<P>>,
) -> NumeralResult<bool> {
    match Numeral::<P>::VARIANT.absent_operands() {
        AbsentOperands::Fail => require(a, b).map(|(a, b)| a == b),
        AbsentOperands::CompareFalse => Ok(a == b),
    }
}

/// Total order over optional numerals.
///
/// Present values compare by magnitude; absent compares greater than any
/// present value and equal to another absent value.
pub fn compare<const P: bool>(a: Option<&Numeral<P>>, b: Option<&Numeral<P>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
