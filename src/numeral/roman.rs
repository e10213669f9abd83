// ============================================================================
// Roman Numeral
// Bounded numeral value type with checked arithmetic
// ============================================================================

use super::codec::{self, SymbolBuffer};
use super::errors::{FormatError, NumeralError, NumeralResult, RangeError};
use super::variant::{Variant, MAX_MAGNITUDE};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Not, Sub};
use std::str::FromStr;

/// A Roman numeral with a compile-time policy.
///
/// Internally stores the magnitude as a u16. The symbolic form is derived on
/// demand and always round-trips with the magnitude.
///
/// # Type Parameter
/// - `PERMISSIVE`: `false` (default) for the strict 1-3999 numeral,
///   `true` for the variant that admits zero (`N`) and folds negatives.
///
/// # Example
/// ```ignore
/// use roman_numeral::numeral::Numeral;
///
/// let a: Numeral = "XIV".parse()?;            // 14
/// let b = Numeral::<false>::from_integer(6)?;  // VI
/// let total = a.checked_add(b)?;              // XX
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Numeral<const PERMISSIVE: bool = false>(u16);

impl<const P: bool> Numeral<P> {
    /// Policy this numeral type follows
    pub const VARIANT: Variant = Variant::of::<P>();

    /// Smallest representable value
    pub const MIN: Self = Self(Variant::of::<P>().min_magnitude());

    /// Largest representable value (MMMCMXCIX)
    pub const MAX: Self = Self(MAX_MAGNITUDE);

    /// One (I)
    pub const ONE: Self = Self(1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an integer value.
    ///
    /// The permissive variant folds negative values to their magnitude.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the (folded) value is not representable.
    pub fn from_integer(value: i64) -> NumeralResult<Self> {
        let magnitude = match u64::try_from(value) {
            Ok(magnitude) => magnitude,
            Err(_) if Self::VARIANT.folds_negative() => value.unsigned_abs(),
            Err(_) => return Err(Self::value_error()),
        };
        Self::checked_magnitude(magnitude).ok_or_else(Self::value_error)
    }

    /// Copy another numeral.
    #[inline]
    pub const fn from_numeral(other: &Self) -> Self {
        Self(other.0)
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has a fractional part
    /// - `OutOfRange` if the value is not representable
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumeralResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        if !d.fract().is_zero() {
            return Err(NumeralError::PrecisionLoss);
        }
        let value = d.to_i64().ok_or_else(Self::value_error)?;
        Self::from_integer(value)
    }

    #[inline]
    fn checked_magnitude(magnitude: u64) -> Option<Self> {
        if Self::VARIANT.contains(magnitude) {
            Some(Self(magnitude as u16))
        } else {
            None
        }
    }

    #[cold]
    fn value_error() -> NumeralError {
        Self::range_violation(
            RangeError::Value {
                min: Self::VARIANT.min_magnitude(),
                max: Self::VARIANT.max_magnitude(),
            },
            "construct",
        )
    }

    #[cold]
    fn range_violation(err: RangeError, operation: &'static str) -> NumeralError {
        tracing::trace!(operation, error = %err, "numeral range violation");
        NumeralError::OutOfRange(err)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the stored magnitude.
    #[inline]
    pub const fn magnitude(self) -> u16 {
        self.0
    }

    /// Get the magnitude as a plain integer.
    #[inline]
    pub const fn to_integer(self) -> i64 {
        self.0 as i64
    }

    /// Canonical symbols without heap allocation.
    #[inline]
    pub fn symbols(self) -> SymbolBuffer {
        codec::encode(self.0)
    }

    /// Check if value is zero (never true for the strict variant).
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to rust_decimal::Decimal.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.0)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the sum exceeds 3999.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumeralResult<Self> {
        let sum = self.0 as u32 + rhs.0 as u32;
        if sum > MAX_MAGNITUDE as u32 {
            return Err(Self::range_violation(RangeError::ResultTooLarge, "add"));
        }
        Ok(Self(sum as u16))
    }

    /// Checked subtraction.
    ///
    /// The permissive variant returns the absolute difference.
    ///
    /// # Errors
    /// Returns `OutOfRange` if a strict result would be zero or negative.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumeralResult<Self> {
        if Self::VARIANT.folds_negative() {
            return Ok(Self(self.0.abs_diff(rhs.0)));
        }
        match self.0.checked_sub(rhs.0) {
            Some(diff) if diff >= 1 => Ok(Self(diff)),
            _ => Err(Self::range_violation(
                RangeError::ResultNotPositive,
                "subtract",
            )),
        }
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the product exceeds 3999.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumeralResult<Self> {
        let product = self.0 as u32 * rhs.0 as u32;
        if product > MAX_MAGNITUDE as u32 {
            return Err(Self::range_violation(RangeError::ResultTooLarge, "multiply"));
        }
        Ok(Self(product as u16))
    }

    /// Checked integer division (truncating).
    ///
    /// # Errors
    /// - `OutOfRange` if a strict quotient is below one
    /// - `DivisionByZero` if a permissive divisor is zero
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumeralResult<Self> {
        if rhs.0 == 0 {
            return Err(NumeralError::DivisionByZero);
        }
        let quotient = self.0 / rhs.0;
        if quotient < Self::VARIANT.min_magnitude() {
            return Err(Self::range_violation(RangeError::QuotientBelowOne, "divide"));
        }
        Ok(Self(quotient))
    }
}

// ============================================================================
// Permissive-only API
// ============================================================================

impl Numeral<true> {
    /// Zero value (N)
    pub const ZERO: Self = Self(0);

    /// A numeral is truthy iff its magnitude is nonzero.
    #[inline]
    pub const fn is_truthy(self) -> bool {
        self.0 != 0
    }
}

impl Default for Numeral<true> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Not for Numeral<true> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        self.is_zero()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const P: bool> PartialEq for Numeral<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.0 == other.0
    }
}

impl<const P: bool> Eq for Numeral<P> {}

impl<const P: bool> PartialOrd for Numeral<P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const P: bool> Ord for Numeral<P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const P: bool> Hash for Numeral<P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// Operators surface the checked result instead of panicking.
impl<const P: bool> Add for Numeral<P> {
    type Output = NumeralResult<Self>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<const P: bool> Sub for Numeral<P> {
    type Output = NumeralResult<Self>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<const P: bool> Mul for Numeral<P> {
    type Output = NumeralResult<Self>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl<const P: bool> Div for Numeral<P> {
    type Output = NumeralResult<Self>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const P: bool> fmt::Debug for Numeral<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Numeral({}, magnitude={})", self, self.0)
    }
}

impl<const P: bool> fmt::Display for Numeral<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbols().as_str())
    }
}

// ============================================================================
// Integer Conversions
// ============================================================================

macro_rules! impl_try_from_integer {
    ($($t:ty),*) => {
        $(
            impl<const P: bool> TryFrom<$t> for Numeral<P> {
                type Error = NumeralError;

                #[inline]
                fn try_from(value: $t) -> NumeralResult<Self> {
                    let value = i64::try_from(value).map_err(|_| Self::value_error())?;
                    Self::from_integer(value)
                }
            }
        )*
    };
}

impl_try_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_into_integer {
    ($($t:ty),*) => {
        $(
            impl<const P: bool> From<Numeral<P>> for $t {
                #[inline]
                fn from(numeral: Numeral<P>) -> $t {
                    <$t>::from(numeral.0)
                }
            }
        )*
    };
}

impl_into_integer!(u16, u32, u64, i32, i64);

// ============================================================================
// String Parsing
// ============================================================================

impl<const P: bool> FromStr for Numeral<P> {
    type Err = NumeralError;

    /// Parse from Roman symbols, case-insensitively.
    ///
    /// # Examples
    /// - "XIV" -> 14
    /// - "mcmxciv" -> 1994
    /// - "-V" -> 5 (permissive), error (strict)
    /// - "N" -> 0 (permissive), error (strict)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = match s.strip_prefix('-') {
            Some(rest) if Self::VARIANT.folds_negative() => rest,
            Some(_) => return Err(Self::format_violation(FormatError::Negative, s)),
            None => s,
        };

        if Self::VARIANT.allows_zero() && symbols.eq_ignore_ascii_case("N") {
            return Ok(Self(0));
        }

        let magnitude = codec::decode(symbols).map_err(|err| Self::format_violation(err, s))?;
        Self::checked_magnitude(magnitude).ok_or_else(Self::value_error)
    }
}

impl<const P: bool> Numeral<P> {
    #[cold]
    fn format_violation(err: FormatError, input: &str) -> NumeralError {
        tracing::trace!(input, error = %err, "rejected numeral");
        NumeralError::InvalidFormat(err)
    }
}

impl<const P: bool> TryFrom<&str> for Numeral<P> {
    type Error = NumeralError;

    #[inline]
    fn try_from(s: &str) -> NumeralResult<Self> {
        s.parse()
    }
}

// ============================================================================
// Serialization (symbolic form on the wire)
// ============================================================================

#[cfg(feature = "serde")]
impl<const P: bool> serde::Serialize for Numeral<P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbols().as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, const P: bool> serde::Deserialize<'de> for Numeral<P> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbols = <String as serde::Deserialize>::deserialize(deserializer)?;
        symbols.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Strict numeral, range 1-3999
pub type StrictNumeral = Numeral<false>;

/// Numeral admitting zero (N) and folding negative magnitudes
pub type PermissiveNumeral = Numeral<true>;

// ============================================================================
// Tests
// ============================================================================
