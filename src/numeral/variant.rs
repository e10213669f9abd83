// ============================================================================
// Numeral Variant
// Policy knobs distinguishing the strict and permissive numeral types
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest magnitude any Roman numeral variant can express.
pub const MAX_MAGNITUDE: u16 = 3999;

// ============================================================================
// Absent Operand Policy
// ============================================================================

/// How comparisons treat an absent operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AbsentOperands {
    /// Report `NullOperand` naming the missing side
    Fail,
    /// Short-circuit the comparison to `false`
    CompareFalse,
}

// ============================================================================
// Variant
// ============================================================================

/// The two supported numeral policies.
///
/// Selected at compile time through the `PERMISSIVE` parameter of
/// [`Numeral`](super::Numeral); this enum makes the policy inspectable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// Range 1-3999, no zero, no negative input, fail loudly on absent operands
    /// - Subtraction below one is an error
    /// - A leading `-` in input is rejected
    #[default]
    Strict,

    /// Range 0-3999 with `N` for zero
    /// - Negative magnitudes fold to their absolute value
    /// - Comparisons against an absent operand are `false`
    Permissive,
}

impl Variant {
    /// Variant matching a `PERMISSIVE` const parameter.
    #[inline]
    pub const fn of<const PERMISSIVE: bool>() -> Self {
        if PERMISSIVE {
            Variant::Permissive
        } else {
            Variant::Strict
        }
    }

    #[inline]
    pub const fn min_magnitude(self) -> u16 {
        match self {
            Variant::Strict => 1,
            Variant::Permissive => 0,
        }
    }

    #[inline]
    pub const fn max_magnitude(self) -> u16 {
        MAX_MAGNITUDE
    }

    /// Whether zero (`N`) is a valid magnitude.
    #[inline]
    pub const fn allows_zero(self) -> bool {
        matches!(self, Variant::Permissive)
    }

    /// Whether negative inputs and differences fold to their absolute value.
    #[inline]
    pub const fn folds_negative(self) -> bool {
        matches!(self, Variant::Permissive)
    }

    #[inline]
    pub const fn absent_operands(self) -> AbsentOperands {
        match self {
            Variant::Strict => AbsentOperands::Fail,
            Variant::Permissive => AbsentOperands::CompareFalse,
        }
    }

    /// Check whether a (folded) magnitude is representable.
    #[inline]
    pub const fn contains(self, magnitude: u64) -> bool {
        magnitude >= self.min_magnitude() as u64 && magnitude <= self.max_magnitude() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_of() {
        assert_eq!(Variant::of::<false>(), Variant::Strict);
        assert_eq!(Variant::of::<true>(), Variant::Permissive);
        assert_eq!(Variant::default(), Variant::Strict);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Variant::Strict.min_magnitude(), 1);
        assert_eq!(Variant::Permissive.min_magnitude(), 0);
        assert_eq!(Variant::Strict.max_magnitude(), 3999);

        assert!(!Variant::Strict.contains(0));
        assert!(Variant::Permissive.contains(0));
        assert!(Variant::Strict.contains(3999));
        assert!(!Variant::Permissive.contains(4000));
    }

    #[test]
    fn test_policies() {
        assert!(!Variant::Strict.allows_zero());
        assert!(Variant::Permissive.folds_negative());
        assert_eq!(Variant::Strict.absent_operands(), AbsentOperands::Fail);
        assert_eq!(
            Variant::Permissive.absent_operands(),
            AbsentOperands::CompareFalse
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_variant_serde() {
        let json = serde_json::to_string(&Variant::Permissive).unwrap();
        assert_eq!(json, "\"Permissive\"");
        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Variant::Permissive);
    }
}
