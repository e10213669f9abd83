// ============================================================================
// Roman Numeral Library
// Bounded Roman numeral value type with checked arithmetic
// ============================================================================

//! # Roman Numeral
//!
//! A bounded value type for Roman numerals over 1-3999.
//!
//! ## Features
//!
//! - **Bidirectional conversion** between integers and canonical symbols
//! - **Checked arithmetic** that never leaves the representable range
//! - **Two policies**: strict (1-3999) and permissive (adds `N` for zero and
//!   folds negative magnitudes)
//! - **Allocation-free encoding** into a fixed 16-byte buffer
//!
//! ## Example
//!
//! ```rust
//! use roman_numeral::prelude::*;
//!
//! let year: StrictNumeral = "mcmxciv".parse().unwrap();
//! assert_eq!(year.to_integer(), 1994);
//! assert_eq!(year.to_string(), "MCMXCIV");
//!
//! let sum = (year + StrictNumeral::from_integer(30).unwrap()).unwrap();
//! assert_eq!(sum.to_string(), "MMXXIV");
//!
//! // Results that leave 1-3999 are errors, not panics
//! assert!(StrictNumeral::MAX.checked_add(StrictNumeral::ONE).is_err());
//!
//! // Absent operands are reported by name
//! let err = operands::add(None, Some(&sum)).unwrap_err();
//! assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'a')");
//! ```

pub mod numeral;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeral::operands;
    pub use crate::numeral::{
        AbsentOperands, FormatError, Numeral, NumeralError, NumeralResult, Operand,
        PermissiveNumeral, RangeError, StrictNumeral, Variant,
    };
}


#[cfg(test)]
mod property_tests {
    use super::numeral::MAX_SYMBOLS;
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn round_trip(value in 1i64..=3999) {
            let numeral = StrictNumeral::from_integer(value).unwrap();
            let parsed: StrictNumeral = numeral.to_string().parse().unwrap();
            prop_assert_eq!(parsed.to_integer(), value);
        }

        #[test]
        fn lowercase_parses_to_same_value(value in 1i64..=3999) {
            let numeral = StrictNumeral::from_integer(value).unwrap();
            let lower = numeral.to_string().to_lowercase();
            prop_assert_eq!(lower.parse::<StrictNumeral>().unwrap(), numeral);
        }

        #[test]
        fn canonical_form_prefers_subtractive_pairs(value in 1i64..=3999) {
            let symbols = StrictNumeral::from_integer(value).unwrap().to_string();
            for run in ["IIII", "XXXX", "CCCC", "VV", "LL", "DD"] {
                prop_assert!(!symbols.contains(run), "{} contains {}", symbols, run);
            }
            prop_assert!(symbols.len() <= MAX_SYMBOLS);
        }

        #[test]
        fn ordering_is_total(a in 1i64..=3999, b in 1i64..=3999) {
            let x = StrictNumeral::from_integer(a).unwrap();
            let y = StrictNumeral::from_integer(b).unwrap();
            let holding = [x < y, x == y, x > y].iter().filter(|h| **h).count();
            prop_assert_eq!(holding, 1);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn checked_add_matches_integer_sum(a in 1i64..=3999, b in 1i64..=3999) {
            let x = StrictNumeral::from_integer(a).unwrap();
            let y = StrictNumeral::from_integer(b).unwrap();
            let result = x.checked_add(y);
            if a + b <= 3999 {
                prop_assert_eq!(result.unwrap().to_integer(), a + b);
            } else {
                prop_assert_eq!(result, Err(NumeralError::OutOfRange(RangeError::ResultTooLarge)));
            }
        }

        #[test]
        fn checked_sub_stays_positive(a in 1i64..=3999, b in 1i64..=3999) {
            let x = StrictNumeral::from_integer(a).unwrap();
            let y = StrictNumeral::from_integer(b).unwrap();
            match x.checked_sub(y) {
                Ok(diff) => prop_assert_eq!(diff.to_integer(), a - b),
                Err(err) => {
                    prop_assert!(a <= b);
                    prop_assert_eq!(err, NumeralError::OutOfRange(RangeError::ResultNotPositive));
                },
            }
        }

        #[test]
        fn rejects_out_of_range(value in prop_oneof![i64::MIN..=0i64, 4000i64..=i64::MAX]) {
            prop_assert!(StrictNumeral::from_integer(value).is_err());
        }

        #[test]
        fn permissive_folds_negatives(value in -3999i64..=3999) {
            let numeral = PermissiveNumeral::from_integer(value).unwrap();
            prop_assert_eq!(numeral.to_integer(), value.abs());
        }
    }

    quickcheck! {
        fn equal_magnitudes_hash_identically(raw: u16) -> bool {
            let value = i64::from(raw % 3999 + 1);
            let built = StrictNumeral::from_integer(value).unwrap();
            let parsed: StrictNumeral = built.to_string().parse().unwrap();
            built == parsed && hash_of(&built) == hash_of(&parsed)
        }

        fn copies_are_independent_but_equal(raw: u16) -> bool {
            let value = i64::from(raw % 3999 + 1);
            let original = StrictNumeral::from_integer(value).unwrap();
            let copy = StrictNumeral::from_numeral(&original);
            copy == original && hash_of(&copy) == hash_of(&original)
        }
    }
}
