//! Property-based tests for the Maybe<T> contract.
//!
//! This module verifies:
//!
//! - **Functor laws**: `map` with identity is a no-op and composes
//! - **Monad laws**: `bind` satisfies left/right identity and associativity
//! - **Filter contract**: the survivor always satisfies the predicate
//! - **Equality/hash contract**: equal values hash equal, `None` is a fixed
//!   point, and ordering places `None` before any `Some`

use proptest::prelude::*;
use std::hash::{DefaultHasher, Hash, Hasher};
use sumtypes::maybe::Maybe;

fn maybe_of(value: Option<i32>) -> Maybe<i32> {
    value.into()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    /// Mapping with the identity function is a no-op
    #[test]
    fn prop_map_identity_law(value in any::<Option<i32>>()) {
        let maybe = maybe_of(value);
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    /// Mapping composes: map(f).map(g) equals map(g . f)
    #[test]
    fn prop_map_composition_law(value in any::<Option<i32>>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(3);
        let maybe = maybe_of(value);
        prop_assert_eq!(maybe.map(f).map(g), maybe.map(|x| g(f(x))));
    }

    /// Left identity: wrapping then binding equals applying directly
    #[test]
    fn prop_bind_left_identity_law(value in any::<i32>()) {
        let f = |x: i32| if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::None };
        prop_assert_eq!(Maybe::Some(value).bind(f), f(value));
    }

    /// Right identity: binding with the constructor is a no-op
    #[test]
    fn prop_bind_right_identity_law(value in any::<Option<i32>>()) {
        let maybe = maybe_of(value);
        prop_assert_eq!(maybe.bind(Maybe::Some), maybe);
    }

    /// Associativity: nesting order of binds does not matter
    #[test]
    fn prop_bind_associativity_law(value in any::<Option<i32>>()) {
        let f = |x: i32| if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::None };
        let g = |x: i32| Maybe::Some(x.wrapping_mul(3));
        let maybe = maybe_of(value);
        prop_assert_eq!(maybe.bind(f).bind(g), maybe.bind(|x| f(x).bind(g)));
    }

    /// A filter survivor always satisfies the predicate
    #[test]
    fn prop_filter_agrees_with_predicate(value in any::<Option<i32>>()) {
        let is_positive = |x: &i32| *x > 0;
        let filtered = maybe_of(value).filter(is_positive);
        match filtered {
            Maybe::Some(x) => prop_assert!(x > 0),
            Maybe::None => prop_assert!(value.is_none() || value.is_some_and(|x| x <= 0)),
        }
    }

    /// Folding with the case constructors reconstructs the original
    #[test]
    fn prop_fold_reconstruction(value in any::<Option<i32>>()) {
        let maybe = maybe_of(value);
        prop_assert_eq!(maybe.fold(Maybe::Some, || Maybe::None), maybe);
    }

    /// Equal values are interchangeable: equality implies equal hashes
    #[test]
    fn prop_equal_values_hash_equal(value in any::<Option<i32>>()) {
        let first = maybe_of(value);
        let second = maybe_of(value);
        prop_assert_eq!(first, second);
        prop_assert_eq!(hash_of(&first), hash_of(&second));
    }

    /// None orders strictly before any Some
    #[test]
    fn prop_none_orders_before_some(value in any::<i32>()) {
        prop_assert!(Maybe::None < Maybe::Some(value));
    }

    /// Ordering of Some values agrees with payload ordering
    #[test]
    fn prop_some_ordering_agrees_with_payload(left in any::<i32>(), right in any::<i32>()) {
        prop_assert_eq!(
            Maybe::Some(left).cmp(&Maybe::Some(right)),
            left.cmp(&right)
        );
    }
}
