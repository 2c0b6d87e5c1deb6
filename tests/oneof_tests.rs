//! Unit tests for the OneOf family of N-ary unions.
//!
//! OneOf, OneOf3 and OneOf4 are tagged unions of two to four alternatives
//! with positional cases and no success/failure convention. Each position
//! exposes the same accessor family: a discriminator probe, `Option` probes
//! by value and by reference, and a panicking unwrap.

use rstest::rstest;
use std::hash::{DefaultHasher, Hash, Hasher};
use sumtypes::oneof::{OneOf, OneOf3, OneOf4};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Case Exclusivity
// =============================================================================

#[rstest]
fn oneof_exactly_one_case_is_active() {
    let value: OneOf<i32, String> = OneOf::First(7);
    assert!(value.is_first());
    assert!(!value.is_second());
}

#[rstest]
fn oneof4_exactly_one_case_is_active() {
    let value: OneOf4<i32, f64, String, bool> = OneOf4::Third("x".to_string());
    assert!(!value.is_first());
    assert!(!value.is_second());
    assert!(value.is_third());
    assert!(!value.is_fourth());
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn oneof_option_probes() {
    let value: OneOf<i32, String> = OneOf::Second("hello".to_string());
    assert_eq!(value.second_ref(), Some(&"hello".to_string()));
    assert_eq!(value.first_ref(), None);
    assert_eq!(value.second(), Some("hello".to_string()));
}

#[rstest]
fn oneof_unwrap_returns_active_payload() {
    let value: OneOf3<i32, f64, String> = OneOf3::Second(2.5);
    assert_eq!(value.unwrap_second(), 2.5);
}

#[rstest]
#[should_panic(expected = "called `OneOf::unwrap_first()` on another case")]
fn oneof_wrong_case_unwrap_panics() {
    let value: OneOf<i32, String> = OneOf::Second("hello".to_string());
    value.unwrap_first();
}

#[rstest]
#[should_panic(expected = "called `OneOf4::unwrap_fourth()` on another case")]
fn oneof4_wrong_case_unwrap_panics() {
    let value: OneOf4<i32, f64, String, bool> = OneOf4::First(1);
    value.unwrap_fourth();
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn oneof_fold_invokes_exactly_one_branch() {
    let value: OneOf<i32, String> = OneOf::First(21);
    assert_eq!(value.fold(|n| n * 2, |_| panic!("wrong branch")), 42);
}

#[rstest]
#[case(OneOf3::First(1), "int 1")]
#[case(OneOf3::Second(2.5), "float 2.5")]
#[case(OneOf3::Third("hi".to_string()), "text hi")]
fn oneof3_fold_dispatches_on_case(#[case] input: OneOf3<i32, f64, String>, #[case] expected: &str) {
    let rendered = input.fold(
        |n| format!("int {n}"),
        |f| format!("float {f}"),
        |s| format!("text {s}"),
    );
    assert_eq!(rendered, expected);
}

#[rstest]
fn oneof4_fold_invokes_exactly_one_branch() {
    let value: OneOf4<i32, f64, String, bool> = OneOf4::Fourth(true);
    assert_eq!(value.fold(|_| 1, |_| 2, |_| 3, |_| 4), 4);
}

// =============================================================================
// Equality, Hashing and Display
// =============================================================================

#[rstest]
fn oneof_equality_requires_same_case() {
    let first: OneOf<i32, i32> = OneOf::First(9);
    let second: OneOf<i32, i32> = OneOf::Second(9);
    assert_ne!(first, second);
    assert_eq!(first, OneOf::First(9));
}

#[rstest]
fn oneof_hashes_differ_across_cases_with_same_payload() {
    let first: OneOf<i32, i32> = OneOf::First(9);
    let second: OneOf<i32, i32> = OneOf::Second(9);
    assert_ne!(hash_of(&first), hash_of(&second));
}

#[rstest]
fn oneof3_hashes_differ_across_all_cases() {
    let first: OneOf3<u8, u8, u8> = OneOf3::First(5);
    let second: OneOf3<u8, u8, u8> = OneOf3::Second(5);
    let third: OneOf3<u8, u8, u8> = OneOf3::Third(5);
    assert_ne!(hash_of(&first), hash_of(&second));
    assert_ne!(hash_of(&second), hash_of(&third));
    assert_ne!(hash_of(&first), hash_of(&third));
}

#[rstest]
fn oneof_display_renders_payload_only() {
    let value: OneOf<i32, String> = OneOf::First(42);
    assert_eq!(value.to_string(), "42");

    let value: OneOf4<i32, f64, String, bool> = OneOf4::Third("hello".to_string());
    assert_eq!(value.to_string(), "hello");
}
