//! Unit tests for the Status<F> and Outcome<T, F> types.
//!
//! Status is success without a payload or failure with a typed reason;
//! Outcome additionally carries a success payload. For both, `is_success`
//! and `is_failure` are complements, and failure-side combinators propagate
//! a success untouched (and vice versa).

use rstest::rstest;
use sumtypes::maybe::Maybe;
use sumtypes::outcome::{FailureDetails, FailureLevel, FailureMessage, Outcome, Status};

// =============================================================================
// Status: Construction and Probes
// =============================================================================

#[rstest]
fn status_cases_are_complements() {
    let done: Status<String> = Status::Success;
    assert!(done.is_success());
    assert!(!done.is_failure());

    let broken: Status<String> = Status::Failure("boom".to_string());
    assert!(broken.is_failure());
    assert!(!broken.is_success());
}

#[rstest]
fn status_default_is_success() {
    let status: Status<String> = Status::default();
    assert!(status.is_success());
}

#[rstest]
fn status_failure_probes() {
    let broken: Status<String> = Status::Failure("boom".to_string());
    assert_eq!(broken.failure_ref(), Some(&"boom".to_string()));
    assert_eq!(broken.failure(), Some("boom".to_string()));

    let done: Status<String> = Status::Success;
    assert_eq!(done.failure(), None);
}

#[rstest]
#[should_panic(expected = "called `Status::unwrap_failure()` on a `Success` value")]
fn status_unwrap_failure_on_success_panics() {
    let done: Status<String> = Status::Success;
    done.unwrap_failure();
}

#[rstest]
fn status_failure_or_is_lazy() {
    let broken: Status<String> = Status::Failure("boom".to_string());
    let reason = broken.failure_or_else(|| panic!("factory must not run"));
    assert_eq!(reason, "boom");

    let done: Status<String> = Status::Success;
    assert_eq!(done.failure_or("fallback".to_string()), "fallback");
}

// =============================================================================
// Status: Combinators
// =============================================================================

#[rstest]
fn status_fold_invokes_exactly_one_branch() {
    let broken: Status<String> = Status::Failure("timeout".to_string());
    let text = broken.fold(|| panic!("wrong branch"), |reason| reason);
    assert_eq!(text, "timeout");
}

#[rstest]
fn status_bind_success_propagates_failure_untouched() {
    let broken: Status<String> = Status::Failure("earlier".to_string());
    let chained = broken.bind_success(|| panic!("binder must not run"));
    assert_eq!(chained.unwrap_failure(), "earlier");
}

#[rstest]
fn status_bind_failure_propagates_success_untouched() {
    let done: Status<String> = Status::Success;
    let chained: Status<usize> = done.bind_failure(|_| panic!("binder must not run"));
    assert!(chained.is_success());
}

#[rstest]
fn status_map_failure_transforms_reason() {
    let broken: Status<String> = Status::Failure("boom".to_string());
    assert_eq!(broken.map_failure(|r| r.len()), Status::Failure(4));
}

#[rstest]
fn status_result_conversion_roundtrip() {
    let status: Status<String> = Err("boom".to_string()).into();
    assert!(status.is_failure());

    let result: Result<(), String> = status.into();
    assert_eq!(result, Err("boom".to_string()));
}

// =============================================================================
// Outcome: Construction and Probes
// =============================================================================

#[rstest]
fn outcome_cases_are_complements() {
    let found: Outcome<i32, String> = Outcome::Success(42);
    assert!(found.is_success());
    assert!(!found.is_failure());
}

#[rstest]
fn outcome_value_and_failure_probes() {
    let found: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(found.value_ref(), Some(&42));
    assert_eq!(found.value(), Some(42));

    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    assert_eq!(broken.clone().value(), None);
    assert_eq!(broken.failure(), Some("err".to_string()));
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value")]
fn outcome_unwrap_on_failure_panics() {
    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    broken.unwrap();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value")]
fn outcome_unwrap_failure_on_success_panics() {
    let found: Outcome<i32, String> = Outcome::Success(42);
    found.unwrap_failure();
}

#[rstest]
fn outcome_unwrap_alternatives() {
    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    assert_eq!(broken.unwrap_or(7), 7);

    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    assert_eq!(broken.unwrap_or_default(), 0);

    let found: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(found.unwrap_or_else(|| panic!("factory must not run")), 42);
}

// =============================================================================
// Outcome: Combinators
// =============================================================================

#[rstest]
fn outcome_map_applies_only_on_success() {
    let found: Outcome<i32, String> = Outcome::Success(21);
    assert_eq!(found.map(|x| x * 2), Outcome::Success(42));

    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    let mapped: Outcome<i32, String> = broken.map(|_| panic!("function must not run"));
    assert_eq!(mapped.unwrap_failure(), "err");
}

#[rstest]
fn outcome_bind_success_chains() {
    let checked_halve = |x: i32| {
        if x % 2 == 0 {
            Outcome::Success(x / 2)
        } else {
            Outcome::Failure("odd".to_string())
        }
    };

    assert_eq!(Outcome::Success(8).bind_success(checked_halve), Outcome::Success(4));
    assert_eq!(
        Outcome::Success(3).bind_success(checked_halve).unwrap_failure(),
        "odd"
    );

    let broken: Outcome<i32, String> = Outcome::Failure("earlier".to_string());
    assert_eq!(broken.bind_success(checked_halve).unwrap_failure(), "earlier");
}

#[rstest]
fn outcome_bind_failure_recovers() {
    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    let recovered: Outcome<i32, String> = broken.bind_failure(|_| Outcome::Success(0));
    assert_eq!(recovered, Outcome::Success(0));
}

#[rstest]
fn outcome_fold_invokes_exactly_one_branch() {
    let found: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(found.fold(|x| x.to_string(), |_| panic!("wrong branch")), "42");
}

#[rstest]
fn outcome_inspect_hooks_fire_for_active_case_only() {
    let mut seen = Vec::new();
    let found: Outcome<i32, String> = Outcome::Success(42);

    let unchanged = found
        .inspect(|x| seen.push(*x), |_| panic!("wrong hook"))
        .inspect_success(|x| seen.push(x + 1))
        .inspect_failure(|_| panic!("must not fire"));

    assert_eq!(unchanged, Outcome::Success(42));
    assert_eq!(seen, vec![42, 43]);
}

// =============================================================================
// Outcome: Flatten and Conversions
// =============================================================================

#[rstest]
fn outcome_flatten_collapses_success_nesting() {
    let nested: Outcome<Outcome<i32, String>, String> = Outcome::Success(Outcome::Success(42));
    assert_eq!(nested.flatten(), Outcome::Success(42));

    let inner_failure: Outcome<Outcome<i32, String>, String> =
        Outcome::Success(Outcome::Failure("inner".to_string()));
    assert_eq!(inner_failure.flatten().unwrap_failure(), "inner");
}

#[rstest]
fn status_flatten_collapses_failure_nesting() {
    let done: Status<Status<String>> = Status::Success;
    assert_eq!(done.flatten(), Status::Success);

    let inner_failure: Status<Status<String>> =
        Status::Failure(Status::Failure("inner".to_string()));
    assert_eq!(inner_failure.flatten().unwrap_failure(), "inner");

    let recovered: Status<Status<String>> = Status::Failure(Status::Success);
    assert!(recovered.flatten().is_success());
}

#[rstest]
fn outcome_into_maybe_discards_failure_reason() {
    let found: Outcome<i32, String> = Outcome::Success(5);
    assert_eq!(found.into_maybe(), Maybe::Some(5));

    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    assert_eq!(broken.into_maybe(), Maybe::None);
}

#[rstest]
fn outcome_into_status_keeps_verdict() {
    let found: Outcome<i32, String> = Outcome::Success(5);
    assert!(found.into_status().is_success());

    let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    assert_eq!(broken.into_status().unwrap_failure(), "err");
}

// =============================================================================
// Failure Payloads
// =============================================================================

#[rstest]
fn failure_details_render_level_and_details() {
    let failure = FailureDetails::new("disk quota exceeded");
    assert_eq!(failure.level(), FailureLevel::Error);
    assert_eq!(failure.to_string(), "[Error] disk quota exceeded");

    let warning = FailureDetails::new("cache miss").with_level(FailureLevel::Warning);
    assert_eq!(warning.to_string(), "[Warning] cache miss");
}

#[rstest]
fn failure_message_unspecified_placeholder() {
    let status = Status::failed();
    assert_eq!(
        status.unwrap_failure().to_string(),
        "[Error] Unspecified error has occurred."
    );

    let outcome: Outcome<i32, FailureMessage> = Outcome::failed();
    assert!(outcome.is_failure());
}

#[rstest]
fn outcome_display_names_the_case() {
    let found: Outcome<i32, FailureMessage> = Outcome::Success(5);
    assert_eq!(found.to_string(), "Success: 5");

    let broken: Outcome<i32, FailureMessage> = Outcome::Failure(FailureMessage::from("boom"));
    assert_eq!(broken.to_string(), "Failure: [Error] boom");
}
