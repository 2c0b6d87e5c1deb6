//! Success/failure types with typed failure reasons.
//!
//! This module provides two closely related sum types:
//!
//! - [`Status<F>`]: success carrying no payload, or failure carrying a reason
//! - [`Outcome<T, F>`]: success carrying a payload, or failure carrying a reason
//!
//! Both uphold the same contract: exactly one case is active, `is_success`
//! and `is_failure` are complements, and the combinator algebra (`fold`,
//! `bind`, `map`, inspection hooks) never silently drops a case. The
//! conventional failure-reason type is [`FailureMessage`], a severity-leveled
//! text payload.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::outcome::{Outcome, FailureMessage};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, FailureMessage> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::Success(port),
//!         Err(_) => Outcome::Failure(FailureMessage::from("not a port number")),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert!(parse_port("eighty").is_failure());
//! ```

mod failure;

pub use failure::{FailureDetails, FailureLevel, FailureMessage};

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::maybe::Maybe;

// =============================================================================
// Status<F>
// =============================================================================

/// Success without a payload, or failure carrying a reason of type `F`.
///
/// # Examples
///
/// ```rust
/// use sumtypes::outcome::Status;
///
/// let done: Status<String> = Status::Success;
/// assert!(done.is_success());
///
/// let broken: Status<String> = Status::Failure("db unreachable".to_string());
/// assert_eq!(broken.unwrap_failure(), "db unreachable");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status<F> {
    /// The operation succeeded.
    Success,
    /// The operation failed for the wrapped reason.
    Failure(F),
}

impl<F> Status<F> {
    /// Returns `true` if this is a `Success`.
    ///
    /// `is_success` and [`is_failure`](Self::is_failure) are complements.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts into an `Option` of the failure reason, consuming the status.
    #[inline]
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Success => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Returns a reference to the failure reason if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Success => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Returns the failure reason, consuming the status.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Success => panic!("called `Status::unwrap_failure()` on a `Success` value"),
            Self::Failure(reason) => reason,
        }
    }

    /// Returns the failure reason or the supplied alternative.
    #[inline]
    pub fn failure_or(self, alternative: F) -> F {
        self.failure_or_else(|| alternative)
    }

    /// Returns the failure reason or computes an alternative.
    ///
    /// The factory runs only on `Success`.
    #[inline]
    pub fn failure_or_else<G>(self, factory: G) -> F
    where
        G: FnOnce() -> F,
    {
        match self {
            Self::Success => factory(),
            Self::Failure(reason) => reason,
        }
    }

    /// Eliminates the status by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Status;
    ///
    /// let broken: Status<String> = Status::Failure("timeout".to_string());
    /// let text = broken.fold(|| "ok".to_string(), |reason| reason);
    /// assert_eq!(text, "timeout");
    /// ```
    #[inline]
    pub fn fold<U, S, G>(self, on_success: S, on_failure: G) -> U
    where
        S: FnOnce() -> U,
        G: FnOnce(F) -> U,
    {
        match self {
            Self::Success => on_success(),
            Self::Failure(reason) => on_failure(reason),
        }
    }

    /// Transforms whichever case is active into a new status.
    #[inline]
    pub fn bind<G, S, B>(self, success_binder: S, failure_binder: B) -> Status<G>
    where
        S: FnOnce() -> Status<G>,
        B: FnOnce(F) -> Status<G>,
    {
        match self {
            Self::Success => success_binder(),
            Self::Failure(reason) => failure_binder(reason),
        }
    }

    /// Transforms the success case into a new status, propagating a failure
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Status;
    ///
    /// let done: Status<String> = Status::Success;
    /// let next = done.bind_success(|| Status::Failure("second step failed".to_string()));
    /// assert!(next.is_failure());
    /// ```
    #[inline]
    pub fn bind_success<S>(self, success_binder: S) -> Self
    where
        S: FnOnce() -> Self,
    {
        match self {
            Self::Success => success_binder(),
            Self::Failure(reason) => Self::Failure(reason),
        }
    }

    /// Transforms the failure case into a new status, propagating a success
    /// untouched.
    #[inline]
    pub fn bind_failure<G, B>(self, failure_binder: B) -> Status<G>
    where
        B: FnOnce(F) -> Status<G>,
    {
        match self {
            Self::Success => Status::Success,
            Self::Failure(reason) => failure_binder(reason),
        }
    }

    /// Applies a function to the failure reason if present.
    #[inline]
    pub fn map_failure<G, B>(self, function: B) -> Status<G>
    where
        B: FnOnce(F) -> G,
    {
        match self {
            Self::Success => Status::Success,
            Self::Failure(reason) => Status::Failure(function(reason)),
        }
    }

    /// Invokes exactly one of the two hooks for the active case and returns
    /// the status unchanged.
    #[inline]
    pub fn inspect<S, G>(self, on_success: S, on_failure: G) -> Self
    where
        S: FnOnce(),
        G: FnOnce(&F),
    {
        match &self {
            Self::Success => on_success(),
            Self::Failure(reason) => on_failure(reason),
        }
        self
    }

    /// Invokes the hook on success, returning the status unchanged.
    #[inline]
    pub fn inspect_success<S>(self, on_success: S) -> Self
    where
        S: FnOnce(),
    {
        if self.is_success() {
            on_success();
        }
        self
    }

    /// Invokes the hook with the failure reason if present, returning the
    /// status unchanged.
    #[inline]
    pub fn inspect_failure<G>(self, on_failure: G) -> Self
    where
        G: FnOnce(&F),
    {
        if let Self::Failure(reason) = &self {
            on_failure(reason);
        }
        self
    }

    /// Invokes the hook regardless of the active case, returning the status
    /// unchanged.
    #[inline]
    pub fn inspect_both<H>(self, hook: H) -> Self
    where
        H: FnOnce(),
    {
        hook();
        self
    }
}

impl<F: Default> Status<F> {
    /// Returns the failure reason, or `F`'s default on success.
    #[inline]
    pub fn failure_or_default(self) -> F {
        self.failure_or_else(F::default)
    }
}

impl Status<FailureMessage> {
    /// Builds a failure carrying the unspecified placeholder message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Status;
    ///
    /// let status = Status::failed();
    /// assert!(status.is_failure());
    /// ```
    #[inline]
    pub fn failed() -> Self {
        Self::Failure(FailureMessage::unspecified())
    }
}

impl<F> Default for Status<F> {
    /// The default status is `Success`, with no bound on `F`.
    #[inline]
    fn default() -> Self {
        Self::Success
    }
}

impl<F: Hash> Hash for Status<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Success => state.write_u8(0),
            Self::Failure(reason) => {
                state.write_u8(1);
                reason.hash(state);
            }
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for Status<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("Success"),
            Self::Failure(reason) => formatter.debug_tuple("Failure").field(reason).finish(),
        }
    }
}

impl<F: fmt::Display> fmt::Display for Status<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("Success"),
            Self::Failure(reason) => write!(formatter, "Failure: {reason}"),
        }
    }
}

impl<F> From<Result<(), F>> for Status<F> {
    #[inline]
    fn from(result: Result<(), F>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(reason) => Self::Failure(reason),
        }
    }
}

impl<F> From<Status<F>> for Result<(), F> {
    #[inline]
    fn from(status: Status<F>) -> Self {
        match status {
            Status::Success => Ok(()),
            Status::Failure(reason) => Err(reason),
        }
    }
}

// =============================================================================
// Outcome<T, F>
// =============================================================================

/// Success carrying a payload of type `T`, or failure carrying a reason of
/// type `F`.
///
/// # Examples
///
/// ```rust
/// use sumtypes::outcome::Outcome;
///
/// let found: Outcome<i32, String> = Outcome::Success(42);
/// let doubled = found.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, F> {
    /// The operation succeeded with the wrapped payload.
    Success(T),
    /// The operation failed for the wrapped reason.
    Failure(F),
}

impl<T, F> Outcome<T, F> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// `is_success` and [`is_failure`](Self::is_failure) are complements.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option` of the payload, consuming the outcome.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the payload if present.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the failure reason, consuming the
    /// outcome.
    #[inline]
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Returns a reference to the failure reason if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Returns the payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. Check `is_success` first or use
    /// [`value`](Self::value) for a non-panicking probe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Outcome;
    ///
    /// let found: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(found.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(_) => panic!("called `Outcome::unwrap()` on a `Failure` value"),
        }
    }

    /// Returns the failure reason, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(reason) => reason,
        }
    }

    /// Returns the payload or the supplied alternative.
    #[inline]
    pub fn unwrap_or(self, alternative: T) -> T {
        self.unwrap_or_else(|| alternative)
    }

    /// Returns the payload or computes an alternative.
    ///
    /// The factory runs only on `Failure`.
    #[inline]
    pub fn unwrap_or_else<S>(self, factory: S) -> T
    where
        S: FnOnce() -> T,
    {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(_) => factory(),
        }
    }

    /// Returns the failure reason or the supplied alternative.
    #[inline]
    pub fn failure_or(self, alternative: F) -> F {
        self.failure_or_else(|| alternative)
    }

    /// Returns the failure reason or computes an alternative.
    #[inline]
    pub fn failure_or_else<G>(self, factory: G) -> F
    where
        G: FnOnce() -> F,
    {
        match self {
            Self::Success(_) => factory(),
            Self::Failure(reason) => reason,
        }
    }

    // =========================================================================
    // Mapping and Fold Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// A `Failure` passes through untouched and the function is never
    /// invoked.
    #[inline]
    pub fn map<U, S>(self, function: S) -> Outcome<U, F>
    where
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(payload) => Outcome::Success(function(payload)),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Applies a function to the failure reason if present.
    #[inline]
    pub fn map_failure<G, B>(self, function: B) -> Outcome<T, G>
    where
        B: FnOnce(F) -> G,
    {
        match self {
            Self::Success(payload) => Outcome::Success(payload),
            Self::Failure(reason) => Outcome::Failure(function(reason)),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Outcome;
    ///
    /// let found: Outcome<i32, String> = Outcome::Success(42);
    /// let text = found.fold(|x| x.to_string(), |reason| reason);
    /// assert_eq!(text, "42");
    /// ```
    #[inline]
    pub fn fold<U, S, G>(self, on_success: S, on_failure: G) -> U
    where
        S: FnOnce(T) -> U,
        G: FnOnce(F) -> U,
    {
        match self {
            Self::Success(payload) => on_success(payload),
            Self::Failure(reason) => on_failure(reason),
        }
    }

    // =========================================================================
    // Binding Operations
    // =========================================================================

    /// Transforms whichever case is active into a new outcome.
    #[inline]
    pub fn bind<U, G, S, B>(self, success_binder: S, failure_binder: B) -> Outcome<U, G>
    where
        S: FnOnce(T) -> Outcome<U, G>,
        B: FnOnce(F) -> Outcome<U, G>,
    {
        match self {
            Self::Success(payload) => success_binder(payload),
            Self::Failure(reason) => failure_binder(reason),
        }
    }

    /// Transforms the success case into a new outcome, propagating a failure
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Outcome;
    ///
    /// fn checked_halve(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 {
    ///         Outcome::Success(x / 2)
    ///     } else {
    ///         Outcome::Failure("odd".to_string())
    ///     }
    /// }
    ///
    /// let chained = Outcome::Success(8).bind_success(checked_halve);
    /// assert_eq!(chained, Outcome::Success(4));
    ///
    /// let failed: Outcome<i32, String> = Outcome::Failure("earlier".to_string());
    /// assert_eq!(failed.bind_success(checked_halve).unwrap_failure(), "earlier");
    /// ```
    #[inline]
    pub fn bind_success<U, S>(self, success_binder: S) -> Outcome<U, F>
    where
        S: FnOnce(T) -> Outcome<U, F>,
    {
        match self {
            Self::Success(payload) => success_binder(payload),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Transforms the failure case into a new outcome, propagating a success
    /// untouched.
    #[inline]
    pub fn bind_failure<G, B>(self, failure_binder: B) -> Outcome<T, G>
    where
        B: FnOnce(F) -> Outcome<T, G>,
    {
        match self {
            Self::Success(payload) => Outcome::Success(payload),
            Self::Failure(reason) => failure_binder(reason),
        }
    }

    // =========================================================================
    // Inspection Hooks
    // =========================================================================

    /// Invokes exactly one of the two hooks for the active case and returns
    /// the outcome unchanged.
    #[inline]
    pub fn inspect<S, G>(self, on_success: S, on_failure: G) -> Self
    where
        S: FnOnce(&T),
        G: FnOnce(&F),
    {
        match &self {
            Self::Success(payload) => on_success(payload),
            Self::Failure(reason) => on_failure(reason),
        }
        self
    }

    /// Invokes the hook with the payload if present, returning the outcome
    /// unchanged.
    #[inline]
    pub fn inspect_success<S>(self, on_success: S) -> Self
    where
        S: FnOnce(&T),
    {
        if let Self::Success(payload) = &self {
            on_success(payload);
        }
        self
    }

    /// Invokes the hook with the failure reason if present, returning the
    /// outcome unchanged.
    #[inline]
    pub fn inspect_failure<G>(self, on_failure: G) -> Self
    where
        G: FnOnce(&F),
    {
        if let Self::Failure(reason) = &self {
            on_failure(reason);
        }
        self
    }

    /// Invokes the hook regardless of the active case, returning the outcome
    /// unchanged.
    #[inline]
    pub fn inspect_both<H>(self, hook: H) -> Self
    where
        H: FnOnce(),
    {
        hook();
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`], discarding the failure reason.
    ///
    /// Success becomes `Some(payload)`; failure becomes `None`. The reason is
    /// intentionally dropped in this direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    /// use sumtypes::outcome::Outcome;
    ///
    /// let found: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(found.into_maybe(), Maybe::Some(5));
    ///
    /// let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
    /// assert_eq!(broken.into_maybe(), Maybe::None);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(payload) => Maybe::Some(payload),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Discards the payload, keeping only the success/failure verdict.
    #[inline]
    pub fn into_status(self) -> Status<F> {
        match self {
            Self::Success(_) => Status::Success,
            Self::Failure(reason) => Status::Failure(reason),
        }
    }
}

impl<T: Default, F> Outcome<T, F> {
    /// Returns the payload, or `T`'s default on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T, F: Default> Outcome<T, F> {
    /// Returns the failure reason, or `F`'s default on success.
    #[inline]
    pub fn failure_or_default(self) -> F {
        self.failure_or_else(F::default)
    }
}

impl<T> Outcome<T, FailureMessage> {
    /// Builds a failure carrying the unspecified placeholder message.
    #[inline]
    pub fn failed() -> Self {
        Self::Failure(FailureMessage::unspecified())
    }
}

// =============================================================================
// Flatten Operations
// =============================================================================

impl<T, F> Outcome<Outcome<T, F>, F> {
    /// Collapses one level of success-side nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, String>, String> =
    ///     Outcome::Success(Outcome::Success(42));
    /// assert_eq!(nested.flatten(), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, F> {
        self.bind_success(|inner| inner)
    }
}

impl<F> Status<Status<F>> {
    /// Collapses one level of failure-side nesting.
    ///
    /// An outer `Success` stays `Success`; an outer `Failure` yields the
    /// nested status, whichever case it holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::Status;
    ///
    /// let nested: Status<Status<String>> = Status::Failure(Status::Failure("inner".to_string()));
    /// assert_eq!(nested.flatten().unwrap_failure(), "inner");
    ///
    /// let recovered: Status<Status<String>> = Status::Failure(Status::Success);
    /// assert!(recovered.flatten().is_success());
    /// ```
    #[inline]
    pub fn flatten(self) -> Status<F> {
        match self {
            Self::Success => Status::Success,
            Self::Failure(inner) => inner,
        }
    }
}

// =============================================================================
// Hash, Debug, Display
// =============================================================================

impl<T: Hash, F: Hash> Hash for Outcome<T, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Success(payload) => {
                state.write_u8(0);
                payload.hash(state);
            }
            Self::Failure(reason) => {
                state.write_u8(1);
                reason.hash(state);
            }
        }
    }
}

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for Outcome<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(payload) => formatter.debug_tuple("Success").field(payload).finish(),
            Self::Failure(reason) => formatter.debug_tuple("Failure").field(reason).finish(),
        }
    }
}

impl<T: fmt::Display, F: fmt::Display> fmt::Display for Outcome<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(payload) => write!(formatter, "Success: {payload}"),
            Self::Failure(reason) => write!(formatter, "Failure: {reason}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
    #[inline]
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(reason) => Self::Failure(reason),
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Result<T, F> {
    #[inline]
    fn from(outcome: Outcome<T, F>) -> Self {
        match outcome {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure(reason) => Err(reason),
        }
    }
}

static_assertions::assert_impl_all!(Status<String>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<i32, u8>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_cases_are_complements() {
        let success: Outcome<i32, String> = Outcome::Success(1);
        assert!(success.is_success());
        assert!(!success.is_failure());

        let failure: Status<String> = Status::Failure("boom".to_string());
        assert!(failure.is_failure());
        assert!(!failure.is_success());
    }

    #[rstest]
    fn test_into_maybe_discards_reason() {
        let found: Outcome<i32, String> = Outcome::Success(5);
        assert_eq!(found.into_maybe(), Maybe::Some(5));

        let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
        assert_eq!(broken.into_maybe(), Maybe::None);
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value")]
    fn test_unwrap_failure_case_panics() {
        let broken: Outcome<i32, String> = Outcome::Failure("err".to_string());
        broken.unwrap();
    }

    #[rstest]
    fn test_status_flatten() {
        let nested: Status<Status<String>> =
            Status::Failure(Status::Failure("inner".to_string()));
        assert_eq!(nested.flatten().unwrap_failure(), "inner");
    }
}
