//! Either type - a value that is exactly one of two typed alternatives.
//!
//! This module provides the `Either<L, R>` type, a two-case disjoint union.
//! Unlike a success/failure pair, neither side carries error semantics: the
//! cases are peers. Common uses:
//!
//! - Branching computations that produce one of two shapes
//! - Carrying one of two configurations through a pipeline
//! - Error handling by convention (`Left` for errors, `Right` for success)
//!
//! Earlier designs of this family allowed an uninitialized "neither" state
//! reachable through default construction. Here the two-case discipline is
//! enforced by the type system: an `Either` cannot exist without being
//! `Left` or `Right`, and `Default` is deliberately not implemented.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::either::Either;
//!
//! let number: Either<i32, String> = Either::Left(42);
//! let text: Either<i32, String> = Either::Right("hello".to_string());
//!
//! let rendered = number.fold(
//!     |n| format!("number {}", n),
//!     |s| format!("text {}", s),
//! );
//! assert_eq!(rendered, "number 42");
//! # let _ = text;
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that is exactly one of two typed alternatives.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use sumtypes::either::Either;
///
/// let value: Either<i32, String> = Either::Left(21);
/// assert_eq!(value.map_left(|x| x * 2), Either::Left(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// Exactly one of `is_left` and `is_right` is true for any instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.unwrap_left(), 42);
    /// ```
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value or the supplied alternative.
    #[inline]
    pub fn unwrap_left_or(self, alternative: L) -> L {
        self.unwrap_left_or_else(|| alternative)
    }

    /// Returns the left value or computes an alternative.
    ///
    /// The factory runs only when this is a `Right`.
    #[inline]
    pub fn unwrap_left_or_else<F>(self, factory: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => factory(),
        }
    }

    /// Returns the right value or the supplied alternative.
    #[inline]
    pub fn unwrap_right_or(self, alternative: R) -> R {
        self.unwrap_right_or_else(|| alternative)
    }

    /// Returns the right value or computes an alternative.
    ///
    /// The factory runs only when this is a `Left`.
    #[inline]
    pub fn unwrap_right_or_else<F>(self, factory: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => factory(),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the active case, keeping the
    /// case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    ///
    /// This is a total match over exactly two cases: precisely one function
    /// is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Binding Operations
    // =========================================================================

    /// Transforms whichever case is active into a new either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(3);
    /// let bound: Either<String, usize> = value.bind(
    ///     |n| Either::Left(n.to_string()),
    ///     |s| Either::Right(s.len()),
    /// );
    /// assert_eq!(bound, Either::Left("3".to_string()));
    /// ```
    #[inline]
    pub fn bind<T, U, F, G>(self, left_binder: F, right_binder: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(value) => left_binder(value),
            Self::Right(value) => right_binder(value),
        }
    }

    /// Transforms the left case into a new either, passing a `Right` through
    /// untouched.
    #[inline]
    pub fn bind_left<T, F>(self, left_binder: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => left_binder(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right case into a new either, passing a `Left` through
    /// untouched.
    #[inline]
    pub fn bind_right<T, F>(self, right_binder: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => right_binder(value),
        }
    }

    // =========================================================================
    // Inspection Hooks
    // =========================================================================

    /// Invokes exactly one of the two hooks for the active case and returns
    /// the either unchanged for fluent chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let mut log = Vec::new();
    /// let value: Either<i32, String> = Either::Left(42);
    /// let unchanged = value.inspect(|n| log.push(*n), |_| unreachable!());
    /// assert_eq!(unchanged, Either::Left(42));
    /// assert_eq!(log, vec![42]);
    /// ```
    #[inline]
    pub fn inspect<F, G>(self, on_left: F, on_right: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
        self
    }

    /// Invokes the hook with the left value if present, returning the either
    /// unchanged.
    #[inline]
    pub fn inspect_left<F>(self, on_left: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            on_left(value);
        }
        self
    }

    /// Invokes the hook with the right value if present, returning the either
    /// unchanged.
    #[inline]
    pub fn inspect_right<G>(self, on_right: G) -> Self
    where
        G: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            on_right(value);
        }
        self
    }

    /// Invokes the hook regardless of the active case, returning the either
    /// unchanged.
    #[inline]
    pub fn inspect_both<F>(self, hook: F) -> Self
    where
        F: FnOnce(),
    {
        hook();
        self
    }

    // =========================================================================
    // Swap and Conversion Operations
    // =========================================================================

    /// Swaps the `Left` and `Right` cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L`'s default if this is a `Right`.
    #[inline]
    pub fn unwrap_left_or_default(self) -> L {
        self.unwrap_left_or_else(L::default)
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R`'s default if this is a `Left`.
    #[inline]
    pub fn unwrap_right_or_default(self) -> R {
        self.unwrap_right_or_else(R::default)
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Collapses one level of left-side nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    ///
    /// let nested: Either<Either<i32, String>, String> = Either::Left(Either::Left(42));
    /// assert_eq!(nested.flatten(), Either::Left(42));
    ///
    /// let outer_right: Either<Either<i32, String>, String> =
    ///     Either::Right("hello".to_string());
    /// assert_eq!(outer_right.flatten(), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Either::Right(value),
        }
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

// The discriminant byte is hashed before the payload so that Left(x) and
// Right(x) never stream identically for the same x.
impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Left(value) => {
                state.write_u8(0);
                value.hash(state);
            }
            Self::Right(value) => {
                state.write_u8(1);
                value.hash(state);
            }
        }
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left: {value}"),
            Self::Right(value) => write!(formatter, "Right: {value}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result`: `Ok(r)` becomes `Right(r)`, `Err(e)` becomes
    /// `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either`: `Right(r)` becomes `Ok(r)`, `Left(l)` becomes
    /// `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<i32, u8>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_case_exclusivity() {
        let left: Either<i32, String> = Either::Left(42);
        assert!(left.is_left());
        assert!(!left.is_right());

        let right: Either<i32, String> = Either::Right("hello".to_string());
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[rstest]
    fn test_hashes_differ_across_cases() {
        let left: Either<&str, &str> = Either::Left("x");
        let right: Either<&str, &str> = Either::Right("x");
        assert_ne!(hash_of(&left), hash_of(&right));
    }

    #[rstest]
    #[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
    fn test_unwrap_left_on_right_panics() {
        let right: Either<i32, String> = Either::Right("hello".to_string());
        right.unwrap_left();
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }
}
