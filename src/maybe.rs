//! Maybe type - an optional value without null.
//!
//! This module provides the `Maybe<T>` type, which represents a value that is
//! either present (`Some`) or absent (`None`). Unlike a nullable reference,
//! absence is a first-class case of the type and must be handled explicitly:
//!
//! - A `Some` can never exist without a payload
//! - `None` carries no payload and compares equal to every other `None`
//! - Combinators (`map`, `bind`, `filter`, `fold`) transform the value
//!   without manual unwrapping
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::maybe::Maybe;
//!
//! let present: Maybe<i32> = Maybe::Some(42);
//! let absent: Maybe<i32> = Maybe::None;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Some(n) => println!("Got value: {}", n),
//!     Maybe::None => println!("Nothing here"),
//! }
//!
//! // Using fold to handle both cases
//! let description = absent.fold(
//!     |n| format!("Value: {}", n),
//!     || "absent".to_string(),
//! );
//! assert_eq!(description, "absent");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// An optional value: either `Some(T)` or `None`.
///
/// `Maybe<T>` makes "value may be absent" explicit and checkable in the type
/// system. The `None` variant is declared first so that the derived ordering
/// places `None` before any `Some(_)`.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use sumtypes::maybe::Maybe;
///
/// let value: Maybe<i32> = Maybe::Some(21);
/// let doubled = value.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Some(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The absent case. Carries no payload.
    None,
    /// The present case, wrapping a value of type `T`.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// assert!(present.is_some());
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert!(!absent.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert!(absent.is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the wrapped value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is a `None` value. Check `is_some` first or use
    /// [`into_option`](Self::into_option) for a non-panicking probe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// assert_eq!(present.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Converts the maybe into a standard `Option`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// assert_eq!(present.into_option(), Some(42));
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns a reference to the wrapped value as an `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let text: Maybe<String> = Maybe::Some("hello".to_string());
    /// let length: Maybe<usize> = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Some(5));
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the wrapped value or the supplied alternative.
    ///
    /// The alternative is eagerly evaluated; prefer
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive to build.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// assert_eq!(present.unwrap_or(0), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, alternative: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => alternative,
        }
    }

    /// Returns the wrapped value or computes an alternative.
    ///
    /// The factory is invoked only on `None`; on `Some` it is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// let value = present.unwrap_or_else(|| unreachable!("factory must not run"));
    /// assert_eq!(value, 42);
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => factory(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the wrapped value if present.
    ///
    /// `Some(x)` becomes `Some(function(x))`; `None` stays `None` and the
    /// function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(21);
    /// assert_eq!(present.map(|x| x * 2), Maybe::Some(42));
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.map(|x| x * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Monadic bind: applies a maybe-returning function and flattens the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::None }
    /// }
    ///
    /// assert_eq!(Maybe::Some(8).bind(half), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(3).bind(half), Maybe::None);
    /// assert_eq!(Maybe::None.bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => binder(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the wrapped value only if it satisfies the predicate.
    ///
    /// `Some(x)` survives iff `predicate(&x)` is true; otherwise the result
    /// is `None`. `None` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let is_even = |x: &i32| x % 2 == 0;
    /// assert_eq!(Maybe::Some(4).filter(is_even), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(3).filter(is_even), Maybe::None);
    /// assert_eq!(Maybe::None.filter(is_even), Maybe::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the maybe by applying one of two functions.
    ///
    /// This is a total match: exactly one branch is invoked, and the maybe is
    /// consumed without being mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// let text = present.fold(|x| x.to_string(), || "none".to_string());
    /// assert_eq!(text, "42");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Boolean-Algebra Combinators
    // =========================================================================

    /// Returns `other` if this is `Some`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let first: Maybe<i32> = Maybe::Some(1);
    /// let second: Maybe<&str> = Maybe::Some("two");
    /// assert_eq!(first.and(second), Maybe::Some("two"));
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.and(second), Maybe::None);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns this maybe if it is `Some`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(1);
    /// assert_eq!(present.or(Maybe::Some(2)), Maybe::Some(1));
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.or(Maybe::Some(2)), Maybe::Some(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Returns whichever of the two is `Some` when exactly one is, otherwise
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Some(1);
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(present.xor(absent), Maybe::Some(1));
    /// assert_eq!(absent.xor(present), Maybe::Some(1));
    /// assert_eq!(present.xor(Maybe::Some(2)), Maybe::None);
    /// assert_eq!(absent.xor(Maybe::None), Maybe::None);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) => Self::Some(value),
            (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Inspection Hooks
    // =========================================================================

    /// Invokes exactly one of the two hooks for the active case and returns
    /// the maybe unchanged for fluent chaining.
    #[inline]
    pub fn inspect<S, N>(self, on_some: S, on_none: N) -> Self
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match &self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
        self
    }

    /// Invokes the hook with the wrapped value if present, returning the
    /// maybe unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let mut seen = None;
    /// let present: Maybe<i32> = Maybe::Some(42);
    /// let unchanged = present.inspect_some(|x| seen = Some(*x));
    /// assert_eq!(unchanged, Maybe::Some(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn inspect_some<S>(self, on_some: S) -> Self
    where
        S: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            on_some(value);
        }
        self
    }

    /// Invokes the hook if this is `None`, returning the maybe unchanged.
    #[inline]
    pub fn inspect_none<N>(self, on_none: N) -> Self
    where
        N: FnOnce(),
    {
        if self.is_none() {
            on_none();
        }
        self
    }

    /// Invokes the hook regardless of the active case, returning the maybe
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
    // Payload Comparison
    // =========================================================================

    /// Returns `true` if this is a `Some` wrapping a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// assert!(Maybe::Some(5).contains(&5));
    /// assert!(!Maybe::Some(5).contains(&6));
    /// assert!(!Maybe::<i32>::None.contains(&5));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Some(wrapped) if wrapped == value)
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the wrapped value or the type's default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let nested: Maybe<Maybe<i32>> = Maybe::Some(Maybe::Some(42));
    /// assert_eq!(nested.flatten(), Maybe::Some(42));
    ///
    /// let inner_none: Maybe<Maybe<i32>> = Maybe::Some(Maybe::None);
    /// assert_eq!(inner_none.flatten(), Maybe::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Default, Hash, Debug, Display
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default maybe is `None`, with no bound on `T`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// None hashes to a fixed sentinel byte; Some prefixes the payload hash with a
// distinct byte so that `Some(x)` and a bare `x` stream differently.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::None => state.write_u8(0),
            Self::Some(value) => {
                state.write_u8(1);
                value.hash(state);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => value.fmt(formatter),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Payload Equality
// =============================================================================

impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    /// A maybe equals a raw value iff it is `Some` of an equal payload.
    #[inline]
    fn eq(&self, other: &T) -> bool {
        matches!(self, Self::Some(value) if value == other)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<T> for Maybe<T> {
    /// Wraps a raw value as `Some`.
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts a standard `Option`, preserving the case.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the wrapped value if present, otherwise nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::maybe::Maybe;
    ///
    /// let collected: Vec<i32> = Maybe::Some(42).into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    ///
    /// let empty: Vec<i32> = Maybe::<i32>::None.into_iter().collect();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
