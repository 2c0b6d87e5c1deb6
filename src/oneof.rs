//! Small N-ary unions - exactly one of N typed alternatives.
//!
//! This module provides [`OneOf<A, B>`], [`OneOf3<A, B, C>`] and
//! [`OneOf4<A, B, C, D>`]: tagged unions of two, three and four alternatives
//! with no success/failure semantics implied and no empty case. The cases are
//! positional (`First`, `Second`, ...), and each position gets the same
//! accessor family: a `const` discriminator probe, consuming and borrowing
//! `Option` probes, and a panicking unwrap.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::oneof::OneOf3;
//!
//! let input: OneOf3<i32, f64, String> = OneOf3::Second(2.5);
//! let rendered = input.fold(
//!     |n| format!("int {}", n),
//!     |f| format!("float {}", f),
//!     |s| format!("text {}", s),
//! );
//! assert_eq!(rendered, "float 2.5");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

// Generates the per-position accessor family. `$owner` is only used for the
// panic message, `$case` is the variant and `$name` the positional word.
macro_rules! oneof_accessors {
    ($owner:ident, $case:ident, $name:ident, $payload:ident) => {
        paste::paste! {
            #[doc = concat!("Returns `true` if this is the `", stringify!($case), "` case.")]
            #[inline]
            pub const fn [<is_ $name>](&self) -> bool {
                matches!(self, Self::$case(_))
            }

            #[doc = concat!(
                "Converts into an `Option` of the `", stringify!($case),
                "` payload, consuming the union."
            )]
            #[inline]
            pub fn $name(self) -> Option<$payload> {
                match self {
                    Self::$case(value) => Some(value),
                    _ => None,
                }
            }

            #[doc = concat!(
                "Returns a reference to the `", stringify!($case), "` payload if active."
            )]
            #[inline]
            pub const fn [<$name _ref>](&self) -> Option<&$payload> {
                match self {
                    Self::$case(value) => Some(value),
                    _ => None,
                }
            }

            #[doc = concat!("Returns the `", stringify!($case), "` payload, consuming the union.")]
            ///
            /// # Panics
            ///
            /// Panics if another case is active.
            #[inline]
            pub fn [<unwrap_ $name>](self) -> $payload {
                match self {
                    Self::$case(value) => value,
                    _ => panic!(concat!(
                        "called `", stringify!($owner), "::unwrap_", stringify!($name),
                        "()` on another case"
                    )),
                }
            }
        }
    };
}

// Discriminant byte first, payload second, mirroring the Either contract.
macro_rules! oneof_hash {
    ($self:expr, $state:expr, { $($index:literal => $case:ident),+ $(,)? }) => {
        match $self {
            $(
                Self::$case(value) => {
                    $state.write_u8($index);
                    value.hash($state);
                }
            )+
        }
    };
}

// =============================================================================
// OneOf<A, B>
// =============================================================================

/// Exactly one of two typed alternatives, with no case semantics implied.
///
/// Unlike [`Either`](crate::either::Either), the positions carry no
/// error/success convention and the accessor family is positional.
///
/// # Examples
///
/// ```rust
/// use sumtypes::oneof::OneOf;
///
/// let id: OneOf<u64, String> = OneOf::First(7);
/// assert!(id.is_first());
/// assert_eq!(id.first(), Some(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OneOf<A, B> {
    /// The first alternative.
    First(A),
    /// The second alternative.
    Second(B),
}

impl<A, B> OneOf<A, B> {
    oneof_accessors!(OneOf, First, first, A);
    oneof_accessors!(OneOf, Second, second, B);

    /// Eliminates the union by applying the function for the active case.
    ///
    /// Exactly one of the two functions is invoked.
    #[inline]
    pub fn fold<U, F1, F2>(self, on_first: F1, on_second: F2) -> U
    where
        F1: FnOnce(A) -> U,
        F2: FnOnce(B) -> U,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
        }
    }
}

impl<A: Hash, B: Hash> Hash for OneOf<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        oneof_hash!(self, state, { 0 => First, 1 => Second });
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for OneOf<A, B> {
    /// Renders the active payload without a case prefix.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(value) => value.fmt(formatter),
            Self::Second(value) => value.fmt(formatter),
        }
    }
}

// =============================================================================
// OneOf3<A, B, C>
// =============================================================================

/// Exactly one of three typed alternatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OneOf3<A, B, C> {
    /// The first alternative.
    First(A),
    /// The second alternative.
    Second(B),
    /// The third alternative.
    Third(C),
}

impl<A, B, C> OneOf3<A, B, C> {
    oneof_accessors!(OneOf3, First, first, A);
    oneof_accessors!(OneOf3, Second, second, B);
    oneof_accessors!(OneOf3, Third, third, C);

    /// Eliminates the union by applying the function for the active case.
    ///
    /// Exactly one of the three functions is invoked.
    #[inline]
    pub fn fold<U, F1, F2, F3>(self, on_first: F1, on_second: F2, on_third: F3) -> U
    where
        F1: FnOnce(A) -> U,
        F2: FnOnce(B) -> U,
        F3: FnOnce(C) -> U,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
            Self::Third(value) => on_third(value),
        }
    }
}

impl<A: Hash, B: Hash, C: Hash> Hash for OneOf3<A, B, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        oneof_hash!(self, state, { 0 => First, 1 => Second, 2 => Third });
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for OneOf3<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(value) => value.fmt(formatter),
            Self::Second(value) => value.fmt(formatter),
            Self::Third(value) => value.fmt(formatter),
        }
    }
}

// =============================================================================
// OneOf4<A, B, C, D>
// =============================================================================

/// Exactly one of four typed alternatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OneOf4<A, B, C, D> {
    /// The first alternative.
    First(A),
    /// The second alternative.
    Second(B),
    /// The third alternative.
    Third(C),
    /// The fourth alternative.
    Fourth(D),
}

impl<A, B, C, D> OneOf4<A, B, C, D> {
    oneof_accessors!(OneOf4, First, first, A);
    oneof_accessors!(OneOf4, Second, second, B);
    oneof_accessors!(OneOf4, Third, third, C);
    oneof_accessors!(OneOf4, Fourth, fourth, D);

    /// Eliminates the union by applying the function for the active case.
    ///
    /// Exactly one of the four functions is invoked.
    #[inline]
    pub fn fold<U, F1, F2, F3, F4>(
        self,
        on_first: F1,
        on_second: F2,
        on_third: F3,
        on_fourth: F4,
    ) -> U
    where
        F1: FnOnce(A) -> U,
        F2: FnOnce(B) -> U,
        F3: FnOnce(C) -> U,
        F4: FnOnce(D) -> U,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
            Self::Third(value) => on_third(value),
            Self::Fourth(value) => on_fourth(value),
        }
    }
}

impl<A: Hash, B: Hash, C: Hash, D: Hash> Hash for OneOf4<A, B, C, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        oneof_hash!(self, state, { 0 => First, 1 => Second, 2 => Third, 3 => Fourth });
    }
}

impl<A, B, C, D> fmt::Display for OneOf4<A, B, C, D>
where
    A: fmt::Display,
    B: fmt::Display,
    C: fmt::Display,
    D: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(value) => value.fmt(formatter),
            Self::Second(value) => value.fmt(formatter),
            Self::Third(value) => value.fmt(formatter),
            Self::Fourth(value) => value.fmt(formatter),
        }
    }
}

static_assertions::assert_impl_all!(OneOf<i32, u8>: Send, Sync, Copy);
static_assertions::assert_impl_all!(OneOf4<i32, u8, u16, u32>: Send, Sync, Copy);
