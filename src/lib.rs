//! # sumtypes
//!
//! Algebraic sum types for Rust: optional values, disjoint unions,
//! success/failure outcomes, and small N-ary unions with fluent combinators.
//!
//! ## Overview
//!
//! Every type in this crate is an immutable value type with exactly one case
//! active at a time and value-based equality:
//!
//! - **[`Maybe<T>`](maybe::Maybe)**: a value that is present or absent
//! - **[`Either<L, R>`](either::Either)**: exactly one of two typed alternatives
//! - **[`Status<F>`](outcome::Status)** / **[`Outcome<T, F>`](outcome::Outcome)**:
//!   success (optionally with a payload) or failure with a typed reason
//! - **[`OneOf`](oneof::OneOf)** / **[`OneOf3`](oneof::OneOf3)** /
//!   **[`OneOf4`](oneof::OneOf4)**: exactly one of up to four alternatives
//!
//! On top of the types sit the combinator algebra (`fold`, `map`, `bind`,
//! `filter`, `and`/`or`/`xor`, inspection hooks), iterator projections
//! ([`iter`]) and deferred future-wrapped counterparts ([`future`], feature
//! `async`).
//!
//! ## Feature Flags
//!
//! - `serde`: serialization of every sum type as active-case tag plus payload
//! - `async`: deferred combinators over future-wrapped values
//! - `full`: enable all of the above
//!
//! ## Example
//!
//! ```rust
//! use sumtypes::prelude::*;
//!
//! let port: Maybe<u16> = "8080".parse().ok().into();
//! let bounded = port.filter(|p| *p > 1024).unwrap_or(8000);
//! assert_eq!(bounded, 8080);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sum types and the iterator/future extension traits.
///
/// # Usage
///
/// ```rust
/// use sumtypes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::iter::{EitherIterator, IteratorExt, MaybeIterator, OutcomeIterator, StatusIterator};
    pub use crate::maybe::Maybe;
    pub use crate::oneof::{OneOf, OneOf3, OneOf4};
    pub use crate::outcome::{FailureDetails, FailureLevel, FailureMessage, Outcome, Status};

    #[cfg(feature = "async")]
    pub use crate::future::{EitherFuture, MaybeFuture, OutcomeFuture, StatusFuture};
}

pub mod either;
pub mod iter;
pub mod maybe;
pub mod oneof;
pub mod outcome;

#[cfg(feature = "async")]
pub mod future;
