//! Deferred combinators over future-wrapped sum types.
//!
//! Each trait here extends a `Future` resolving to one of the crate's sum
//! types with `*_async` counterparts of the synchronous combinators. The
//! combinator awaits the single wrapped value and then applies the identical
//! synchronous logic - no new concurrency semantics are introduced, and a
//! panicked or cancelled upstream future propagates untouched.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::future::MaybeFuture;
//! use sumtypes::maybe::Maybe;
//!
//! # futures::executor::block_on(async {
//! let deferred = async { Maybe::Some(21) };
//! let doubled = deferred.map_async(|x| x * 2).await;
//! assert_eq!(doubled, Maybe::Some(42));
//! # });
//! ```

use std::future::Future;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::{Outcome, Status};

// =============================================================================
// Deferred Maybe Combinators
// =============================================================================

/// Deferred counterparts of the [`Maybe`] combinators.
#[allow(async_fn_in_trait)]
pub trait MaybeFuture<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits the maybe and eliminates it by applying one of two functions.
    #[inline]
    async fn fold_async<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        self.await.fold(on_some, on_none)
    }

    /// Awaits the maybe and applies a function to the wrapped value if
    /// present.
    #[inline]
    async fn map_async<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map(function)
    }

    /// Awaits the maybe and applies a maybe-returning function, flattening
    /// the result.
    #[inline]
    async fn bind_async<U, F>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.await.bind(binder)
    }

    /// Awaits the maybe and keeps the value only if it satisfies the
    /// predicate.
    #[inline]
    async fn filter_async<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.await.filter(predicate)
    }

    /// Awaits the maybe and returns the value or computes an alternative.
    #[inline]
    async fn unwrap_or_else_async<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(factory)
    }

    /// Awaits the maybe, invokes the hook for the active case and returns
    /// the maybe unchanged.
    #[inline]
    async fn inspect_async<S, N>(self, on_some: S, on_none: N) -> Maybe<T>
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        self.await.inspect(on_some, on_none)
    }

    /// Awaits the maybe, invokes the hook with the wrapped value if present
    /// and returns the maybe unchanged.
    #[inline]
    async fn inspect_some_async<S>(self, on_some: S) -> Maybe<T>
    where
        S: FnOnce(&T),
    {
        self.await.inspect_some(on_some)
    }

    /// Awaits the maybe, invokes the hook on `None` and returns the maybe
    /// unchanged.
    #[inline]
    async fn inspect_none_async<N>(self, on_none: N) -> Maybe<T>
    where
        N: FnOnce(),
    {
        self.await.inspect_none(on_none)
    }
}

impl<T, F> MaybeFuture<T> for F where F: Future<Output = Maybe<T>> {}

// =============================================================================
// Deferred Either Combinators
// =============================================================================

/// Deferred counterparts of the [`Either`] combinators.
#[allow(async_fn_in_trait)]
pub trait EitherFuture<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Awaits the either and eliminates it by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    /// use sumtypes::future::EitherFuture;
    ///
    /// # futures::executor::block_on(async {
    /// let deferred = async { Either::<i32, String>::Left(42) };
    /// let text = deferred.fold_async(|n| n.to_string(), |s| s).await;
    /// assert_eq!(text, "42");
    /// # });
    /// ```
    #[inline]
    async fn fold_async<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.await.fold(left_function, right_function)
    }

    /// Awaits the either and maps the left value if present.
    #[inline]
    async fn map_left_async<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.await.map_left(function)
    }

    /// Awaits the either and maps the right value if present.
    #[inline]
    async fn map_right_async<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.await.map_right(function)
    }

    /// Awaits the either and maps both sides componentwise, keeping the
    /// active case.
    #[inline]
    async fn bimap_async<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        self.await.bimap(left_function, right_function)
    }

    /// Awaits the either and transforms the active case into a new either.
    #[inline]
    async fn bind_async<T, U, F, G>(self, left_binder: F, right_binder: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        self.await.bind(left_binder, right_binder)
    }

    /// Awaits the either and transforms the left case, passing a right
    /// through untouched.
    #[inline]
    async fn bind_left_async<T, F>(self, left_binder: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        self.await.bind_left(left_binder)
    }

    /// Awaits the either and transforms the right case, passing a left
    /// through untouched.
    #[inline]
    async fn bind_right_async<T, G>(self, right_binder: G) -> Either<L, T>
    where
        G: FnOnce(R) -> Either<L, T>,
    {
        self.await.bind_right(right_binder)
    }

    /// Awaits the either, invokes the hook for the active case and returns
    /// the either unchanged.
    #[inline]
    async fn inspect_async<F, G>(self, on_left: F, on_right: G) -> Either<L, R>
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        self.await.inspect(on_left, on_right)
    }

    /// Awaits the either, invokes the hook with the left value if present
    /// and returns the either unchanged.
    #[inline]
    async fn inspect_left_async<F>(self, on_left: F) -> Either<L, R>
    where
        F: FnOnce(&L),
    {
        self.await.inspect_left(on_left)
    }

    /// Awaits the either, invokes the hook with the right value if present
    /// and returns the either unchanged.
    #[inline]
    async fn inspect_right_async<G>(self, on_right: G) -> Either<L, R>
    where
        G: FnOnce(&R),
    {
        self.await.inspect_right(on_right)
    }
}

impl<L, R, F> EitherFuture<L, R> for F where F: Future<Output = Either<L, R>> {}

// =============================================================================
// Deferred Outcome and Status Combinators
// =============================================================================

/// Deferred counterparts of the [`Outcome`] combinators.
#[allow(async_fn_in_trait)]
pub trait OutcomeFuture<T, F>: Future<Output = Outcome<T, F>> + Sized {
    /// Awaits the outcome and eliminates it by applying one of two functions.
    #[inline]
    async fn fold_async<U, S, G>(self, on_success: S, on_failure: G) -> U
    where
        S: FnOnce(T) -> U,
        G: FnOnce(F) -> U,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Awaits the outcome and maps the payload if present.
    #[inline]
    async fn map_async<U, S>(self, function: S) -> Outcome<U, F>
    where
        S: FnOnce(T) -> U,
    {
        self.await.map(function)
    }

    /// Awaits the outcome and maps the failure reason if present.
    #[inline]
    async fn map_failure_async<G, B>(self, function: B) -> Outcome<T, G>
    where
        B: FnOnce(F) -> G,
    {
        self.await.map_failure(function)
    }

    /// Awaits the outcome and returns the payload or computes an
    /// alternative.
    #[inline]
    async fn unwrap_or_else_async<S>(self, factory: S) -> T
    where
        S: FnOnce() -> T,
    {
        self.await.unwrap_or_else(factory)
    }

    /// Awaits the outcome and transforms the success case, propagating a
    /// failure untouched.
    #[inline]
    async fn bind_success_async<U, S>(self, success_binder: S) -> Outcome<U, F>
    where
        S: FnOnce(T) -> Outcome<U, F>,
    {
        self.await.bind_success(success_binder)
    }

    /// Awaits the outcome and transforms the failure case, propagating a
    /// success untouched.
    #[inline]
    async fn bind_failure_async<G, B>(self, failure_binder: B) -> Outcome<T, G>
    where
        B: FnOnce(F) -> Outcome<T, G>,
    {
        self.await.bind_failure(failure_binder)
    }

    /// Awaits the outcome, invokes the hook for the active case and returns
    /// the outcome unchanged.
    #[inline]
    async fn inspect_async<S, G>(self, on_success: S, on_failure: G) -> Outcome<T, F>
    where
        S: FnOnce(&T),
        G: FnOnce(&F),
    {
        self.await.inspect(on_success, on_failure)
    }

    /// Awaits the outcome, invokes the hook with the payload if present and
    /// returns the outcome unchanged.
    #[inline]
    async fn inspect_success_async<S>(self, on_success: S) -> Outcome<T, F>
    where
        S: FnOnce(&T),
    {
        self.await.inspect_success(on_success)
    }

    /// Awaits the outcome, invokes the hook with the failure reason if
    /// present and returns the outcome unchanged.
    #[inline]
    async fn inspect_failure_async<G>(self, on_failure: G) -> Outcome<T, F>
    where
        G: FnOnce(&F),
    {
        self.await.inspect_failure(on_failure)
    }

    /// Awaits the outcome and converts it into a [`Maybe`], discarding the
    /// failure reason.
    #[inline]
    async fn into_maybe_async(self) -> Maybe<T> {
        self.await.into_maybe()
    }
}

impl<T, F, Fut> OutcomeFuture<T, F> for Fut where Fut: Future<Output = Outcome<T, F>> {}

/// Deferred counterparts of the [`Status`] combinators.
#[allow(async_fn_in_trait)]
pub trait StatusFuture<F>: Future<Output = Status<F>> + Sized {
    /// Awaits the status and eliminates it by applying one of two functions.
    #[inline]
    async fn fold_async<U, S, G>(self, on_success: S, on_failure: G) -> U
    where
        S: FnOnce() -> U,
        G: FnOnce(F) -> U,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Awaits the status and transforms the success case, propagating a
    /// failure untouched.
    #[inline]
    async fn bind_success_async<S>(self, success_binder: S) -> Status<F>
    where
        S: FnOnce() -> Status<F>,
    {
        self.await.bind_success(success_binder)
    }

    /// Awaits the status and transforms the failure case, propagating a
    /// success untouched.
    #[inline]
    async fn bind_failure_async<G, B>(self, failure_binder: B) -> Status<G>
    where
        B: FnOnce(F) -> Status<G>,
    {
        self.await.bind_failure(failure_binder)
    }

    /// Awaits the status and maps the failure reason if present.
    #[inline]
    async fn map_failure_async<G, B>(self, function: B) -> Status<G>
    where
        B: FnOnce(F) -> G,
    {
        self.await.map_failure(function)
    }

    /// Awaits the status, invokes the hook for the active case and returns
    /// the status unchanged.
    #[inline]
    async fn inspect_async<S, G>(self, on_success: S, on_failure: G) -> Status<F>
    where
        S: FnOnce(),
        G: FnOnce(&F),
    {
        self.await.inspect(on_success, on_failure)
    }

    /// Awaits the status, invokes the hook on success and returns the status
    /// unchanged.
    #[inline]
    async fn inspect_success_async<S>(self, on_success: S) -> Status<F>
    where
        S: FnOnce(),
    {
        self.await.inspect_success(on_success)
    }

    /// Awaits the status, invokes the hook with the failure reason if present
    /// and returns the status unchanged.
    #[inline]
    async fn inspect_failure_async<G>(self, on_failure: G) -> Status<F>
    where
        G: FnOnce(&F),
    {
        self.await.inspect_failure(on_failure)
    }
}

impl<F, Fut> StatusFuture<F> for Fut where Fut: Future<Output = Status<F>> {}
