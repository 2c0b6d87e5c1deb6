//! Iterator projections over sum-type elements.
//!
//! Extension traits that project iterators of sum-type values down to the
//! payloads of one case, skipping the others while preserving source order,
//! plus helpers that fold an iterator into a [`Maybe`] (`first_or_none`,
//! `last_or_none`, `single_or_none`). All adapters are lazy: nothing is
//! consumed until the returned iterator is driven.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::iter::MaybeIterator;
//! use sumtypes::maybe::Maybe;
//!
//! let source = vec![
//!     Maybe::Some(1),
//!     Maybe::None,
//!     Maybe::Some(2),
//!     Maybe::None,
//!     Maybe::Some(3),
//! ];
//! let values: Vec<i32> = source.into_iter().values().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::{Outcome, Status};

// =============================================================================
// Projections over Maybe Elements
// =============================================================================

/// Projections for iterators of [`Maybe`] values.
pub trait MaybeIterator<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Yields the payloads of `Some` elements, skipping `None`, preserving
    /// source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::iter::MaybeIterator;
    /// use sumtypes::maybe::Maybe;
    ///
    /// let source = [Maybe::Some(1), Maybe::None, Maybe::Some(2)];
    /// let values: Vec<i32> = source.into_iter().values().collect();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    #[inline]
    fn values(self) -> impl Iterator<Item = T> {
        self.filter_map(Maybe::into_option)
    }
}

impl<T, I> MaybeIterator<T> for I where I: Iterator<Item = Maybe<T>> {}

// =============================================================================
// Projections over Either Elements
// =============================================================================

/// Projections for iterators of [`Either`] values.
pub trait EitherIterator<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// Yields only the `Left` payloads, preserving source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::either::Either;
    /// use sumtypes::iter::EitherIterator;
    ///
    /// let source: Vec<Either<i32, &str>> =
    ///     vec![Either::Left(1), Either::Right("skip"), Either::Left(2)];
    /// let lefts: Vec<i32> = source.into_iter().left_values().collect();
    /// assert_eq!(lefts, vec![1, 2]);
    /// ```
    #[inline]
    fn left_values(self) -> impl Iterator<Item = L> {
        self.filter_map(Either::left)
    }

    /// Yields only the `Right` payloads, preserving source order.
    #[inline]
    fn right_values(self) -> impl Iterator<Item = R> {
        self.filter_map(Either::right)
    }
}

impl<L, R, I> EitherIterator<L, R> for I where I: Iterator<Item = Either<L, R>> {}

// =============================================================================
// Projections over Outcome and Status Elements
// =============================================================================

/// Projections for iterators of [`Outcome`] values.
pub trait OutcomeIterator<T, F>: Iterator<Item = Outcome<T, F>> + Sized {
    /// Yields the payloads of `Success` elements, skipping failures,
    /// preserving source order.
    #[inline]
    fn successes(self) -> impl Iterator<Item = T> {
        self.filter_map(Outcome::value)
    }

    /// Yields the reasons of `Failure` elements, skipping successes,
    /// preserving source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::iter::OutcomeIterator;
    /// use sumtypes::outcome::Outcome;
    ///
    /// let source: Vec<Outcome<i32, &str>> =
    ///     vec![Outcome::Success(1), Outcome::Failure("a"), Outcome::Failure("b")];
    /// let reasons: Vec<&str> = source.into_iter().failures().collect();
    /// assert_eq!(reasons, vec!["a", "b"]);
    /// ```
    #[inline]
    fn failures(self) -> impl Iterator<Item = F> {
        self.filter_map(Outcome::failure)
    }
}

impl<T, F, I> OutcomeIterator<T, F> for I where I: Iterator<Item = Outcome<T, F>> {}

/// Projections for iterators of [`Status`] values.
pub trait StatusIterator<F>: Iterator<Item = Status<F>> + Sized {
    /// Yields the reasons of `Failure` elements, skipping successes,
    /// preserving source order.
    #[inline]
    fn failures(self) -> impl Iterator<Item = F> {
        self.filter_map(Status::failure)
    }
}

impl<F, I> StatusIterator<F> for I where I: Iterator<Item = Status<F>> {}

// =============================================================================
// Folding a Sequence into a Maybe
// =============================================================================

/// Helpers that fold a sequence into a [`Maybe`].
pub trait IteratorExt: Iterator + Sized {
    /// Returns the first element as `Some`, or `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::iter::IteratorExt;
    /// use sumtypes::maybe::Maybe;
    ///
    /// assert_eq!([1, 2, 3].into_iter().first_or_none(), Maybe::Some(1));
    /// assert_eq!(std::iter::empty::<i32>().first_or_none(), Maybe::None);
    /// ```
    #[inline]
    fn first_or_none(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }

    /// Returns the first element satisfying the predicate as `Some`, or
    /// `None` when no element matches.
    #[inline]
    fn find_or_none<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    /// Returns the last element as `Some`, or `None` for an empty iterator.
    #[inline]
    fn last_or_none(self) -> Maybe<Self::Item> {
        self.last().into()
    }

    /// Returns the last element satisfying the predicate as `Some`, or
    /// `None` when no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::iter::IteratorExt;
    /// use sumtypes::maybe::Maybe;
    ///
    /// let last_even = [1, 2, 3, 4, 5].into_iter().find_last_or_none(|x| x % 2 == 0);
    /// assert_eq!(last_even, Maybe::Some(4));
    /// ```
    #[inline]
    fn find_last_or_none<P>(self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(move |item| predicate(item)).last().into()
    }

    /// Returns the element at `index` as `Some`, or `None` when the iterator
    /// is shorter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::iter::IteratorExt;
    /// use sumtypes::maybe::Maybe;
    ///
    /// assert_eq!([10, 20, 30].into_iter().nth_or_none(1), Maybe::Some(20));
    /// assert_eq!([10, 20, 30].into_iter().nth_or_none(9), Maybe::None);
    /// ```
    #[inline]
    fn nth_or_none(mut self, index: usize) -> Maybe<Self::Item> {
        self.nth(index).into()
    }

    /// Returns the only element as `Some`, or `None` for an empty iterator.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields more than one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::iter::IteratorExt;
    /// use sumtypes::maybe::Maybe;
    ///
    /// assert_eq!(std::iter::once(7).single_or_none(), Maybe::Some(7));
    /// assert_eq!(std::iter::empty::<i32>().single_or_none(), Maybe::None);
    /// ```
    #[inline]
    fn single_or_none(mut self) -> Maybe<Self::Item> {
        match self.next() {
            None => Maybe::None,
            Some(first) => {
                assert!(
                    self.next().is_none(),
                    "called `single_or_none()` on an iterator with more than one element"
                );
                Maybe::Some(first)
            }
        }
    }

    /// Returns the only element satisfying the predicate as `Some`, or
    /// `None` when no element matches.
    ///
    /// # Panics
    ///
    /// Panics if more than one element satisfies the predicate.
    #[inline]
    fn find_single_or_none<P>(self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matches = self.filter(move |item| predicate(item));
        match matches.next() {
            None => Maybe::None,
            Some(first) => {
                assert!(
                    matches.next().is_none(),
                    "called `find_single_or_none()` on an iterator with more than one matching element"
                );
                Maybe::Some(first)
            }
        }
    }
}

impl<I> IteratorExt for I where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_values_preserve_source_order() {
        let source = vec![
            Maybe::Some(1),
            Maybe::None,
            Maybe::Some(2),
            Maybe::None,
            Maybe::Some(3),
        ];
        let values: Vec<i32> = source.into_iter().values().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_values_are_lazy() {
        let pulled = Cell::new(0);
        let source = (0..100).map(|n| {
            pulled.set(pulled.get() + 1);
            Maybe::Some(n)
        });
        let first_two: Vec<i32> = source.values().take(2).collect();
        assert_eq!(first_two, vec![0, 1]);
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_left_and_right_projections() {
        let source: Vec<Either<i32, char>> = vec![
            Either::Left(1),
            Either::Right('a'),
            Either::Left(2),
            Either::Right('b'),
        ];
        let lefts: Vec<i32> = source.clone().into_iter().left_values().collect();
        let rights: Vec<char> = source.into_iter().right_values().collect();
        assert_eq!(lefts, vec![1, 2]);
        assert_eq!(rights, vec!['a', 'b']);
    }

    #[rstest]
    #[should_panic(expected = "more than one element")]
    fn test_single_or_none_panics_on_two_elements() {
        let _ = [1, 2].into_iter().single_or_none();
    }

    #[rstest]
    fn test_find_or_none() {
        assert_eq!([1, 2, 3].into_iter().find_or_none(|x| x % 2 == 0), Maybe::Some(2));
        assert_eq!([1, 3].into_iter().find_or_none(|x| x % 2 == 0), Maybe::None);
    }
}
