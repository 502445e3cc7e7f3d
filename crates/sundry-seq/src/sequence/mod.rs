// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Restartable Sequences
//!
//! The [`Sequence`] trait describes a recipe for an iterator rather than the
//! iterator itself. Calling [`Sequence::iter`] twice yields two independent
//! walks from the beginning, which lets combinators such as [`Sequence::map`]
//! or [`adapters::zip_all`] be built once and consumed repeatedly.
//!
//! ## Submodules
//!
//! - [`adapters`]: `Map`, `Filter`, `Zip`, `ZipAll` and `Prepend`.
//! - [`consume`]: `take`, `take_all`, `first` and `any` over plain iterators.
//!
//! ## Sources
//!
//! - [`from_vec`] replays an owned vector.
//! - [`from_fn`] calls a closure for every restart.
//! - [`natural_numbers`] counts `1, 2, 3, ...` without end.
//!
//! Any shared reference to a sequence is itself a sequence, so a pipeline may
//! borrow its sources instead of owning them.
//!
//! ```rust
//! use sundry_seq::sequence::{Sequence, from_vec, natural_numbers, consume::take};
//!
//! let squares = natural_numbers().map(|n| n * n);
//! assert_eq!(take(&mut squares.iter(), 4), vec![1, 4, 9, 16]);
//! assert_eq!(take(&mut squares.iter(), 2), vec![1, 4]);
//!
//! let tagged = from_vec(vec!['a', 'b']).zip(natural_numbers());
//! assert_eq!(tagged.iter().collect::<Vec<_>>(), vec![('a', 1), ('b', 2)]);
//! ```

pub mod adapters;
pub mod consume;

use adapters::{Filter, Map, Prepend, Zip};
use std::iter::Cloned;
use std::ops::RangeFrom;
use std::slice;

/// A factory of single-pass iterators over the same values.
///
/// Implementations must return an iterator positioned at the first element on
/// every call to [`iter`](Sequence::iter); the sequence itself is never
/// advanced.
pub trait Sequence {
    /// The type of the values produced.
    type Item;

    /// The iterator handed out by [`iter`](Sequence::iter).
    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a fresh walk over the sequence.
    fn iter(&self) -> Self::Iter<'_>;

    /// Applies `f` to every value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_seq::sequence::{Sequence, from_vec};
    /// let doubled = from_vec(vec![1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    /// ```
    #[inline]
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Keeps only the values for which `pred` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_seq::sequence::{Sequence, natural_numbers, consume::take};
    /// let evens = natural_numbers().filter(|n| n % 2 == 0);
    /// assert_eq!(take(&mut evens.iter(), 3), vec![2, 4, 6]);
    /// ```
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Pairs values with those of `other`, stopping at the shorter of the two.
    #[inline]
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Sequence,
    {
        Zip::new(self, other)
    }

    /// Yields `values` before the values of this sequence, on every walk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_seq::sequence::{Sequence, from_vec};
    /// let seq = from_vec(vec![3, 4]).prepend([1, 2]);
    /// assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    fn prepend<I>(self, values: I) -> Prepend<Self>
    where
        Self: Sized,
        Self::Item: Clone,
        I: IntoIterator<Item = Self::Item>,
    {
        Prepend::new(self, values)
    }
}

impl<S> Sequence for &S
where
    S: Sequence,
{
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

/// A sequence that replays the elements of an owned vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FromVec<T> {
    items: Vec<T>,
}

impl<T> FromVec<T> {
    /// Returns the underlying elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the sequence into its vector.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Sequence for FromVec<T>
where
    T: Clone,
{
    type Item = T;
    type Iter<'a>
        = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}

/// Wraps `items` as a restartable sequence.
#[inline]
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T>
where
    T: Clone,
{
    FromVec { items }
}

/// A sequence whose walks are produced by calling a closure.
///
/// The closure runs once per call to [`Sequence::iter`]; it must return an
/// equivalent iterator each time for the result to behave as a sequence.
#[derive(Clone)]
pub struct FromFn<F> {
    make: F,
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Iter<'a>
        = I::IntoIter
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (self.make)().into_iter()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Builds a sequence from an iterator factory.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::{Sequence, from_fn};
/// let countdown = from_fn(|| (1..=3).rev());
/// assert_eq!(countdown.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(countdown.iter().count(), 3);
/// ```
#[inline]
pub fn from_fn<F, I>(make: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { make }
}

/// The infinite sequence `1, 2, 3, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaturalNumbers;

impl Sequence for NaturalNumbers {
    type Item = u64;
    type Iter<'a> = RangeFrom<u64>;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        1..
    }
}

/// Returns the sequence of positive integers.
#[inline]
pub fn natural_numbers() -> NaturalNumbers {
    NaturalNumbers
}
