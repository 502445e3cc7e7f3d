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

//! # Step Ranges
//!
//! A half-open integer range `[start, end)` walked in increments of `step`.
//! The number of values is `ceil((end - start) / step)`; a range with
//! `end <= start` or a non-positive step is empty.
//!
//! ```rust
//! use sundry_seq::range::{range, range_step};
//!
//! assert_eq!(range(4).into_iter().collect::<Vec<i32>>(), vec![0, 1, 2, 3]);
//! assert_eq!(range_step(1, 10, 4).into_iter().collect::<Vec<_>>(), vec![1, 5, 9]);
//! ```

use crate::sequence::Sequence;
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A half-open range with a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRange<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
    step: T,
}

/// Counts the values of `[start, end)` at the given step, saturating at
/// `usize::MAX`.
#[inline]
fn step_count<T>(start: T, end: T, step: T) -> usize
where
    T: PrimInt,
{
    if step <= T::zero() || end <= start {
        return 0;
    }
    let span = match end.checked_sub(&start) {
        Some(span) => span.to_u128(),
        // Only signed types land here, with a span wider than `T::MAX`. As
        // `end > start`, the two's-complement difference is the exact span.
        None => end
            .to_i128()
            .zip(start.to_i128())
            .map(|(e, s)| (e as u128).wrapping_sub(s as u128)),
    };
    match (span, step.to_u128()) {
        (Some(span), Some(step)) => usize::try_from(span.div_ceil(step)).unwrap_or(usize::MAX),
        _ => usize::MAX,
    }
}

impl<T> StepRange<T>
where
    T: PrimInt,
{
    /// Creates the range `[start, end)` walked by `step`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_seq::range::StepRange;
    /// let r = StepRange::new(10, 0, 2);
    /// assert!(r.is_empty());
    /// ```
    #[inline]
    pub fn new(start: T, end: T, step: T) -> Self {
        Self { start, end, step }
    }

    /// Returns the first value of the range, whether or not it is empty.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive upper limit.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the increment between consecutive values.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values in the range.
    #[inline]
    pub fn len(&self) -> usize {
        step_count(self.start, self.end, self.step)
    }

    /// Checks whether the range holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the values of the range.
    #[inline]
    pub fn iter(&self) -> StepRangeIter<T> {
        StepRangeIter {
            next: self.start,
            step: self.step,
            remaining: self.len(),
        }
    }
}

/// Returns `[0, end)` with a step of one.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::range::range;
/// assert_eq!(range(3u8).len(), 3);
/// assert!(range(-3i32).is_empty());
/// ```
#[inline]
pub fn range<T>(end: T) -> StepRange<T>
where
    T: PrimInt,
{
    StepRange::new(T::zero(), end, T::one())
}

/// Returns `[start, end)` walked by `step`.
#[inline]
pub fn range_step<T>(start: T, end: T, step: T) -> StepRange<T>
where
    T: PrimInt,
{
    StepRange::new(start, end, step)
}

/// The iterator behind [`StepRange`].
#[derive(Debug, Clone)]
pub struct StepRangeIter<T>
where
    T: PrimInt,
{
    next: T,
    step: T,
    remaining: usize,
}

impl<T> Iterator for StepRangeIter<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = self.next + self.step;
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for StepRangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for StepRangeIter<T> where T: PrimInt {}

impl<T> IntoIterator for StepRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = StepRangeIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &StepRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = StepRangeIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Sequence for StepRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type Iter<'a>
        = StepRangeIter<T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        StepRange::iter(self)
    }
}
