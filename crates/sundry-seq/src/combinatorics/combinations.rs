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

//! # Ordered Tuples With Repetition
//!
//! [`combinations`] enumerates every length-`k` word over a pool, allowing an
//! element to appear in several positions and treating different orders as
//! different tuples. A pool of `n` elements therefore yields `n^k` tuples.
//!
//! Enumeration is lexicographic in pool index: the last position advances
//! fastest, so over `[a, b]` with `k = 2` the order is `aa, ab, ba, bb`.
//!
//! State is an odometer of pool indices kept in a `SmallVec`, so tuples up to
//! length eight never allocate for bookkeeping.

use crate::sequence::Sequence;
use smallvec::SmallVec;
use std::iter::FusedIterator;

type Odometer = SmallVec<[usize; 8]>;

/// Returns `base^exp`, or `None` if it does not fit a `usize`.
#[inline]
fn checked_power(base: usize, exp: usize) -> Option<usize> {
    u32::try_from(exp).ok().and_then(|e| base.checked_pow(e))
}

/// The restartable sequence of all length-`k` tuples over a pool.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::Sequence;
/// # use sundry_seq::combinatorics::combinations::combinations;
/// let words: Vec<String> = combinations(['a', 'b'], 2)
///     .iter()
///     .map(|w| w.into_iter().collect())
///     .collect();
/// assert_eq!(words, vec!["aa", "ab", "ba", "bb"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations<T> {
    pool: Vec<T>,
    k: usize,
}

impl<T> Combinations<T> {
    /// Returns the tuple length.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the elements tuples are drawn from.
    #[inline]
    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    /// Returns the number of tuples in one walk, `n^k`, or `None` on overflow.
    ///
    /// A tuple length of zero gives `Some(0)`.
    #[inline]
    pub fn total(&self) -> Option<usize> {
        if self.k == 0 {
            return Some(0);
        }
        checked_power(self.pool.len(), self.k)
    }
}

impl<T> Sequence for Combinations<T>
where
    T: Clone,
{
    type Item = Vec<T>;
    type Iter<'a>
        = CombinationsIter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        CombinationsIter::new(&self.pool, self.k)
    }
}

/// Builds the sequence of every length-`k` tuple over `source`.
///
/// A `k` of zero, or an empty source with a positive `k`, gives an empty
/// sequence.
#[inline]
pub fn combinations<I>(source: I, k: usize) -> Combinations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Combinations {
        pool: source.into_iter().collect(),
        k,
    }
}

/// The iterator behind [`Combinations`].
#[derive(Debug, Clone)]
pub struct CombinationsIter<'a, T> {
    pool: &'a [T],
    indices: Odometer,
    done: bool,
}

impl<'a, T> CombinationsIter<'a, T> {
    /// Starts a walk over all length-`k` tuples of `pool`.
    #[inline]
    pub fn new(pool: &'a [T], k: usize) -> Self {
        // A walk that yields nothing keeps no odometer.
        if k == 0 || pool.is_empty() {
            return Self {
                pool,
                indices: SmallVec::new(),
                done: true,
            };
        }
        Self {
            pool,
            indices: SmallVec::from_elem(0, k),
            done: false,
        }
    }

    /// Number of tuples left, or `None` if that count overflows a `usize`.
    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let n = self.pool.len();
        let total = checked_power(n, self.indices.len())?;
        let rank = self
            .indices
            .iter()
            .try_fold(0usize, |acc, &i| acc.checked_mul(n)?.checked_add(i))?;
        Some(total - rank)
    }

    /// Moves the odometer one step; the last position turns fastest.
    #[inline]
    fn advance(&mut self) {
        let n = self.pool.len();
        for slot in self.indices.iter_mut().rev() {
            *slot += 1;
            if *slot < n {
                return;
            }
            *slot = 0;
        }
        self.done = true;
    }
}

impl<T> Iterator for CombinationsIter<'_, T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tuple = self.indices.iter().map(|&i| self.pool[i].clone()).collect();
        self.advance();
        Some(tuple)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for CombinationsIter<'_, T> where T: Clone {}

/// The restartable sequence of all tuples of length `max_k`, then `max_k - 1`,
/// and so on down to length one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationsUpTo<T> {
    pool: Vec<T>,
    max_k: usize,
}

impl<T> Sequence for CombinationsUpTo<T>
where
    T: Clone,
{
    type Item = Vec<T>;
    type Iter<'a>
        = CombinationsUpToIter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        CombinationsUpToIter {
            pool: &self.pool,
            k: self.max_k,
            current: CombinationsIter::new(&self.pool, self.max_k),
        }
    }
}

/// Builds the sequence of tuples of every length from `max_k` down to one,
/// longest first.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::Sequence;
/// # use sundry_seq::combinatorics::combinations::combinations_up_to;
/// let all: Vec<Vec<u8>> = combinations_up_to([0, 1], 2).iter().collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1], vec![0], vec![1]]);
/// ```
#[inline]
pub fn combinations_up_to<I>(source: I, max_k: usize) -> CombinationsUpTo<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    CombinationsUpTo {
        pool: source.into_iter().collect(),
        max_k,
    }
}

/// The iterator behind [`CombinationsUpTo`].
#[derive(Debug, Clone)]
pub struct CombinationsUpToIter<'a, T> {
    pool: &'a [T],
    k: usize,
    current: CombinationsIter<'a, T>,
}

impl<T> CombinationsUpToIter<'_, T> {
    /// Number of tuples left across the current and all shorter lengths, or
    /// `None` if that count overflows a `usize`.
    fn remaining(&self) -> Option<usize> {
        let n = self.pool.len();
        let shorter = match n {
            0 => 0,
            1 => self.k.saturating_sub(1),
            _ => (1..self.k).try_fold(0usize, |acc, i| acc.checked_add(checked_power(n, i)?))?,
        };
        self.current.remaining()?.checked_add(shorter)
    }
}

impl<T> Iterator for CombinationsUpToIter<'_, T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tuple) = self.current.next() {
                return Some(tuple);
            }
            if self.k <= 1 || self.pool.is_empty() {
                return None;
            }
            self.k -= 1;
            self.current = CombinationsIter::new(self.pool, self.k);
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for CombinationsUpToIter<'_, T> where T: Clone {}
