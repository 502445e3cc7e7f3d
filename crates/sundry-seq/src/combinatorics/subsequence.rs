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

//! # Contiguous Sub-sequences
//!
//! Enumeration of the contiguous runs of a slice, yielded as borrowed
//! sub-slices. Runs are ordered by starting offset, and for a fixed offset by
//! increasing length. Empty runs are never produced.

use crate::sequence::Sequence;
use std::iter::FusedIterator;

/// Inclusive length limits for [`sub_sequences`].
///
/// A `min_len` of zero behaves like one. When `min_len > max_len` nothing is
/// yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubSequenceBounds {
    /// Shortest run to yield.
    pub min_len: usize,
    /// Longest run to yield.
    pub max_len: usize,
}

impl SubSequenceBounds {
    /// Bounds admitting runs of `min_len` up to `max_len` elements.
    #[inline]
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Bounds admitting runs of exactly `len` elements.
    #[inline]
    pub const fn exactly(len: usize) -> Self {
        Self::new(len, len)
    }

    /// Bounds admitting runs of at least `min_len` elements.
    #[inline]
    pub const fn at_least(min_len: usize) -> Self {
        Self::new(min_len, usize::MAX)
    }
}

impl Default for SubSequenceBounds {
    /// Every non-empty run.
    #[inline]
    fn default() -> Self {
        Self::at_least(1)
    }
}

/// The restartable sequence of contiguous runs of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSequences<'s, T> {
    items: &'s [T],
    bounds: SubSequenceBounds,
}

impl<'s, T> Sequence for SubSequences<'s, T> {
    type Item = &'s [T];
    type Iter<'a>
        = SubSequencesIter<'s, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        let min_len = self.bounds.min_len.max(1);
        SubSequencesIter {
            items: self.items,
            min_len,
            max_len: self.bounds.max_len,
            offset: 0,
            len: min_len,
        }
    }
}

/// Enumerates the runs of `items` whose length lies within `bounds`.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::Sequence;
/// # use sundry_seq::combinatorics::subsequence::{sub_sequences, SubSequenceBounds};
/// let runs: Vec<&[i32]> = sub_sequences(&[1, 2, 3], SubSequenceBounds::default())
///     .iter()
///     .collect();
/// assert_eq!(runs, vec![&[1][..], &[1, 2], &[1, 2, 3], &[2], &[2, 3], &[3]]);
/// ```
#[inline]
pub fn sub_sequences<T>(items: &[T], bounds: SubSequenceBounds) -> SubSequences<'_, T> {
    SubSequences { items, bounds }
}

/// Enumerates the windows of exactly `size` elements of `items`.
///
/// A `size` of zero, or larger than `items`, yields nothing.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::Sequence;
/// # use sundry_seq::combinatorics::subsequence::sub_sequences_of_size;
/// let windows: Vec<&[char]> = sub_sequences_of_size(&['a', 'b', 'c'], 2).iter().collect();
/// assert_eq!(windows, vec![&['a', 'b'][..], &['b', 'c']]);
/// ```
#[inline]
pub fn sub_sequences_of_size<T>(items: &[T], size: usize) -> SubSequences<'_, T> {
    sub_sequences(items, SubSequenceBounds::exactly(size))
}

/// The iterator behind [`SubSequences`].
#[derive(Debug, Clone)]
pub struct SubSequencesIter<'s, T> {
    items: &'s [T],
    min_len: usize,
    max_len: usize,
    offset: usize,
    len: usize,
}

impl<'s, T> Iterator for SubSequencesIter<'s, T> {
    type Item = &'s [T];

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.items.len() {
            let longest = self.max_len.min(self.items.len() - self.offset);
            if self.len <= longest {
                let run = &self.items[self.offset..self.offset + self.len];
                self.len += 1;
                return Some(run);
            }
            self.offset += 1;
            self.len = self.min_len;
        }
        None
    }
}

impl<T> FusedIterator for SubSequencesIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs<T: Copy>(items: &[T], bounds: SubSequenceBounds) -> Vec<Vec<T>> {
        sub_sequences(items, bounds).iter().map(<[T]>::to_vec).collect()
    }

    #[test]
    fn test_default_bounds_count() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(runs(&items, SubSequenceBounds::default()).len(), 15);
    }

    #[test]
    fn test_min_and_max_bounds() {
        let got = runs(&[1, 2, 3, 4], SubSequenceBounds::new(2, 3));
        assert_eq!(
            got,
            vec![
                vec![1, 2],
                vec![1, 2, 3],
                vec![2, 3],
                vec![2, 3, 4],
                vec![3, 4],
            ]
        );
    }

    #[test]
    fn test_full_length_run_is_included() {
        let got = runs(&[7, 8], SubSequenceBounds::at_least(2));
        assert_eq!(got, vec![vec![7, 8]]);
    }

    #[test]
    fn test_zero_min_len_behaves_like_one() {
        assert_eq!(
            runs(&[1, 2], SubSequenceBounds::new(0, 1)),
            vec![vec![1], vec![2]]
        );
    }

    #[test]
    fn test_inverted_bounds_yield_nothing() {
        assert!(runs(&[1, 2, 3], SubSequenceBounds::new(3, 2)).is_empty());
    }

    #[test]
    fn test_empty_slice() {
        assert!(runs::<u8>(&[], SubSequenceBounds::default()).is_empty());
    }

    #[test]
    fn test_sub_sequences_of_size_windows() {
        let items = [1, 2, 3, 4];
        let got: Vec<&[i32]> = sub_sequences_of_size(&items, 3).iter().collect();
        assert_eq!(got, vec![&[1, 2, 3][..], &[2, 3, 4]]);
    }

    #[test]
    fn test_sub_sequences_of_size_degenerate() {
        let items = [1, 2];
        assert_eq!(sub_sequences_of_size(&items, 0).iter().count(), 0);
        assert_eq!(sub_sequences_of_size(&items, 3).iter().count(), 0);
        assert_eq!(sub_sequences_of_size(&items, 2).iter().count(), 1);
    }

    #[test]
    fn test_restart_and_borrow_outlives_sequence() {
        let items = vec![String::from("a"), String::from("b")];
        let collected: Vec<&[String]> = {
            let seq = sub_sequences_of_size(&items, 1);
            assert_eq!(seq.iter().count(), 2);
            seq.iter().collect()
        };
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1][0], "b");
    }
}
