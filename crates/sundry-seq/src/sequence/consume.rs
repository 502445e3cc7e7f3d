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

//! Consumers that drain values out of plain iterators.
//!
//! These take the iterator by mutable reference so the caller keeps whatever
//! has not been consumed.

/// Pulls up to `n` values from `iter`.
///
/// The result is shorter than `n` when `iter` ends early.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::consume::take;
/// let mut iter = 1..=10;
/// assert_eq!(take(&mut iter, 3), vec![1, 2, 3]);
/// assert_eq!(take(&mut iter, 2), vec![4, 5]);
/// assert_eq!(take(&mut (0..2), 5), vec![0, 1]);
/// ```
#[inline]
pub fn take<I>(iter: &mut I, n: usize) -> Vec<I::Item>
where
    I: Iterator,
{
    iter.by_ref().take(n).collect()
}

/// Drains every remaining value from `iter`.
///
/// Never returns on an infinite iterator.
#[inline]
pub fn take_all<I>(iter: &mut I) -> Vec<I::Item>
where
    I: Iterator,
{
    iter.by_ref().collect()
}

/// Pulls a single value from `iter`.
#[inline]
pub fn first<I>(iter: &mut I) -> Option<I::Item>
where
    I: Iterator,
{
    iter.next()
}

/// Advances `iter` until `pred` holds for a value.
///
/// Returns `false` once `iter` is exhausted. Values up to and including the
/// first match are consumed.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::consume::any;
/// let mut iter = [1, 4, 9, 16].into_iter();
/// assert!(any(&mut iter, |n| *n > 3));
/// assert_eq!(iter.next(), Some(9));
/// assert!(!any(&mut iter, |n| *n > 100));
/// ```
#[inline]
pub fn any<I, P>(iter: &mut I, mut pred: P) -> bool
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.any(|item| pred(&item))
}
