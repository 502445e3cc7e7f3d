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

//! Range membership and match counting.

/// How the endpoints of a range take part in a membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bounds {
    /// Both endpoints belong to the range: `lower <= n <= upper`.
    #[default]
    Inclusive,
    /// Neither endpoint belongs to the range: `lower < n < upper`.
    Exclusive,
}

/// Tests whether `n` lies between `lower` and `upper`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::algorithm::predicate::{in_range, Bounds};
/// assert!(in_range(5, 1, 5, Bounds::Inclusive));
/// assert!(!in_range(5, 1, 5, Bounds::Exclusive));
/// ```
#[inline]
pub fn in_range<T>(n: T, lower: T, upper: T, bounds: Bounds) -> bool
where
    T: PartialOrd,
{
    match bounds {
        Bounds::Inclusive => lower <= n && n <= upper,
        Bounds::Exclusive => lower < n && n < upper,
    }
}

/// Counts the items for which `pred` holds.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::algorithm::predicate::count_matches;
/// assert_eq!(count_matches(1..=10, |n| n % 3 == 0), 3);
/// ```
#[inline]
pub fn count_matches<I, P>(items: I, mut pred: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| pred(item)).count()
}
