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

//! # Sequence Adapters
//!
//! Combinators that wrap one or more [`Sequence`]s into a new one. Each
//! adapter owns its sources and calls `iter()` on them whenever it is itself
//! restarted, so the result is as restartable as its inputs.
//!
//! The free functions mirror the provided methods on [`Sequence`] and exist
//! for call sites that read better in prefix form, plus [`zip_all`] which has
//! no method counterpart.

use super::Sequence;
use std::iter::{Chain, Cloned, FusedIterator};
use std::slice;

/// A sequence that transforms every value of its source.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    #[inline]
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, B> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Iter<'a>
        = std::iter::Map<S::Iter<'a>, &'a F>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.source.iter().map(&self.f)
    }
}

/// Applies `f` to every value of `source`.
#[inline]
pub fn map<S, F, B>(source: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    Map::new(source, f)
}

/// A sequence holding the values of its source that satisfy a predicate.
///
/// Over an infinite source whose remaining values all fail the predicate,
/// `next()` never returns.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    #[inline]
    pub(crate) fn new(source: S, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a>
        = std::iter::Filter<S::Iter<'a>, &'a P>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.source.iter().filter(&self.pred)
    }
}

/// Keeps the values of `source` for which `pred` holds.
#[inline]
pub fn filter<S, P>(source: S, pred: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(source, pred)
}

/// A sequence of pairs drawn in lockstep from two sources.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    #[inline]
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);
    type Iter<'a>
        = std::iter::Zip<A::Iter<'a>, B::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.a.iter().zip(self.b.iter())
    }
}

/// Pairs the values of `a` and `b`, ending with the shorter source.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::{Sequence, from_vec, adapters::zip};
/// let pairs = zip(from_vec(vec![1, 2, 3]), from_vec(vec!["a", "b"]));
/// assert_eq!(pairs.iter().collect::<Vec<_>>(), vec![(1, "a"), (2, "b")]);
/// ```
#[inline]
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip::new(a, b)
}

/// A sequence of rows drawn in lockstep from any number of sources of the
/// same type.
#[derive(Debug, Clone)]
pub struct ZipAll<S> {
    sources: Vec<S>,
}

impl<S> Sequence for ZipAll<S>
where
    S: Sequence,
{
    type Item = Vec<S::Item>;
    type Iter<'a>
        = ZipAllIter<S::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        ZipAllIter {
            done: self.sources.is_empty(),
            iters: self.sources.iter().map(|s| s.iter()).collect(),
        }
    }
}

/// The iterator behind [`ZipAll`].
///
/// Once any source runs dry the iterator is finished for good; values already
/// pulled from the other sources during that last step are dropped.
#[derive(Debug, Clone)]
pub struct ZipAllIter<I> {
    iters: Vec<I>,
    done: bool,
}

impl<I> Iterator for ZipAllIter<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let row: Option<Vec<I::Item>> = self.iters.iter_mut().map(Iterator::next).collect();
        if row.is_none() {
            self.done = true;
        }
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.iters
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), |(lo, hi), (l, h)| {
                let hi = match (hi, h) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (None, h) => h,
                    (hi, None) => hi,
                };
                (lo.min(l), hi)
            })
    }
}

impl<I> FusedIterator for ZipAllIter<I> where I: Iterator {}

/// Zips any number of homogeneous sources into rows.
///
/// The sequence ends as soon as one source does. With no sources at all it is
/// empty.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::{Sequence, from_vec, adapters::zip_all};
/// let rows = zip_all(vec![
///     from_vec(vec![1, 2, 3]),
///     from_vec(vec![4, 5]),
///     from_vec(vec![6, 7, 8]),
/// ]);
/// assert_eq!(rows.iter().collect::<Vec<_>>(), vec![vec![1, 4, 6], vec![2, 5, 7]]);
/// ```
#[inline]
pub fn zip_all<S>(sources: Vec<S>) -> ZipAll<S>
where
    S: Sequence,
{
    ZipAll { sources }
}

/// A sequence that yields a fixed list of values before its source.
#[derive(Debug, Clone)]
pub struct Prepend<S>
where
    S: Sequence,
{
    values: Vec<S::Item>,
    source: S,
}

impl<S> Prepend<S>
where
    S: Sequence,
{
    #[inline]
    pub(crate) fn new<I>(source: S, values: I) -> Self
    where
        I: IntoIterator<Item = S::Item>,
    {
        Self {
            values: values.into_iter().collect(),
            source,
        }
    }
}

impl<S> Sequence for Prepend<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Iter<'a>
        = Chain<Cloned<slice::Iter<'a, S::Item>>, S::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.values.iter().cloned().chain(self.source.iter())
    }
}

/// Yields `values`, then every value of `source`.
#[inline]
pub fn prepend_constants<S, I>(source: S, values: I) -> Prepend<S>
where
    S: Sequence,
    S::Item: Clone,
    I: IntoIterator<Item = S::Item>,
{
    Prepend::new(source, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::consume::take;
    use crate::sequence::{FromVec, from_vec, natural_numbers};
    use proptest::prelude::*;

    #[test]
    fn test_map_preserves_order_and_length() {
        let seq = map(from_vec(vec![3, 1, 2]), |x| x + 1);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![4, 2, 3]);
    }

    #[test]
    fn test_map_changes_item_type() {
        let seq = map(from_vec(vec![1, 22, 333]), |x: i32| x.to_string());
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["1", "22", "333"]);
    }

    #[test]
    fn test_filter_keeps_matching_values() {
        let seq = filter(from_vec(vec![5, 8, 1, 6, 3]), |x| *x > 4);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![5, 8, 6]);
    }

    #[test]
    fn test_filter_over_infinite_source() {
        let primes_ish = filter(natural_numbers(), |n| *n > 1 && (2..*n).all(|d| n % d != 0));
        assert_eq!(take(&mut primes_ish.iter(), 5), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_zip_stops_at_shorter() {
        let seq = zip(natural_numbers(), from_vec(vec!['a', 'b', 'c']));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn test_zip_all_of_nothing_is_empty() {
        let seq = zip_all(Vec::<FromVec<u8>>::new());
        assert_eq!(seq.iter().next(), None);
        assert_eq!(seq.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_zip_all_single_source() {
        let seq = zip_all(vec![from_vec(vec![1, 2])]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_zip_all_is_fused() {
        let seq = zip_all(vec![from_vec(vec![1, 2]), from_vec(vec![1, 2, 3, 4])]);
        let mut iter = seq.iter();
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_zip_all_size_hint_is_minimum() {
        let seq = zip_all(vec![from_vec(vec![1, 2, 3]), from_vec(vec![4])]);
        assert_eq!(seq.iter().size_hint(), (1, Some(1)));
    }

    #[test]
    fn test_prepend_constants_replay_on_restart() {
        let seq = prepend_constants(from_vec(vec![10, 20]), vec![1, 2, 3]);
        let expected = vec![1, 2, 3, 10, 20];
        assert_eq!(seq.iter().collect::<Vec<_>>(), expected);
        assert_eq!(seq.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_prepend_to_empty_source() {
        let seq = prepend_constants(from_vec(Vec::new()), ["only"]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["only"]);
    }

    proptest! {
        #[test]
        fn prop_zip_length_is_minimum(a in prop::collection::vec(any::<i32>(), 0..32),
                                      b in prop::collection::vec(any::<u8>(), 0..32)) {
            let seq = zip(from_vec(a.clone()), from_vec(b.clone()));
            let pairs: Vec<_> = seq.iter().collect();
            prop_assert_eq!(pairs.len(), a.len().min(b.len()));
            for (i, (x, y)) in pairs.into_iter().enumerate() {
                prop_assert_eq!(x, a[i]);
                prop_assert_eq!(y, b[i]);
            }
        }

        #[test]
        fn prop_filter_matches_std(v in prop::collection::vec(any::<i16>(), 0..64)) {
            let seq = filter(from_vec(v.clone()), |x| x % 3 == 0);
            let expected: Vec<i16> = v.into_iter().filter(|x| x % 3 == 0).collect();
            prop_assert_eq!(seq.iter().collect::<Vec<_>>(), expected);
        }
    }
}
