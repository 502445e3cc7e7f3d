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

//! # Cartesian Products
//!
//! [`multi_sample_combos`] picks one element from each of several pools. The
//! first pool turns fastest: over `[[1, 2], [3, 4]]` the order is
//! `[1, 3], [2, 3], [1, 4], [2, 4]`.
//!
//! The product of no pools is a single empty tuple; a product involving an
//! empty pool has no tuples at all.

use crate::sequence::Sequence;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// The restartable Cartesian product of several pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSampleCombos<T> {
    pools: Vec<Vec<T>>,
}

impl<T> MultiSampleCombos<T> {
    /// Returns the number of tuples in one walk, or `None` on overflow.
    #[inline]
    pub fn total(&self) -> Option<usize> {
        self.pools
            .iter()
            .try_fold(1usize, |acc, pool| acc.checked_mul(pool.len()))
    }
}

impl<T> Sequence for MultiSampleCombos<T>
where
    T: Clone,
{
    type Item = Vec<T>;
    type Iter<'a>
        = MultiSampleCombosIter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        MultiSampleCombosIter {
            pools: &self.pools,
            indices: SmallVec::from_elem(0, self.pools.len()),
            done: self.pools.iter().any(Vec::is_empty),
        }
    }
}

/// Builds the Cartesian product of `sources`.
///
/// # Examples
///
/// ```rust
/// # use sundry_seq::sequence::Sequence;
/// # use sundry_seq::combinatorics::product::multi_sample_combos;
/// let combos: Vec<_> = multi_sample_combos([vec![1, 2], vec![3, 4]]).iter().collect();
/// assert_eq!(combos, vec![vec![1, 3], vec![2, 3], vec![1, 4], vec![2, 4]]);
/// ```
#[inline]
pub fn multi_sample_combos<I, P>(sources: I) -> MultiSampleCombos<P::Item>
where
    I: IntoIterator<Item = P>,
    P: IntoIterator,
    P::Item: Clone,
{
    MultiSampleCombos {
        pools: sources
            .into_iter()
            .map(|p| p.into_iter().collect())
            .collect(),
    }
}

/// The iterator behind [`MultiSampleCombos`].
#[derive(Debug, Clone)]
pub struct MultiSampleCombosIter<'a, T> {
    pools: &'a [Vec<T>],
    indices: SmallVec<[usize; 8]>,
    done: bool,
}

impl<T> Iterator for MultiSampleCombosIter<'_, T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tuple = self
            .indices
            .iter()
            .zip(self.pools)
            .map(|(&i, pool)| pool[i].clone())
            .collect();

        // The first position turns fastest; a full carry ends the walk.
        self.done = true;
        for (slot, pool) in self.indices.iter_mut().zip(self.pools) {
            *slot += 1;
            if *slot < pool.len() {
                self.done = false;
                break;
            }
            *slot = 0;
        }
        Some(tuple)
    }
}

impl<T> FusedIterator for MultiSampleCombosIter<'_, T> where T: Clone {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pools_yields_one_empty_tuple() {
        let combos = multi_sample_combos(Vec::<Vec<u8>>::new());
        assert_eq!(combos.iter().collect::<Vec<_>>(), vec![Vec::<u8>::new()]);
        assert_eq!(combos.total(), Some(1));
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let combos = multi_sample_combos([vec![1, 2], vec![], vec![3]]);
        assert_eq!(combos.iter().next(), None);
        assert_eq!(combos.total(), Some(0));
    }

    #[test]
    fn test_single_pool() {
        let combos = multi_sample_combos([vec!['a', 'b', 'c']]);
        assert_eq!(
            combos.iter().collect::<Vec<_>>(),
            vec![vec!['a'], vec!['b'], vec!['c']]
        );
    }

    #[test]
    fn test_first_position_turns_fastest() {
        let combos = multi_sample_combos([vec![0, 1], vec![10, 20], vec![100]]);
        assert_eq!(
            combos.iter().collect::<Vec<_>>(),
            vec![
                vec![0, 10, 100],
                vec![1, 10, 100],
                vec![0, 20, 100],
                vec![1, 20, 100],
            ]
        );
    }

    #[test]
    fn test_uneven_pools_count_and_restart() {
        let combos = multi_sample_combos([vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(combos.total(), Some(6));
        assert_eq!(combos.iter().count(), 6);
        assert_eq!(combos.iter().count(), 6);
    }
}
