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

use std::cmp::Ordering;

/// Checks whether `items` is sorted in non-decreasing order of `key`.
#[inline(always)]
pub fn is_sorted_by_key<T, K, F>(items: &[T], key: F) -> bool
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}

/// Returns the index of the first element whose key is not less than `target`.
///
/// # Panics
///
/// In debug builds, this function will panic if `items` is not sorted by
/// `key` in ascending order.
///
/// # Invariants
///
/// - `items` must be sorted by `key` in ascending order.
#[inline]
pub fn lower_bound_by_key<T, K, F>(items: &[T], target: &K, key: F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    debug_assert!(
        is_sorted_by_key(items, &key),
        "called `lower_bound_by_key` with items that are not sorted by key"
    );

    let mut lo: usize = 0;
    let mut hi: usize = items.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        match key(&items[mid]).cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Equal | Ordering::Greater => hi = mid,
        }
    }
    lo
}

/// Binary search that falls back to the floor element.
///
/// Returns the index of an element whose key equals `target` if there is one,
/// otherwise the index of the last element whose key is below `target`, and
/// `None` when every key is greater.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::algorithm::search::floor_search_by_key;
/// let pairs = [(1, 'a'), (4, 'b'), (9, 'c')];
/// assert_eq!(floor_search_by_key(&pairs, &4, |p| p.0), Some(1));
/// assert_eq!(floor_search_by_key(&pairs, &8, |p| p.0), Some(1));
/// assert_eq!(floor_search_by_key(&pairs, &0, |p| p.0), None);
/// ```
pub fn floor_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let idx = lower_bound_by_key(items, target, &key);
    match items.get(idx) {
        Some(item) if key(item) == *target => Some(idx),
        _ => idx.checked_sub(1),
    }
}

/// [`floor_search_by_key`] over elements that are their own key.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::algorithm::search::floor_search;
/// assert_eq!(floor_search(&[2, 3, 5, 7, 11], &6), Some(2));
/// ```
#[inline]
pub fn floor_search<T>(items: &[T], target: &T) -> Option<usize>
where
    T: Ord + Clone,
{
    floor_search_by_key(items, target, T::clone)
}
