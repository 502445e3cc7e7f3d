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

//! # Set Algebra
//!
//! Union and intersection over any number of hash sets. Inputs may use any
//! hasher; results are `FxHashSet`s holding clones of the elements.

use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Returns every element that appears in at least one of `sets`.
///
/// The union of no sets is empty.
///
/// # Examples
///
/// ```rust
/// # use rustc_hash::FxHashSet;
/// # use sundry_collections::set::union;
/// let a: FxHashSet<u8> = [1, 2].into_iter().collect();
/// let b: FxHashSet<u8> = [2, 3].into_iter().collect();
/// let all = union([&a, &b]);
/// assert_eq!(all.len(), 3);
/// ```
pub fn union<'a, T, S, I>(sets: I) -> FxHashSet<T>
where
    T: Eq + Hash + Clone + 'a,
    S: BuildHasher + 'a,
    I: IntoIterator<Item = &'a HashSet<T, S>>,
{
    sets.into_iter().flatten().cloned().collect()
}

/// Returns the elements of `first` that also appear in every set of `rest`.
///
/// With an empty `rest` this is a copy of `first`.
///
/// # Examples
///
/// ```rust
/// # use rustc_hash::FxHashSet;
/// # use sundry_collections::set::intersection;
/// let a: FxHashSet<char> = "abcd".chars().collect();
/// let b: FxHashSet<char> = "bcde".chars().collect();
/// let c: FxHashSet<char> = "cdef".chars().collect();
/// let common = intersection(&a, [&b, &c]);
/// assert_eq!(common, "cd".chars().collect::<FxHashSet<_>>());
/// ```
pub fn intersection<'a, T, S, I>(first: &HashSet<T, S>, rest: I) -> FxHashSet<T>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + 'a,
    I: IntoIterator<Item = &'a HashSet<T, S>>,
    T: 'a,
{
    let rest: Vec<&HashSet<T, S>> = rest.into_iter().collect();
    first
        .iter()
        .filter(|item| rest.iter().all(|set| set.contains(*item)))
        .cloned()
        .collect()
}
