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

//! # Multi-key Map
//!
//! [`MultiMap`] associates values with ordered key tuples of a fixed length,
//! its *arity*. Storage is a tree of `FxHashMap`s: the first key selects a
//! sub-map, the next key selects within that, and the last key maps to the
//! value itself.
//!
//! ## Contracts
//!
//! - Every operation checks the key slice against the arity first. A slice of
//!   the wrong length is treated as absent: lookups report nothing and
//!   mutations leave the map untouched.
//! - [`MultiMap::len`] counts distinct full key tuples that hold a value. It
//!   grows only when a tuple is inserted for the first time.
//! - Removing a value leaves its (possibly now empty) ancestor sub-maps in
//!   place. They hold no values and are invisible to every query, but keep
//!   their memory until [`MultiMap::clear`].
//!
//! Iteration walks the tree depth first in `FxHashMap` order, which is neither
//! insertion order nor sorted.
//!
//! ```rust
//! use sundry_collections::multi_map::MultiMap;
//!
//! let mut grid = MultiMap::new(2);
//! assert!(grid.set(&[0, 1], "north"));
//! assert!(grid.set(&[1, 0], "east"));
//! assert!(!grid.set(&[1], "ignored"));
//!
//! assert_eq!(grid.get(&[0, 1]), Some(&"north"));
//! assert_eq!(grid.len(), 2);
//! assert!(grid.delete(&[0, 1]));
//! assert!(!grid.has(&[0, 1]));
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::hash_map;
use std::hash::Hash;
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
enum Node<K, V> {
    Branch(FxHashMap<K, Node<K, V>>),
    Leaf(V),
}

/// A map from fixed-length key tuples to values.
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    root: FxHashMap<K, Node<K, V>>,
    arity: usize,
    len: usize,
}

impl<K, V> MultiMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map keyed by tuples of `arity` keys.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is zero.
    #[inline]
    pub fn new(arity: usize) -> Self {
        assert!(arity > 0, "called `MultiMap::new` with an arity of zero");
        Self {
            root: FxHashMap::default(),
            arity,
            len: 0,
        }
    }

    /// Returns the number of keys in every tuple.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of stored key tuples.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the map holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Splits `keys` into the sub-map path and the final key, or returns
    /// `None` on an arity mismatch.
    #[inline(always)]
    fn split<'k>(&self, keys: &'k [K]) -> Option<(&'k K, &'k [K])> {
        if keys.len() != self.arity {
            return None;
        }
        keys.split_last()
    }

    /// Follows `path` from the root to the innermost sub-map.
    fn descend(&self, path: &[K]) -> Option<&FxHashMap<K, Node<K, V>>> {
        let mut map = &self.root;
        for key in path {
            match map.get(key)? {
                Node::Branch(next) => map = next,
                Node::Leaf(_) => return None,
            }
        }
        Some(map)
    }

    /// Returns the value stored under `keys`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_collections::multi_map::MultiMap;
    /// let mut m = MultiMap::new(3);
    /// m.set(&['a', 'b', 'c'], 1);
    /// assert_eq!(m.get(&['a', 'b', 'c']), Some(&1));
    /// assert_eq!(m.get(&['a', 'b', 'x']), None);
    /// assert_eq!(m.get(&['a', 'b']), None);
    /// ```
    pub fn get(&self, keys: &[K]) -> Option<&V> {
        let (last, path) = self.split(keys)?;
        match self.descend(path)?.get(last)? {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Returns a mutable reference to the value stored under `keys`.
    pub fn get_mut(&mut self, keys: &[K]) -> Option<&mut V> {
        let (last, path) = self.split(keys)?;
        let mut map = &mut self.root;
        for key in path {
            match map.get_mut(key)? {
                Node::Branch(next) => map = next,
                Node::Leaf(_) => return None,
            }
        }
        match map.get_mut(last)? {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Checks whether a value is stored under `keys`.
    #[inline]
    pub fn has(&self, keys: &[K]) -> bool {
        self.get(keys).is_some()
    }

    /// Stores `value` under `keys`, creating sub-maps along the way and
    /// replacing any previous value.
    ///
    /// Returns `false`, dropping `value`, if `keys` does not match the arity.
    pub fn set(&mut self, keys: &[K], value: V) -> bool
    where
        K: Clone,
    {
        let Some((last, path)) = self.split(keys) else {
            return false;
        };

        let mut map = &mut self.root;
        for (depth, key) in path.iter().enumerate() {
            let node = map.entry(key.clone()).or_insert_with(|| {
                log::trace!("multi_map: opening sub-map at depth {}", depth + 1);
                Node::Branch(FxHashMap::default())
            });
            map = match node {
                Node::Branch(next) => next,
                Node::Leaf(_) => return false,
            };
        }

        if map.insert(last.clone(), Node::Leaf(value)).is_none() {
            self.len += 1;
        }
        true
    }

    /// Removes and returns the value stored under `keys`.
    ///
    /// Ancestor sub-maps are kept even when this empties them.
    pub fn remove(&mut self, keys: &[K]) -> Option<V> {
        let (last, path) = self.split(keys)?;
        let mut map = &mut self.root;
        for key in path {
            match map.get_mut(key)? {
                Node::Branch(next) => map = next,
                Node::Leaf(_) => return None,
            }
        }
        if !matches!(map.get(last)?, Node::Leaf(_)) {
            return None;
        }
        match map.remove(last) {
            Some(Node::Leaf(value)) => {
                self.len -= 1;
                Some(value)
            }
            _ => None,
        }
    }

    /// Removes the value stored under `keys`, reporting whether there was one.
    #[inline]
    pub fn delete(&mut self, keys: &[K]) -> bool {
        self.remove(keys).is_some()
    }

    /// Removes every value and sub-map.
    #[inline]
    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    /// Iterates over `(keys, value)` pairs, depth first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_collections::multi_map::MultiMap;
    /// let mut m = MultiMap::new(2);
    /// m.set(&[1, 2], 'a');
    /// m.set(&[1, 3], 'b');
    /// m.set(&[2, 1], 'c');
    ///
    /// let mut entries: Vec<(Vec<i32>, char)> = m
    ///     .entries()
    ///     .map(|(keys, v)| (keys.into_iter().copied().collect(), *v))
    ///     .collect();
    /// entries.sort();
    /// assert_eq!(entries, vec![(vec![1, 2], 'a'), (vec![1, 3], 'b'), (vec![2, 1], 'c')]);
    /// ```
    #[inline]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            stack: vec![self.root.iter()],
            prefix: SmallVec::new(),
            remaining: self.len,
        }
    }

    /// Iterates over the stored key tuples.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries(),
        }
    }

    /// Iterates over the stored values.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries(),
        }
    }

    /// Calls `f` with every value and its key tuple.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &[&K]),
    {
        for (keys, value) in self.entries() {
            f(value, &keys);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a MultiMap<K, V>
where
    K: Eq + Hash,
{
    type Item = (Vec<&'a K>, &'a V);
    type IntoIter = Entries<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Depth-first iterator over the entries of a [`MultiMap`].
///
/// Each item carries the full key tuple as references into the map.
#[derive(Debug, Clone)]
pub struct Entries<'a, K, V> {
    stack: Vec<hash_map::Iter<'a, K, Node<K, V>>>,
    prefix: SmallVec<[&'a K; 4]>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (Vec<&'a K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        // `prefix` holds one key per open sub-map below the root.
        loop {
            match self.stack.last_mut()?.next() {
                Some((key, Node::Leaf(value))) => {
                    let mut keys = Vec::with_capacity(self.prefix.len() + 1);
                    keys.extend_from_slice(&self.prefix);
                    keys.push(key);
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some((keys, value));
                }
                Some((key, Node::Branch(next))) => {
                    self.prefix.push(key);
                    self.stack.push(next.iter());
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

/// Iterator over the key tuples of a [`MultiMap`].
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = Vec<&'a K>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(keys, _)| keys)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`MultiMap`].
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn sorted_entries<K: Ord + Clone + Hash, V: Clone>(m: &MultiMap<K, V>) -> Vec<(Vec<K>, V)> {
        let mut out: Vec<(Vec<K>, V)> = m
            .entries()
            .map(|(keys, v)| (keys.into_iter().cloned().collect(), v.clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    #[test]
    #[should_panic(expected = "arity of zero")]
    fn test_zero_arity_panics() {
        let _ = MultiMap::<u8, u8>::new(0);
    }

    #[test]
    fn test_set_get_has() {
        let mut m = MultiMap::new(2);
        assert!(m.set(&["x", "y"], 1));
        assert_eq!(m.get(&["x", "y"]), Some(&1));
        assert!(m.has(&["x", "y"]));
        assert!(!m.has(&["x", "z"]));
        assert!(!m.has(&["y", "x"]));
        assert_eq!(m.arity(), 2);
    }

    #[test]
    fn test_arity_mismatch_is_not_found() {
        let mut m = MultiMap::new(2);
        m.set(&[1, 2], "a");
        assert_eq!(m.get(&[1]), None);
        assert_eq!(m.get(&[1, 2, 3]), None);
        assert!(!m.has(&[]));
        assert!(!m.set(&[1, 2, 3], "b"));
        assert!(!m.delete(&[1]));
        assert_eq!(m.get_mut(&[1]), None);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let mut m = MultiMap::new(3);
        m.set(&[1, 1, 1], 'a');
        m.set(&[1, 1, 1], 'b');
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&[1, 1, 1]), Some(&'b'));
    }

    #[test]
    fn test_shared_prefixes_count_separately() {
        let mut m = MultiMap::new(3);
        m.set(&[0, 0, 0], ());
        m.set(&[0, 0, 1], ());
        m.set(&[0, 1, 0], ());
        m.set(&[1, 0, 0], ());
        assert_eq!(m.len(), 4);
        assert_eq!(m.entries().count(), 4);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut m = MultiMap::new(2);
        m.set(&['a', 'b'], vec![1]);
        m.get_mut(&['a', 'b']).unwrap().push(2);
        assert_eq!(m.get(&['a', 'b']), Some(&vec![1, 2]));
        assert!(m.get_mut(&['a', 'c']).is_none());
    }

    #[test]
    fn test_delete_contract() {
        let mut m = MultiMap::new(2);
        m.set(&[1, 2], 'a');
        m.set(&[1, 3], 'b');
        assert!(m.delete(&[1, 2]));
        assert!(!m.has(&[1, 2]));
        assert_eq!(m.len(), 1);
        assert!(!m.delete(&[1, 2]));
        assert!(!m.delete(&[9, 9]));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&[1, 3]), Some(&'b'));
    }

    #[test]
    fn test_remove_returns_value_and_leaves_ancestors() {
        let mut m = MultiMap::new(2);
        m.set(&[5, 6], String::from("v"));
        assert_eq!(m.remove(&[5, 6]), Some(String::from("v")));
        assert!(m.is_empty());
        assert_eq!(m.entries().count(), 0);
        // The emptied sub-map under 5 is reused.
        assert!(m.set(&[5, 7], String::from("w")));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_entries_example() {
        let mut m = MultiMap::new(2);
        m.set(&[1, 2], 'a');
        m.set(&[1, 3], 'b');
        m.set(&[2, 1], 'c');
        assert_eq!(
            sorted_entries(&m),
            vec![(vec![1, 2], 'a'), (vec![1, 3], 'b'), (vec![2, 1], 'c')]
        );
    }

    #[test]
    fn test_entries_is_exact_size_and_restartable() {
        let mut m = MultiMap::new(2);
        for i in 0..5 {
            m.set(&[i, i * 2], i);
        }
        let iter = m.entries();
        assert_eq!(iter.len(), 5);
        assert_eq!(m.entries().count(), 5);
        assert_eq!(m.entries().count(), 5);
    }

    #[test]
    fn test_keys_and_values() {
        let mut m = MultiMap::new(1);
        m.set(&["solo"], 10);
        m.set(&["duo"], 20);
        let mut keys: Vec<&str> = m.keys().map(|k| *k[0]).collect();
        keys.sort();
        assert_eq!(keys, vec!["duo", "solo"]);
        let total: i32 = m.values().sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_for_each_visits_every_entry() {
        let mut m = MultiMap::new(2);
        m.set(&[1, 1], 1);
        m.set(&[2, 3], 6);
        let mut seen = Vec::new();
        m.for_each(|v, keys| seen.push((*keys[0] * *keys[1], *v)));
        seen.sort();
        assert_eq!(seen, vec![(1, 1), (6, 6)]);
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let mut m = MultiMap::new(2);
        m.set(&[0, 0], 'z');
        let mut count = 0;
        for (keys, v) in &m {
            assert_eq!(keys, vec![&0, &0]);
            assert_eq!(*v, 'z');
            count += 1;
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_clear() {
        let mut m = MultiMap::new(2);
        m.set(&[1, 2], 0);
        m.set(&[3, 4], 0);
        m.clear();
        assert!(m.is_empty());
        assert!(!m.has(&[1, 2]));
        assert_eq!(m.entries().next(), None);
        assert!(m.set(&[1, 2], 1));
        assert_eq!(m.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Set(Vec<u8>, u16),
        Delete(Vec<u8>),
    }

    fn op() -> impl Strategy<Value = Op> {
        let keys = prop::collection::vec(0u8..4, 1..4);
        prop_oneof![
            (keys.clone(), any::<u16>()).prop_map(|(k, v)| Op::Set(k, v)),
            keys.prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_matches_flat_model(ops in prop::collection::vec(op(), 0..64)) {
            let mut m = MultiMap::new(3);
            let mut model: BTreeMap<Vec<u8>, u16> = BTreeMap::new();
            for op in ops {
                match op {
                    Op::Set(k, v) => {
                        let accepted = m.set(&k, v);
                        prop_assert_eq!(accepted, k.len() == 3);
                        if accepted {
                            model.insert(k, v);
                        }
                    }
                    Op::Delete(k) => {
                        prop_assert_eq!(m.delete(&k), model.remove(&k).is_some());
                    }
                }
                prop_assert_eq!(m.len(), model.len());
            }
            let expected: Vec<(Vec<u8>, u16)> = model.into_iter().collect();
            prop_assert_eq!(sorted_entries(&m), expected);
        }
    }
}
