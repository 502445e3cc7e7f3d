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

//! A map that answers lookups of absent keys with a value derived from the
//! key.

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::collections::hash_map;
use std::hash::Hash;

/// A hash map with a fallback for keys it does not hold.
///
/// [`DefaultMap::get`] never stores the derived value; use
/// [`DefaultMap::get_or_insert`] for that.
///
/// # Examples
///
/// ```rust
/// # use sundry_collections::default_map::DefaultMap;
/// let mut scores = DefaultMap::new(|name: &&str| name.len() as u32);
/// scores.insert("ada", 10);
///
/// assert_eq!(*scores.get(&"ada"), 10);
/// assert_eq!(*scores.get(&"grace"), 5);
/// assert!(!scores.contains_key(&"grace"));
///
/// *scores.get_or_insert("grace") += 1;
/// assert_eq!(*scores.get(&"grace"), 6);
/// ```
pub struct DefaultMap<K, V, F> {
    map: FxHashMap<K, V>,
    derive: F,
}

impl<K, V, F> DefaultMap<K, V, F>
where
    K: Eq + Hash,
    F: Fn(&K) -> V,
{
    /// Creates an empty map that derives missing values with `derive`.
    #[inline]
    pub fn new(derive: F) -> Self {
        Self::with_map(FxHashMap::default(), derive)
    }

    /// Creates a map holding the entries of `map`.
    #[inline]
    pub fn with_map(map: FxHashMap<K, V>, derive: F) -> Self {
        Self { map, derive }
    }

    /// Returns the stored value for `key`, or the derived default.
    #[inline]
    pub fn get(&self, key: &K) -> Cow<'_, V>
    where
        V: Clone,
    {
        match self.map.get(key) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned((self.derive)(key)),
        }
    }

    /// Returns the stored value for `key`, storing the derived default first
    /// if there is none.
    #[inline]
    pub fn get_or_insert(&mut self, key: K) -> &mut V {
        let derive = &self.derive;
        self.map.entry(key).or_insert_with_key(|key| derive(key))
    }

    /// Stores `value` under `key`, returning the value it replaced.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Removes and returns the stored value for `key`.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    /// Checks whether a value is stored for `key`. Derived defaults do not
    /// count.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the stored entries.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.map.iter()
    }

    /// Consumes the map and returns its stored entries.
    #[inline]
    pub fn into_inner(self) -> FxHashMap<K, V> {
        self.map
    }
}

impl<K, V, F> std::fmt::Debug for DefaultMap<K, V, F>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultMap")
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}
