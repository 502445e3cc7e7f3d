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

//! # Memoization
//!
//! Explicit, caller-owned caches. Nothing here is global: a cache remembers
//! results only for as long as the caller keeps passing the same instance
//! around, and a caller may seed one with known answers up front.
//!
//! - [`Memo`] caches a single-key function. Its [`Memo::get_or_compute`]
//!   hands the cache back to the computation, so recursive definitions can
//!   consult it for their sub-problems.
//! - [`Memoized`] bundles a [`Memo`] with a non-recursive function.
//! - [`MultiMemo`] caches a function of a fixed-length key tuple on top of a
//!   [`MultiMap`].
//!
//! ```rust
//! use sundry_collections::memo::Memo;
//!
//! fn fib(memo: &mut Memo<u64, u64>, n: u64) -> u64 {
//!     memo.get_or_compute(n, |memo, &n| {
//!         if n < 2 { n } else { fib(memo, n - 1) + fib(memo, n - 2) }
//!     })
//! }
//!
//! let mut memo = Memo::new();
//! assert_eq!(fib(&mut memo, 90), 2_880_067_194_370_816_120);
//! assert_eq!(memo.len(), 91);
//! ```

use crate::multi_map::MultiMap;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A cache of results keyed by a single argument.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    cache: FxHashMap<K, V>,
}

impl<K, V> Default for Memo<K, V> {
    #[inline]
    fn default() -> Self {
        Self {
            cache: FxHashMap::default(),
        }
    }
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-filled with `cache`.
    #[inline]
    pub fn with_cache(cache: FxHashMap<K, V>) -> Self {
        Self { cache }
    }

    /// Returns the cached result for `key` without computing anything.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    /// Returns the cached result for `key`, computing and storing it with
    /// `compute` on a miss.
    ///
    /// `compute` receives the cache itself, which recursive definitions use
    /// to look up smaller cases.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> V
    where
        V: Clone,
        F: FnOnce(&mut Self, &K) -> V,
    {
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }
        log::trace!("memo: miss, {} entries cached", self.cache.len());
        let value = compute(self, &key);
        self.cache.insert(key, value.clone());
        value
    }

    /// Returns the number of cached results.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Checks whether nothing has been cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forgets every cached result.
    #[inline]
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Consumes the memo and returns its cache.
    #[inline]
    pub fn into_cache(self) -> FxHashMap<K, V> {
        self.cache
    }
}

/// A function paired with its own [`Memo`].
pub struct Memoized<K, V, F> {
    memo: Memo<K, V>,
    f: F,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&K) -> V,
{
    /// Calls `f` on `key`, or returns the result of an earlier call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_collections::memo::memoize;
    /// let mut calls = 0;
    /// let mut square = memoize(|n: &u32| {
    ///     calls += 1;
    ///     n * n
    /// });
    /// assert_eq!(square.call(12), 144);
    /// assert_eq!(square.call(12), 144);
    /// drop(square);
    /// assert_eq!(calls, 1);
    /// ```
    pub fn call(&mut self, key: K) -> V {
        let f = &mut self.f;
        self.memo.get_or_compute(key, |_, key| f(key))
    }

    /// Returns the cache backing this function.
    #[inline]
    pub fn memo(&self) -> &Memo<K, V> {
        &self.memo
    }
}

impl<K, V, F> std::fmt::Debug for Memoized<K, V, F>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}

/// Wraps `f` with an empty cache.
#[inline]
pub fn memoize<K, V, F>(f: F) -> Memoized<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&K) -> V,
{
    Memoized {
        memo: Memo::new(),
        f,
    }
}

/// Wraps `f` with a cache seeded from `cache`.
#[inline]
pub fn memoize_with<K, V, F>(f: F, cache: FxHashMap<K, V>) -> Memoized<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&K) -> V,
{
    Memoized {
        memo: Memo::with_cache(cache),
        f,
    }
}

/// A cache of results keyed by a fixed-length tuple of arguments.
///
/// Key tuples whose length differs from the arity are never cached: every
/// such lookup runs the computation again.
#[derive(Debug, Clone)]
pub struct MultiMemo<K, V> {
    cache: MultiMap<K, V>,
}

impl<K, V> MultiMemo<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache for functions of `arity` arguments.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is zero.
    #[inline]
    pub fn new(arity: usize) -> Self {
        Self {
            cache: MultiMap::new(arity),
        }
    }

    /// Creates a cache pre-filled with `cache`, taking over its arity.
    #[inline]
    pub fn with_cache(cache: MultiMap<K, V>) -> Self {
        Self { cache }
    }

    /// Returns the number of arguments per key tuple.
    #[inline]
    pub fn arity(&self) -> usize {
        self.cache.arity()
    }

    /// Returns the cached result for `keys` without computing anything.
    #[inline]
    pub fn get(&self, keys: &[K]) -> Option<&V> {
        self.cache.get(keys)
    }

    /// Returns the cached result for `keys`, computing and storing it with
    /// `compute` on a miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundry_collections::memo::MultiMemo;
    /// fn paths(memo: &mut MultiMemo<u32, u64>, r: u32, c: u32) -> u64 {
    ///     memo.get_or_compute(&[r, c], |memo, _| {
    ///         if r == 0 || c == 0 { 1 } else { paths(memo, r - 1, c) + paths(memo, r, c - 1) }
    ///     })
    /// }
    ///
    /// let mut memo = MultiMemo::new(2);
    /// assert_eq!(paths(&mut memo, 20, 20), 137_846_528_820);
    /// ```
    pub fn get_or_compute<F>(&mut self, keys: &[K], compute: F) -> V
    where
        V: Clone,
        F: FnOnce(&mut Self, &[K]) -> V,
    {
        if let Some(hit) = self.cache.get(keys) {
            return hit.clone();
        }
        log::trace!("multi_memo: miss, {} entries cached", self.cache.len());
        let value = compute(self, keys);
        if !self.cache.set(keys, value.clone()) {
            log::trace!(
                "multi_memo: not caching a key tuple of length {} (arity {})",
                keys.len(),
                self.cache.arity()
            );
        }
        value
    }

    /// Returns the number of cached results.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Checks whether nothing has been cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forgets every cached result.
    #[inline]
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Consumes the memo and returns its cache.
    #[inline]
    pub fn into_cache(self) -> MultiMap<K, V> {
        self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collatz_len(memo: &mut Memo<u64, u32>, n: u64) -> u32 {
        memo.get_or_compute(n, |memo, &n| match n {
            1 => 1,
            n if n % 2 == 0 => 1 + collatz_len(memo, n / 2),
            n => 1 + collatz_len(memo, 3 * n + 1),
        })
    }

    #[test]
    fn test_memo_recursive_reuse() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut memo = Memo::new();
        assert_eq!(collatz_len(&mut memo, 27), 112);
        let cached = memo.len();
        assert_eq!(collatz_len(&mut memo, 54), 113);
        assert_eq!(memo.len(), cached + 1);
        assert_eq!(memo.get(&27), Some(&112));
    }

    #[test]
    fn test_memo_seeded_cache_short_circuits() {
        let mut seed = FxHashMap::default();
        seed.insert(7u8, "seeded");
        let mut memo = Memo::with_cache(seed);
        let got = memo.get_or_compute(7, |_, _| panic!("must not compute a seeded key"));
        assert_eq!(got, "seeded");
        assert_eq!(memo.get_or_compute(8, |_, _| "fresh"), "fresh");
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_memo_clear_and_into_cache() {
        let mut memo = Memo::new();
        memo.get_or_compute('a', |_, c| c.to_ascii_uppercase());
        assert!(!memo.is_empty());
        let cache = memo.clone().into_cache();
        assert_eq!(cache.get(&'a'), Some(&'A'));
        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn test_memoized_counts_calls() {
        let mut calls = Vec::new();
        let mut len = memoize(|s: &String| {
            calls.push(s.clone());
            s.len()
        });
        assert_eq!(len.call("abc".to_string()), 3);
        assert_eq!(len.call("abc".to_string()), 3);
        assert_eq!(len.call("z".to_string()), 1);
        assert_eq!(len.memo().len(), 2);
        drop(len);
        assert_eq!(calls, vec!["abc", "z"]);
    }

    #[test]
    fn test_memoize_with_seed() {
        let mut seed = FxHashMap::default();
        seed.insert(2u32, 100u32);
        let mut doubled = memoize_with(|n: &u32| n * 2, seed);
        assert_eq!(doubled.call(2), 100);
        assert_eq!(doubled.call(3), 6);
    }

    #[test]
    fn test_multi_memo_caches_tuples() {
        let mut memo = MultiMemo::new(2);
        let mut runs = 0;
        for _ in 0..3 {
            let v = memo.get_or_compute(&[3u8, 4], |_, keys| {
                runs += 1;
                u32::from(keys[0]) * u32::from(keys[1])
            });
            assert_eq!(v, 12);
        }
        assert_eq!(runs, 1);
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.get(&[3, 4]), Some(&12));
        assert_eq!(memo.arity(), 2);
    }

    #[test]
    fn test_multi_memo_wrong_arity_is_never_cached() {
        let mut memo = MultiMemo::new(2);
        let mut runs = 0;
        for _ in 0..2 {
            memo.get_or_compute(&[1, 2, 3], |_, _| {
                runs += 1;
                0
            });
        }
        assert_eq!(runs, 2);
        assert!(memo.is_empty());
    }

    #[test]
    fn test_multi_memo_seeded_and_cleared() {
        let mut seed = MultiMap::new(3);
        seed.set(&[0, 0, 0], -1i64);
        let mut memo = MultiMemo::with_cache(seed);
        assert_eq!(memo.arity(), 3);
        assert_eq!(memo.get_or_compute(&[0, 0, 0], |_, _| 99), -1);
        memo.clear();
        assert_eq!(memo.get_or_compute(&[0, 0, 0], |_, _| 99), 99);
        assert_eq!(memo.into_cache().len(), 1);
    }
}
