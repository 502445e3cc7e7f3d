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

//! # Euler's Totient
//!
//! `phi(n)` counts the integers in `1..=n` coprime to `n`. Four flavours are
//! provided, from slowest to fastest per value:
//!
//! - [`totient`]: direct coprimality counting, `O(n log n)`.
//! - [`totient_with`]: product formula over a prime list from
//!   [`sieve`](crate::num::primes::sieve).
//! - [`totients_up_to`]: the whole table `phi(0..=n)` by a sieve pass.
//! - [`Totients`]: the same sieve pass, spread over the walk. The sieve work
//!   for each value happens as it is yielded, but the full `target + 1` table
//!   is allocated up front.
//!
//! All arithmetic stays in integers: `phi(i) / p * (p - 1)` is exact because
//! the pending value is still divisible by every unprocessed prime of `i`.

use num_integer::Integer;
use std::iter::FusedIterator;

/// Returns `true` if `gcd(a, b) == 1`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::totient::is_coprime;
/// assert!(is_coprime(8, 15));
/// assert!(!is_coprime(12, 18));
/// ```
#[inline]
pub fn is_coprime(a: u64, b: u64) -> bool {
    a.gcd(&b) == 1
}

/// Computes `phi(n)` by counting coprime values.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::totient::totient;
/// assert_eq!(totient(9), 6);
/// assert_eq!(totient(1), 1);
/// ```
pub fn totient(n: u64) -> u64 {
    (1..=n).filter(|&k| is_coprime(n, k)).count() as u64
}

/// Computes `phi(n)` from the product formula `n * prod(1 - 1/p)`.
///
/// `primes` must be ascending and cover every prime up to `sqrt(n)`; a prime
/// factor above that bound is recovered from the remainder.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::{primes::sieve, totient::totient_with};
/// let primes = sieve(100);
/// assert_eq!(totient_with(36, &primes), 12);
/// assert_eq!(totient_with(97, &primes), 96);
/// ```
pub fn totient_with(n: u64, primes: &[u64]) -> u64 {
    if n < 2 {
        return n;
    }

    let mut result = n;
    let mut rest = n;
    for &p in primes {
        if p.saturating_mul(p) > rest {
            break;
        }
        if rest % p == 0 {
            result = result / p * (p - 1);
            while rest % p == 0 {
                rest /= p;
            }
        }
    }
    if rest > 1 {
        result = result / rest * (rest - 1);
    }
    result
}

#[inline(always)]
fn sieve_step(phi: &mut [u64], n: usize) {
    if phi[n] == n as u64 {
        let p = n as u64;
        phi[n] = p - 1;
        let mut multiple = 2 * n;
        while multiple < phi.len() {
            phi[multiple] = phi[multiple] / p * (p - 1);
            multiple += n;
        }
    }
}

/// Returns the table `t` with `t[i] == phi(i)` for every `i <= target`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::totient::totients_up_to;
/// assert_eq!(totients_up_to(6), vec![0, 1, 1, 2, 2, 4, 2]);
/// ```
pub fn totients_up_to(target: usize) -> Vec<u64> {
    let mut phi: Vec<u64> = (0..=target as u64).collect();
    for n in 2..=target {
        sieve_step(&mut phi, n);
    }
    log::debug!("totients_up_to: filled {} entries", phi.len());
    phi
}

/// An iterator over `phi(1), phi(2), ..., phi(target)` that sieves as it goes.
///
/// Only the sieve work is deferred: [`Totients::new`] allocates the whole
/// table of `target + 1` entries immediately. Each value is final by the time it is yielded: every prime below `n` has
/// already been sieved out of it.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::totient::Totients;
/// let values: Vec<u64> = Totients::new(6).collect();
/// assert_eq!(values, vec![1, 1, 2, 2, 4, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Totients {
    phi: Vec<u64>,
    next: usize,
}

impl Totients {
    /// Creates an iterator that stops after `phi(target)`.
    pub fn new(target: usize) -> Self {
        Self {
            phi: (0..=target as u64).collect(),
            next: 1,
        }
    }
}

impl Iterator for Totients {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.phi.len() {
            return None;
        }
        let n = self.next;
        if n >= 2 {
            sieve_step(&mut self.phi, n);
        }
        self.next += 1;
        Some(self.phi[n])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.phi.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Totients {}

impl FusedIterator for Totients {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::primes::sieve;

    const PHI_1_TO_20: [u64; 20] = [1, 1, 2, 2, 4, 2, 6, 4, 6, 4, 10, 4, 12, 6, 8, 8, 16, 6, 18, 8];

    #[test]
    fn test_is_coprime() {
        assert!(is_coprime(1, 1));
        assert!(is_coprime(14, 25));
        assert!(!is_coprime(14, 21));
    }

    #[test]
    fn test_totient_known_values() {
        for (i, &expected) in PHI_1_TO_20.iter().enumerate() {
            assert_eq!(totient(i as u64 + 1), expected, "phi({})", i + 1);
        }
        assert_eq!(totient(0), 0);
    }

    #[test]
    fn test_totient_with_agrees_with_counting() {
        let primes = sieve(64);
        for n in 0..3_000u64 {
            assert_eq!(totient_with(n, &primes), totient(n), "phi({n})");
        }
    }

    #[test]
    fn test_totient_with_prime_outside_list() {
        // The list stops below 101, which is recovered from the remainder.
        assert_eq!(totient_with(101, &[2, 3, 5, 7]), 100);
        assert_eq!(totient_with(2 * 101, &[2, 3, 5, 7, 11]), 100);
    }

    #[test]
    fn test_totients_up_to_matches_known_values() {
        let table = totients_up_to(20);
        assert_eq!(table.len(), 21);
        assert_eq!(table[0], 0);
        assert_eq!(&table[1..], &PHI_1_TO_20);
    }

    #[test]
    fn test_totients_up_to_zero() {
        assert_eq!(totients_up_to(0), vec![0]);
    }

    #[test]
    fn test_totients_iterator_matches_table() {
        let table = totients_up_to(1_000);
        let stepped: Vec<u64> = Totients::new(1_000).collect();
        assert_eq!(stepped, &table[1..]);
    }

    #[test]
    fn test_totients_iterator_len_and_fuse() {
        let mut it = Totients::new(3);
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(Totients::new(0).next(), None);
    }
}
