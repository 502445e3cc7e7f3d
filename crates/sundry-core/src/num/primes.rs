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

//! # Primes and Divisors
//!
//! A sieve of Eratosthenes backed by `FixedBitSet`, trial-division prime
//! factorization, and proper divisor enumeration.
//!
//! Factorization accepts a caller-supplied prime list. Passing one computed
//! once with [`sieve`] is the intended usage when factoring many numbers;
//! [`prime_factors`] recomputes a sieve on every call.

use fixedbitset::FixedBitSet;

/// Returns a bit set where bit `i` is set iff `i` is prime, for all `i < max`.
///
/// Composite marking starts at `p * p` and stops once `p * p >= max`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::primes::prime_table;
/// let table = prime_table(10);
/// assert!(table.contains(7));
/// assert!(!table.contains(9));
/// ```
pub fn prime_table(max: usize) -> FixedBitSet {
    let mut table = FixedBitSet::with_capacity(max);
    if max <= 2 {
        return table;
    }

    table.insert_range(2..);
    let mut p = 2usize;
    while p * p < max {
        if table.contains(p) {
            let mut multiple = p * p;
            while multiple < max {
                table.set(multiple, false);
                multiple += p;
            }
        }
        p += 1;
    }
    table
}

/// Returns all primes strictly below `max`, in ascending order.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::primes::sieve;
/// assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(sieve(2).is_empty());
/// ```
pub fn sieve(max: usize) -> Vec<u64> {
    let table = prime_table(max);
    let primes: Vec<u64> = table.ones().map(|p| p as u64).collect();
    log::debug!("sieve: {} primes below {}", primes.len(), max);
    primes
}

/// Factors `n` by trial division against `primes`, smallest factor first.
///
/// `primes` must be ascending. Whatever remains once the list is exhausted
/// (or once the next prime exceeds the square root of the remainder) is
/// appended as a final factor, so a short list yields a correct but possibly
/// composite last entry.
///
/// Zero and one have no prime factors.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::primes::{prime_factors_with, sieve};
/// assert_eq!(prime_factors_with(28, &sieve(28)), vec![2, 2, 7]);
/// ```
pub fn prime_factors_with(n: u64, primes: &[u64]) -> Vec<u64> {
    debug_assert!(
        primes.windows(2).all(|w| w[0] < w[1]),
        "called `prime_factors_with` with a prime list that is not strictly ascending"
    );

    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut rest = n;
    for &p in primes {
        if p.saturating_mul(p) > rest {
            break;
        }
        while rest % p == 0 {
            factors.push(p);
            rest /= p;
        }
    }
    if rest != 1 {
        factors.push(rest);
    }
    factors
}

/// Factors `n`, sieving the primes it needs on every call.
///
/// Prefer [`prime_factors_with`] with a shared prime list in loops.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::primes::prime_factors;
/// assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
/// assert_eq!(prime_factors(97), vec![97]);
/// ```
pub fn prime_factors(n: u64) -> Vec<u64> {
    let bound = usize::try_from(n.isqrt()).map_or(usize::MAX, |r| r.saturating_add(1));
    prime_factors_with(n, &sieve(bound))
}

/// Returns the proper divisors of `n`: `1` followed by each pair
/// `(i, n / i)` for `2 <= i <= sqrt(n)`. A square root appears once.
///
/// Zero and one have no proper divisors.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::primes::factors;
/// assert_eq!(factors(12), vec![1, 2, 6, 3, 4]);
/// assert_eq!(factors(16), vec![1, 2, 8, 4]);
/// ```
pub fn factors(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let mut out = vec![1];
    for i in 2..=n.isqrt() {
        if n % i == 0 {
            out.push(i);
            let pair = n / i;
            if pair != i {
                out.push(pair);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_30() {
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_sieve_excludes_max() {
        assert_eq!(sieve(7), vec![2, 3, 5]);
        assert_eq!(sieve(8), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_sieve_tiny_bounds() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
        assert!(sieve(2).is_empty());
        assert_eq!(sieve(3), vec![2]);
    }

    #[test]
    fn test_prime_table_matches_trial_division() {
        let table = prime_table(500);
        for n in 0..500usize {
            let expected = n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(table.contains(n), expected, "mismatch at {n}");
        }
    }

    #[test]
    fn test_prime_table_square_of_prime_is_marked() {
        // 49 is only caught because marking runs while p * p < max.
        let table = prime_table(50);
        assert!(!table.contains(49));
        assert!(table.contains(47));
    }

    #[test]
    fn test_prime_factors_with_sieve() {
        assert_eq!(prime_factors_with(28, &sieve(28)), vec![2, 2, 7]);
        assert_eq!(prime_factors_with(2, &sieve(2)), vec![2]);
    }

    #[test]
    fn test_prime_factors_with_short_list_keeps_remainder() {
        // 11 * 13 is left over once the list runs out.
        assert_eq!(prime_factors_with(4 * 143, &[2, 3, 5]), vec![2, 2, 143]);
    }

    #[test]
    fn test_prime_factors_small_inputs() {
        assert!(prime_factors(0).is_empty());
        assert!(prime_factors(1).is_empty());
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(4), vec![2, 2]);
    }

    #[test]
    fn test_prime_factors_product_restores_input() {
        for n in 2..2_000u64 {
            let product: u64 = prime_factors(n).iter().product();
            assert_eq!(product, n);
        }
    }

    #[test]
    fn test_factors() {
        assert!(factors(0).is_empty());
        assert!(factors(1).is_empty());
        assert_eq!(factors(7), vec![1]);
        assert_eq!(factors(15), vec![1, 3, 5]);
        assert_eq!(factors(36), vec![1, 2, 18, 3, 12, 4, 9, 6]);
    }
}
