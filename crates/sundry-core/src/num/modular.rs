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

//! # Modular Arithmetic
//!
//! Modular inverse via the extended Euclidean algorithm, the Chinese
//! remainder theorem over pairwise coprime moduli, and square-and-multiply
//! exponentiation.
//!
//! The signed routines are generic over `PrimInt + Signed`; intermediate
//! products are checked, and an overflow surfaces as `None` rather than a
//! wrong residue.

use crate::num::arith::modulo;
use num_traits::{PrimInt, Signed};

/// Returns `x` in `[0, m)` with `a * x ≡ 1 (mod m)`.
///
/// Returns `None` if `m <= 0` or `gcd(a, m) != 1`. Every value is its own
/// inverse modulo 1, which yields `Some(0)`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::modular::mod_inverse;
/// assert_eq!(mod_inverse(3, 11), Some(4));
/// assert_eq!(mod_inverse(-3i64, 11), Some(7));
/// assert_eq!(mod_inverse(6, 9), None);
/// ```
pub fn mod_inverse<T>(a: T, m: T) -> Option<T>
where
    T: PrimInt + Signed,
{
    if m <= T::zero() {
        return None;
    }
    if m == T::one() {
        return Some(T::zero());
    }

    let (mut old_r, mut r) = (modulo(a, m), m);
    let (mut old_s, mut s) = (T::one(), T::zero());
    while r != T::zero() {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != T::one() {
        return None;
    }
    Some(modulo(old_s, m))
}

/// Solves `x ≡ residues[i] (mod moduli[i])` for all `i`, returning the
/// smallest non-negative solution.
///
/// The moduli must be positive and pairwise coprime. Returns `None` if the
/// slices differ in length, any modulus is not positive, a modulus is not
/// invertible against the product of the others, or an intermediate product
/// overflows `T`. The empty system is solved by `0`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::modular::chinese_remainder;
/// // x ≡ 2 (mod 3), x ≡ 3 (mod 5), x ≡ 2 (mod 7)
/// assert_eq!(chinese_remainder(&[2, 3, 2], &[3, 5, 7]), Some(23));
/// ```
pub fn chinese_remainder<T>(residues: &[T], moduli: &[T]) -> Option<T>
where
    T: PrimInt + Signed,
{
    if residues.len() != moduli.len() || moduli.iter().any(|&m| m <= T::zero()) {
        return None;
    }

    let product = moduli
        .iter()
        .try_fold(T::one(), |acc, &m| acc.checked_mul(&m))?;

    let mut result = T::zero();
    for (&residue, &m) in residues.iter().zip(moduli) {
        let partial = product / m;
        let inverse = mod_inverse(partial, m)?;
        let weight = modulo(modulo(residue, m).checked_mul(&inverse)?, m);
        let term = weight.checked_mul(&partial)?;
        result = modulo(result.checked_add(&term)?, product);
    }
    Some(result)
}

/// Computes `base^exp mod m` by square-and-multiply.
///
/// # Panics
///
/// Panics if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::modular::mod_pow;
/// assert_eq!(mod_pow(7, 3, 20_201_227), 343);
/// assert_eq!(mod_pow(2, 10, 1_000), 24);
/// ```
pub fn mod_pow(base: u64, exp: u64, m: u64) -> u64 {
    assert!(m != 0, "called `mod_pow` with a zero modulus");

    let m = u128::from(m);
    let mut result = 1u128 % m;
    let mut base = u128::from(base) % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}
