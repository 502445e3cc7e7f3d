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

//! # Integer Arithmetic
//!
//! Division helpers with mathematical (rather than truncating) semantics, and
//! factorials in both checked fixed-width and arbitrary-precision form.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::PrimInt;

/// Euclidean modulo: the result is never negative for a positive modulus.
///
/// Rust's `%` truncates toward zero, so `-1 % 5 == -1`. `modulo` instead
/// returns the representative in `[0, |m|)`.
///
/// # Panics
///
/// Panics if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::arith::modulo;
/// assert_eq!(modulo(-1, 5), 4);
/// assert_eq!(modulo(7, 5), 2);
/// assert_eq!(modulo(-5, 5), 0);
/// ```
#[inline]
pub fn modulo<T>(n: T, m: T) -> T
where
    T: PrimInt,
{
    let r = n % m;
    if r < T::zero() {
        if m < T::zero() { r - m } else { r + m }
    } else {
        r
    }
}

/// Floor division, rounding toward negative infinity.
///
/// # Panics
///
/// Panics if `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::arith::int_div;
/// assert_eq!(int_div(7, 2), 3);
/// assert_eq!(int_div(-7, 2), -4);
/// ```
#[inline]
pub fn int_div<T>(a: T, b: T) -> T
where
    T: PrimInt + Integer,
{
    a.div_floor(&b)
}

/// Computes `n!`, returning `None` if the result does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::arith::factorial;
/// assert_eq!(factorial::<u64>(5), Some(120));
/// assert_eq!(factorial::<u8>(6), None);
/// ```
#[inline]
pub fn factorial<T>(n: u32) -> Option<T>
where
    T: PrimInt,
{
    (2..=n).try_fold(T::one(), |acc, i| acc.checked_mul(&num_traits::cast(i)?))
}

/// Computes `n!` without overflow.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::arith::factorial_big;
/// assert_eq!(factorial_big(25).to_string(), "15511210043330985984000000");
/// ```
pub fn factorial_big(n: u32) -> BigUint {
    (2..=n).map(BigUint::from).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_positive_operand() {
        assert_eq!(modulo(7, 5), 2);
        assert_eq!(modulo(10, 5), 0);
        assert_eq!(modulo(3u32, 5u32), 3);
    }

    #[test]
    fn test_modulo_negative_operand() {
        assert_eq!(modulo(-1, 5), 4);
        assert_eq!(modulo(-6i64, 5), 4);
        // An exact multiple maps to zero, not to the modulus.
        assert_eq!(modulo(-5, 5), 0);
    }

    #[test]
    fn test_modulo_negative_modulus() {
        assert_eq!(modulo(-1, -5), 4);
        assert_eq!(modulo(7, -5), 2);
    }

    #[test]
    fn test_int_div_rounds_down() {
        assert_eq!(int_div(9, 3), 3);
        assert_eq!(int_div(10, 3), 3);
        assert_eq!(int_div(-10, 3), -4);
        assert_eq!(int_div(10, -3), -4);
        assert_eq!(int_div(123u32, 10u32), 12);
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial::<u32>(0), Some(1));
        assert_eq!(factorial::<u32>(1), Some(1));
        assert_eq!(factorial::<u32>(10), Some(3_628_800));
        assert_eq!(factorial::<u64>(20), Some(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_overflow_is_none() {
        assert_eq!(factorial::<u64>(21), None);
        assert_eq!(factorial::<i8>(6), None);
        assert_eq!(factorial::<i8>(5), Some(120));
    }

    #[test]
    fn test_factorial_big_matches_checked() {
        for n in 0..=20 {
            let small = factorial::<u64>(n).unwrap();
            assert_eq!(factorial_big(n), BigUint::from(small));
        }
    }
}
