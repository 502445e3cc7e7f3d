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

//! # Decimal Digits
//!
//! Decomposes integers into base-10 digits and rebuilds them. Digits are
//! always ordered least significant first, so `123` becomes `[3, 2, 1]` and
//! index `i` carries weight `10^i`.
//!
//! Zero decomposes into an empty digit list (pad it if a leading `0` is
//! wanted), which keeps `number_from_digits(digits_of(n))` an exact
//! round-trip for every non-negative `n`.
//!
//! The `_big` variants work on `num_bigint::BigInt` and return digits as `u8`.

use num_bigint::{BigInt, Sign};
use num_traits::{PrimInt, Zero};
use thiserror::Error;

/// The error type for digit decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitsError {
    /// The input was negative; only non-negative numbers have a digit expansion here.
    #[error("Invalid argument, number must be non-negative")]
    Negative,
}

#[inline(always)]
fn ten<T>() -> T
where
    T: PrimInt,
{
    let two = T::one() + T::one();
    let five = two + two + T::one();
    two * five
}

/// Returns the decimal digits of `n`, least significant first.
///
/// If `pad` is given the result is extended with zeros until it has at least
/// `pad` digits.
///
/// # Errors
///
/// Returns [`DigitsError::Negative`] if `n < 0`.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::digits::digits_of;
/// assert_eq!(digits_of(123, None), Ok(vec![3, 2, 1]));
/// assert_eq!(digits_of(7u8, Some(3)), Ok(vec![7, 0, 0]));
/// assert!(digits_of(-4, None).is_err());
/// ```
pub fn digits_of<T>(n: T, pad: Option<usize>) -> Result<Vec<T>, DigitsError>
where
    T: PrimInt,
{
    if n < T::zero() {
        return Err(DigitsError::Negative);
    }

    let ten = ten::<T>();
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > T::zero() {
        digits.push(rest % ten);
        rest = rest / ten;
    }

    match pad {
        Some(pad) if digits.len() < pad => digits.resize(pad, T::zero()),
        _ => {}
    }
    Ok(digits)
}

/// Rebuilds a number from least-significant-first digits.
///
/// Overflow behaves like ordinary arithmetic on `T` (it panics in debug builds).
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::digits::number_from_digits;
/// assert_eq!(number_from_digits(&[3, 2, 1]), 123);
/// assert_eq!(number_from_digits::<u32>(&[]), 0);
/// ```
#[inline]
pub fn number_from_digits<T>(digits: &[T]) -> T
where
    T: PrimInt,
{
    let ten = ten::<T>();
    digits
        .iter()
        .rev()
        .fold(T::zero(), |acc, &digit| acc * ten + digit)
}

/// Reverses the decimal digits of `n` (`1230` becomes `321`).
///
/// # Errors
///
/// Returns [`DigitsError::Negative`] if `n < 0`.
pub fn reverse_number<T>(n: T) -> Result<T, DigitsError>
where
    T: PrimInt,
{
    let mut digits = digits_of(n, None)?;
    digits.reverse();
    Ok(number_from_digits(&digits))
}

#[inline(always)]
fn is_symmetric<T: PartialEq>(digits: &[T]) -> bool {
    digits.iter().eq(digits.iter().rev())
}

/// Returns `true` if `n` reads the same in both directions.
///
/// Negative numbers are never palindromes.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::num::digits::is_palindrome;
/// assert!(is_palindrome(906_609));
/// assert!(!is_palindrome(123_456));
/// ```
pub fn is_palindrome<T>(n: T) -> bool
where
    T: PrimInt,
{
    digits_of(n, None).is_ok_and(|digits| is_symmetric(&digits))
}

/// Arbitrary-precision counterpart of [`digits_of`].
///
/// # Errors
///
/// Returns [`DigitsError::Negative`] if `n < 0`.
pub fn digits_of_big(n: &BigInt, pad: Option<usize>) -> Result<Vec<u8>, DigitsError> {
    let (sign, mut digits) = n.to_radix_le(10);
    if sign == Sign::Minus {
        return Err(DigitsError::Negative);
    }
    if n.is_zero() {
        digits.clear();
    }

    match pad {
        Some(pad) if digits.len() < pad => digits.resize(pad, 0),
        _ => {}
    }
    Ok(digits)
}

/// Arbitrary-precision counterpart of [`number_from_digits`].
pub fn number_from_digits_big(digits: &[u8]) -> BigInt {
    digits
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, &digit| acc * 10u32 + digit)
}

/// Arbitrary-precision counterpart of [`reverse_number`].
///
/// # Errors
///
/// Returns [`DigitsError::Negative`] if `n < 0`.
pub fn reverse_big(n: &BigInt) -> Result<BigInt, DigitsError> {
    let mut digits = digits_of_big(n, None)?;
    digits.reverse();
    Ok(number_from_digits_big(&digits))
}

/// Arbitrary-precision counterpart of [`is_palindrome`].
pub fn is_palindrome_big(n: &BigInt) -> bool {
    digits_of_big(n, None).is_ok_and(|digits| is_symmetric(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digits_of_is_least_significant_first() {
        assert_eq!(digits_of(123, None), Ok(vec![3, 2, 1]));
        assert_eq!(digits_of(1000u64, None), Ok(vec![0, 0, 0, 1]));
    }

    #[test]
    fn test_digits_of_zero_is_empty_unless_padded() {
        assert_eq!(digits_of(0, None), Ok(vec![]));
        assert_eq!(digits_of(0, Some(2)), Ok(vec![0, 0]));
    }

    #[test]
    fn test_digits_of_padding_never_truncates() {
        assert_eq!(digits_of(12345, Some(3)), Ok(vec![5, 4, 3, 2, 1]));
        assert_eq!(digits_of(45, Some(4)), Ok(vec![5, 4, 0, 0]));
    }

    #[test]
    fn test_digits_of_negative_fails() {
        assert_eq!(digits_of(-1i32, None), Err(DigitsError::Negative));
        assert_eq!(
            DigitsError::Negative.to_string(),
            "Invalid argument, number must be non-negative"
        );
    }

    #[test]
    fn test_number_from_digits() {
        assert_eq!(number_from_digits(&[3, 2, 1]), 123);
        assert_eq!(number_from_digits(&[0, 0, 1]), 100);
        // Trailing zeros are leading zeros of the number and vanish.
        assert_eq!(number_from_digits(&[7, 0, 0]), 7);
    }

    #[test]
    fn test_reverse_number() {
        assert_eq!(reverse_number(1230), Ok(321));
        assert_eq!(reverse_number(5u8), Ok(5));
        assert_eq!(reverse_number(-12), Err(DigitsError::Negative));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(0));
        assert!(is_palindrome(9));
        assert!(is_palindrome(121));
        assert!(is_palindrome(10_988_901u64));
        assert!(!is_palindrome(40));
        assert!(!is_palindrome(-121));
    }

    #[test]
    fn test_big_digits_round_trip() {
        let n: BigInt = "98765432109876543210987654321".parse().unwrap();
        let digits = digits_of_big(&n, None).unwrap();
        assert_eq!(digits.len(), 29);
        assert_eq!(digits[0], 1);
        assert_eq!(number_from_digits_big(&digits), n);
    }

    #[test]
    fn test_big_zero_and_negative() {
        assert_eq!(digits_of_big(&BigInt::zero(), None), Ok(vec![]));
        assert_eq!(digits_of_big(&BigInt::zero(), Some(1)), Ok(vec![0]));
        assert_eq!(
            digits_of_big(&BigInt::from(-3), None),
            Err(DigitsError::Negative)
        );
    }

    #[test]
    fn test_big_reverse_and_palindrome() {
        let n: BigInt = "12345678901234567890".parse().unwrap();
        let expected: BigInt = "9876543210987654321".parse().unwrap();
        assert_eq!(reverse_big(&n), Ok(expected));

        let pal: BigInt = "123456789987654321".parse().unwrap();
        assert!(is_palindrome_big(&pal));
        assert!(!is_palindrome_big(&n));
    }

    proptest! {
        #[test]
        fn prop_digits_round_trip(n in 0u64..u64::MAX) {
            let digits = digits_of(n, None).unwrap();
            prop_assert!(digits.iter().all(|&d| d < 10));
            prop_assert_eq!(number_from_digits(&digits), n);
        }

        #[test]
        fn prop_big_digits_agree_with_fixed_width(n in 0u64..u64::MAX) {
            let fixed: Vec<u8> = digits_of(n, None).unwrap().into_iter().map(|d| d as u8).collect();
            prop_assert_eq!(digits_of_big(&BigInt::from(n), None).unwrap(), fixed);
        }
    }
}
