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

//! # Numeric Foundations
//!
//! Integer-centric helpers written against `num_traits::PrimInt` so the same
//! code serves every primitive width, with `num_bigint` counterparts where a
//! result routinely outgrows 128 bits.
//!
//! ## Submodules
//!
//! - `arith`: Euclidean `modulo`, floor `int_div`, checked and
//!   arbitrary-precision factorials.
//! - `digits`: Least-significant-first digit decomposition and recomposition,
//!   number reversal, palindrome tests.
//! - `primes`: Sieve of Eratosthenes (`prime_table`, `sieve`), trial-division
//!   `prime_factors`, and divisor pairs (`factors`).
//! - `totient`: Euler's totient by coprimality counting, by the product
//!   formula, as a full table, and as a lazy iterator.
//! - `modular`: Modular inverse, Chinese remainder theorem, and modular
//!   exponentiation.

pub mod arith;
pub mod digits;
pub mod modular;
pub mod primes;
pub mod totient;
