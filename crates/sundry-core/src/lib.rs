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

//! # Sundry Core
//!
//! Number theory primitives and small search helpers shared by the Sundry
//! crates. Everything here is a pure function over caller-owned data; nothing
//! keeps global state.
//!
//! ## Modules
//!
//! - `num`: Euclidean modulo and floor division, factorials, decimal digit
//!   decomposition (fixed width and arbitrary precision), palindromes, the
//!   sieve of Eratosthenes, prime factorization, divisors, Euler's totient,
//!   and modular inverse / Chinese remainder / modular exponentiation.
//! - `algorithm`: Floor binary search over keyed slices, range predicates,
//!   match counting, and a backtracking Sudoku solver.
//! - `text`: Extraction of unsigned integers embedded in free text.
//!
//! ## Errors
//!
//! Only digit decomposition can fail (negative input); it reports
//! [`num::digits::DigitsError`]. Everything else signals absence with
//! `Option`.

pub mod algorithm;
pub mod num;
pub mod text;
