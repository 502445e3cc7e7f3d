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

//! # Sundry Sequences
//!
//! Lazy, restartable sequences and the generators built on top of them.
//!
//! A [`sequence::Sequence`] is a factory: every call to `iter()` hands out a
//! fresh iterator positioned at the start, so a composed pipeline can be
//! walked as many times as needed. Plain iterators remain the single-pass
//! currency the consumers in [`sequence::consume`] work with.
//!
//! ## Modules
//!
//! - [`sequence`]: the `Sequence` trait, its sources and combinators, and the
//!   consumers that drain iterators.
//! - [`combinatorics`]: ordered tuples with repetition, Cartesian products and
//!   contiguous sub-sequences.
//! - [`range`]: half-open integer ranges with a step.

pub mod combinatorics;
pub mod range;
pub mod sequence;
