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

//! # Sundry Collections
//!
//! Associative containers and caches built on `rustc-hash`'s `FxHashMap`.
//!
//! ## Modules
//!
//! - [`multi_map`]: a map keyed by fixed-length key tuples, stored as nested
//!   single-key maps.
//! - [`memo`]: caller-owned memoization caches for single and multi-key
//!   functions.
//! - [`default_map`]: a map that answers absent keys with a derived default.
//! - [`set`]: union and intersection of hash sets.
//! - [`count`]: occurrence counting.

pub mod count;
pub mod default_map;
pub mod memo;
pub mod multi_map;
pub mod set;
