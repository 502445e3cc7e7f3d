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

//! Integer extraction from free-form text.

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Returns every run of ASCII digits in `text`, parsed, in order of appearance.
///
/// Signs are not recognised, so `"-12"` yields `12`. Runs too long for a `u64`
/// are skipped.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::text::pick_ints;
/// assert_eq!(pick_ints("move 3 from 12 to 7"), vec![3, 12, 7]);
/// assert!(pick_ints("no numbers here").is_empty());
/// ```
pub fn pick_ints(text: &str) -> Vec<u64> {
    DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_ints_basic() {
        assert_eq!(pick_ints("1-3 a: abcde"), vec![1, 3]);
        assert_eq!(pick_ints("x=495, y=-12"), vec![495, 12]);
    }

    #[test]
    fn test_pick_ints_ignores_non_ascii_digits_and_overflow() {
        assert_eq!(pick_ints("٣ and 4"), vec![4]);
        assert_eq!(pick_ints("99999999999999999999999 1"), vec![1]);
    }

    #[test]
    fn test_pick_ints_empty() {
        assert!(pick_ints("").is_empty());
    }
}
