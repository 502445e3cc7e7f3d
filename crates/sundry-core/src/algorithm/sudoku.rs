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

//! # Sudoku
//!
//! A 9x9 board is a row-major `[[u8; 9]; 9]` with `0` marking an empty cell.
//!
//! [`solve`] fills the first empty cell (scanning rows top to bottom) with each
//! of its candidates in ascending order and recurses on a copy, returning the
//! first complete board it reaches. Givens are trusted as-is.

/// A row-major 9x9 board; `0` is an empty cell.
pub type Board = [[u8; 9]; 9];

const ALL_DIGITS: u16 = 0b11_1111_1110;

#[inline(always)]
fn candidate_mask(board: &Board, row: usize, col: usize) -> u16 {
    let box_row = 3 * (row / 3);
    let box_col = 3 * (col / 3);
    let mut mask = ALL_DIGITS;
    for i in 0..9 {
        mask &= !(1 << board[row][i]);
        mask &= !(1 << board[i][col]);
        mask &= !(1 << board[box_row + i / 3][box_col + i % 3]);
    }
    mask & ALL_DIGITS
}

/// Returns the digits that can be placed at `(row, col)` without repeating a
/// digit in its row, column or 3x3 box, in ascending order.
///
/// # Panics
///
/// Panics if `row` or `col` is not below 9, or if the board holds a value
/// above 9.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::algorithm::sudoku::{choices, Board};
/// let mut board: Board = [[0; 9]; 9];
/// board[0] = [0, 2, 3, 4, 5, 6, 7, 8, 0];
/// assert_eq!(choices(&board, 0, 0), vec![1, 9]);
/// ```
pub fn choices(board: &Board, row: usize, col: usize) -> Vec<u8> {
    debug_assert!(
        board.iter().flatten().all(|&v| v <= 9),
        "called `sudoku::choices` with a board holding a value above 9"
    );

    let mask = candidate_mask(board, row, col);
    (1..=9u8).filter(|&d| mask & (1 << d) != 0).collect()
}

#[inline(always)]
fn first_empty(board: &Board) -> Option<(usize, usize)> {
    (0..81)
        .map(|i| (i / 9, i % 9))
        .find(|&(r, c)| board[r][c] == 0)
}

fn backtrack(board: &Board, nodes: &mut u64) -> Option<Board> {
    *nodes += 1;
    let Some((row, col)) = first_empty(board) else {
        return Some(*board);
    };

    choices(board, row, col).into_iter().find_map(|digit| {
        let mut next = *board;
        next[row][col] = digit;
        backtrack(&next, nodes)
    })
}

/// Solves `board`, returning the completed grid or `None` if no assignment of
/// the empty cells works.
///
/// # Examples
///
/// ```rust
/// # use sundry_core::algorithm::sudoku::{solve, Board};
/// let empty: Board = [[0; 9]; 9];
/// let solved = solve(&empty).unwrap();
/// assert_eq!(solved[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn solve(board: &Board) -> Option<Board> {
    let mut nodes = 0u64;
    let solution = backtrack(board, &mut nodes);
    log::debug!(
        "sudoku: {} after visiting {} nodes",
        if solution.is_some() { "solved" } else { "exhausted" },
        nodes
    );
    solution
}
