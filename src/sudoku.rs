//! # Sudoku as exact cover
//!
//! A 9x9 Sudoku is an exact cover problem with 324 items in four families of 81: every cell holds
//! one digit, and every row, column and 3x3 box holds each digit once. Placing digit `d` in a cell
//! is an option covering exactly one item of each family.
//!
//! Givens are applied before the search rather than as options: the constraints they satisfy get
//! no item at all, and placements that would clash with a given get no option. A completely filled
//! grid therefore reduces to a problem without items.

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixBuilder};
use crate::Producer;

/// Number of cells in a grid.
pub const CELLS: usize = 81;

const CONSTRAINTS: usize = 4 * CELLS;

#[derive(Copy, Clone, Debug)]
enum Family {
    Cell,
    Row,
    Column,
    Box,
}

const FAMILIES: [Family; 4] = [Family::Cell, Family::Row, Family::Column, Family::Box];

/// Index in `0..324` of the constraint of `family` satisfied by `digit` (1-9) in `cell`.
fn constraint(family: Family, cell: usize, digit: u8) -> usize {
    let (row, col) = (cell / 9, cell % 9);
    let digit = usize::from(digit - 1);
    match family {
        Family::Cell => cell,
        Family::Row => CELLS + row * 9 + digit,
        Family::Column => 2 * CELLS + col * 9 + digit,
        Family::Box => 3 * CELLS + (row / 3 * 3 + col / 3) * 9 + digit,
    }
}

#[derive(Copy, Clone, Debug)]
struct Placement {
    cell: usize,
    digit: u8,
}

/// A Sudoku puzzle reduced to an exact cover [`Matrix`].
#[derive(Debug)]
pub struct Sudoku {
    /// digit per cell, 0 for blanks
    givens: [u8; CELLS],
    /// placement behind each option, by option index
    placements: Vec<Placement>,
    matrix: Matrix,
}

impl Sudoku {
    /// Reads a puzzle of 81 characters in row-major order starting at the top left cell. The
    /// characters `1` to `9` are givens; anything else is a blank.
    ///
    /// # Errors
    ///
    /// [`Error::PuzzleLength`] unless the puzzle has exactly 81 characters, and
    /// [`Error::ConflictingGiven`] if two givens repeat a digit in a row, column or box.
    pub fn parse(puzzle: &str) -> Result<Self> {
        let len = puzzle.chars().count();
        if len != CELLS {
            return Err(Error::PuzzleLength { len });
        }

        let mut givens = [0; CELLS];
        let mut satisfied = [false; CONSTRAINTS];
        for (cell, ch) in puzzle.chars().enumerate() {
            let Ok(ascii @ b'1'..=b'9') = u8::try_from(ch) else {
                continue;
            };
            let digit = ascii - b'0';
            trace!("given {digit} at cell {cell}");
            for family in FAMILIES {
                let c = constraint(family, cell, digit);
                if std::mem::replace(&mut satisfied[c], true) {
                    return Err(Error::ConflictingGiven {
                        row: cell / 9,
                        col: cell % 9,
                        digit,
                    });
                }
            }
            givens[cell] = digit;
        }

        // item number per open constraint, 0 for the ones the givens already satisfy
        let mut items = [0; CONSTRAINTS];
        let mut n_items = 0;
        for (c, &done) in satisfied.iter().enumerate() {
            if !done {
                n_items += 1;
                items[c] = n_items;
            }
        }

        let mut builder = MatrixBuilder::new(n_items);
        let mut placements = Vec::new();
        for cell in 0..CELLS {
            for digit in 1..=9 {
                let option = FAMILIES.map(|family| items[constraint(family, cell, digit)]);
                if option.contains(&0) {
                    continue;
                }
                builder.add_option(&option)?;
                placements.push(Placement { cell, digit });
            }
        }

        debug!(
            "sudoku with {} givens reduced to {n_items} items and {} options",
            givens.iter().filter(|&&d| d != 0).count(),
            placements.len()
        );
        Ok(Self {
            givens,
            placements,
            matrix: builder.build(),
        })
    }

    /// Solves the puzzle, returning the completed grid or `None` if it has no solution.
    #[must_use]
    pub fn solve(mut self) -> Option<Grid> {
        let solution = self.search()?;
        let mut digits = self.givens;
        for option in solution {
            let Placement { cell, digit } = self.placements[self.matrix.option_index(option)];
            digits[cell] = digit;
        }
        Some(Grid(digits))
    }
}

impl Producer for Sudoku {
    fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }
}

/// A solved grid.
///
/// [`Display`](fmt::Display) draws it as nine rows with box separators; use
/// [`to_line`](Self::to_line) for the 81 character form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid([u8; CELLS]);

impl Grid {
    /// Digit (1-9) at `row` and `col`, both 0-based.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row * 9 + col]
    }

    /// The grid as 81 digits in row-major order.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, digits) in self.0.chunks(9).enumerate() {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &d) in digits.iter().enumerate() {
                match col {
                    0 => {}
                    3 | 6 => write!(f, " | ")?,
                    _ => write!(f, " ")?,
                }
                write!(f, "{d}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
