//! Error type shared by the matrix builder, the problem front ends and the CLI.
//!
//! Finding no exact cover is not an error: [`solve`](crate::solve) reports it as `None`.

use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong while building or reading a problem
#[derive(Debug)]
pub enum Error {
    /// Option refers to an item outside `1..=items`
    ItemOutOfRange {
        /// The offending item number
        item: usize,
        /// Number of items in the matrix
        items: usize,
    },

    /// Option lists the same item more than once
    RepeatedItem {
        /// The repeated item number
        item: usize,
    },

    /// Item name declared twice in a text problem header
    DuplicateItemName {
        /// The repeated name
        name: String,
    },

    /// Option line of a text problem names an item missing from the header
    UnknownItem {
        /// The unknown name
        name: String,
        /// 1-based input line
        line: usize,
    },

    /// Option line of a text problem names the same item twice
    RepeatedItemName {
        /// The repeated name
        name: String,
        /// 1-based input line
        line: usize,
    },

    /// Sudoku grid is not exactly 81 characters long
    PuzzleLength {
        /// Number of characters received
        len: usize,
    },

    /// Two givens of a Sudoku grid put the same digit in one row, column or box
    ConflictingGiven {
        /// 0-based row of the second given
        row: usize,
        /// 0-based column of the second given
        col: usize,
        /// The digit, 1-9
        digit: u8,
    },

    /// No puzzle was given on the command line or on standard input
    MissingPuzzle,

    /// Reading input or writing the solution failed
    Io {
        /// File being read, if the error concerns one
        path: Option<PathBuf>,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemOutOfRange { item, items } => {
                write!(f, "Item {item} is out of range (items are 1..={items})")
            }
            Self::RepeatedItem { item } => write!(f, "Item {item} appears twice in one option"),
            Self::DuplicateItemName { name } => write!(f, "Item '{name}' is declared twice"),
            Self::UnknownItem { name, line } => {
                write!(f, "Line {line}: item '{name}' not in input")
            }
            Self::RepeatedItemName { name, line } => {
                write!(f, "Line {line}: item '{name}' appears twice")
            }
            Self::PuzzleLength { len } => {
                write!(f, "Puzzle must have 81 cells, got {len}")
            }
            Self::ConflictingGiven { row, col, digit } => write!(
                f,
                "Given {digit} at row {} column {} conflicts with another given",
                row + 1,
                col + 1
            ),
            Self::MissingPuzzle => write!(f, "No puzzle given"),
            Self::Io { path, source } => match path {
                Some(path) => write!(f, "Failed to read '{}': {source}", path.display()),
                None => write!(f, "I/O error: {source}"),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            source: err,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
