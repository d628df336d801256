#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![deny(rustdoc::broken_intra_doc_links, unsafe_code)]

pub mod cli;
mod cover;
pub mod error;
mod links;
mod matrix;
mod search;
mod select;
pub mod sudoku;
pub mod text;

pub use error::{Error, Result};
pub use matrix::{CellKind, Matrix, MatrixBuilder, OptionCell};
pub use search::solve;

/// A concrete problem that owns the [`Matrix`] it was reduced to.
///
/// Implementors build the matrix with [`MatrixBuilder`] and translate the chosen
/// [`OptionCell`]s back into their own terms, typically with [`Matrix::option_index`].
pub trait Producer {
    /// The matrix the problem was reduced to.
    fn matrix(&self) -> &Matrix;

    /// Mutable access for the search. Nothing else should touch the matrix while a search runs.
    fn matrix_mut(&mut self) -> &mut Matrix;

    /// Runs [`solve`] on the problem's matrix.
    fn search(&mut self) -> Option<Vec<OptionCell>> {
        solve(self.matrix_mut())
    }
}
