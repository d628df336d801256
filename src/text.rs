//! Generic text format for exact cover problems.
//!
//! The first line names the items, separated by whitespace. Every following line is an option
//! listing the names of the items it covers. Input ends at the first blank line or at end of file.
//!
//! ```text
//! a b c
//! a b
//! b c
//! a c
//! a b c
//! ```

use std::collections::HashMap;
use std::io::BufRead;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixBuilder};
use crate::Producer;

/// An exact cover problem read from the text format, remembering the text of each option.
#[derive(Debug)]
pub struct TextProblem {
    items: Vec<String>,
    options: Vec<String>,
    matrix: Matrix,
}

impl TextProblem {
    /// Reads a problem from `reader`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if reading fails, [`Error::DuplicateItemName`] if the header repeats a name,
    /// [`Error::UnknownItem`] if an option names an item missing from the header and
    /// [`Error::RepeatedItemName`] if an option names the same item twice.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_hint(reader, 0)
    }

    /// Like [`from_reader`](Self::from_reader), reserving room for `option_hint` options up front.
    ///
    /// # Errors
    ///
    /// Same as [`from_reader`](Self::from_reader).
    pub fn from_reader_with_hint<R: BufRead>(reader: R, option_hint: usize) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        let items: Vec<String> = header.split_whitespace().map(str::to_owned).collect();
        let mut index = HashMap::with_capacity(items.len());
        for (i, name) in items.iter().enumerate() {
            if index.insert(name.as_str(), i + 1).is_some() {
                return Err(Error::DuplicateItemName { name: name.clone() });
            }
        }

        let mut builder = MatrixBuilder::new(items.len());
        builder.reserve(option_hint, option_hint.saturating_mul(2));
        let mut options = Vec::new();
        if options.try_reserve(option_hint).is_err() {
            warn!("ignoring option count {option_hint}: cannot reserve that much");
        }
        let mut row = Vec::new();
        for (n, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                break;
            }
            row.clear();
            for name in line.split_whitespace() {
                let Some(&item) = index.get(name) else {
                    return Err(Error::UnknownItem {
                        name: name.to_owned(),
                        line: n + 2,
                    });
                };
                if row.contains(&item) {
                    return Err(Error::RepeatedItemName {
                        name: name.to_owned(),
                        line: n + 2,
                    });
                }
                row.push(item);
            }
            builder.add_option(&row)?;
            options.push(line);
        }

        debug!("read {} items and {} options", items.len(), options.len());
        Ok(Self {
            items,
            options,
            matrix: builder.build(),
        })
    }

    /// Item names in header order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Option lines as read, without the line terminator.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Solves the problem and returns the lines of the chosen options in the order they were
    /// chosen, or `None` if there is no exact cover.
    #[must_use]
    pub fn solve(mut self) -> Option<Vec<String>> {
        let solution = self.search()?;
        Some(
            solution
                .into_iter()
                .map(|option| {
                    let i = self.matrix.option_index(option);
                    std::mem::take(&mut self.options[i])
                })
                .collect(),
        )
    }
}

impl Producer for TextProblem {
    fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }
}
