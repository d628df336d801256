//! Node storage for the dancing links structure and the builder that produces it.

use crate::error::{Error, Result};
use crate::links::{DoubleIndexLink, LinkIterator, Linked};

/// Item header: one per column, linked left/right with index 0 as the root sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Item {
    pub(crate) link: DoubleIndexLink,
    /// number of member cells currently linked into the column
    pub(crate) len: usize,
}

impl Linked for Item {
    fn link(&self) -> &DoubleIndexLink {
        &self.link
    }
    fn link_mut(&mut self) -> &mut DoubleIndexLink {
        &mut self.link
    }
}

/// What a cell of the [`Matrix`] stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Column header sharing its index with its item (index 0 is the unused root cell).
    Header,
    /// One (item, option) incidence, holding the index of its item.
    Member(usize),
    /// Row delimiter. Its up link holds the first cell of the row before it and its down link holds
    /// the last cell of the row after it.
    Spacer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    /// up (`prev`) and down (`next`) links; spacers use them for row wrap-around
    pub(crate) link: DoubleIndexLink,
    pub(crate) kind: CellKind,
}

impl Linked for Cell {
    fn link(&self) -> &DoubleIndexLink {
        &self.link
    }
    fn link_mut(&mut self) -> &mut DoubleIndexLink {
        &mut self.link
    }
}

/// Opaque handle to a chosen option: the index of the cell that represents the option in the
/// column of the item it was chosen for.
///
/// Handles are only meaningful for the [`Matrix`] they came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionCell(pub(crate) usize);

impl OptionCell {
    /// Index of the representative cell.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The "dancing links" representation of an exact cover problem.
///
/// Items are numbered `1..=item_count()`. Cells live in one vector: the root cell and the column
/// headers first (cell `i` is the header of item `i`), followed by the option rows, each bracketed
/// by spacer cells. Row neighbours are implicit in the layout since options never change during a
/// search, while the item chain and the columns are explicit index links that
/// [`cover`](Self::cover) and [`uncover`](Self::uncover) rewrite.
///
/// Build one with [`MatrixBuilder`] and search it with [`solve`](crate::solve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub(crate) items: Vec<Item>,
    pub(crate) cells: Vec<Cell>,
    /// positions of all spacer cells in ascending order
    pub(crate) spacers: Vec<usize>,
    pub(crate) depth_hint: usize,
}

impl Matrix {
    /// Number of items the matrix was built with, covered or not.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len() - 1
    }

    /// Number of options (rows).
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.spacers.len() - 1
    }

    /// Expected upper bound on the number of options in a solution.
    #[must_use]
    pub const fn depth_hint(&self) -> usize {
        self.depth_hint
    }

    /// Iterates over the items that are not currently covered, left to right.
    pub fn live_items(&self) -> impl Iterator<Item = usize> + '_ {
        LinkIterator::from_slice(&self.items, 0)
    }

    /// True when every item is covered.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.items[0].link.next == 0
    }

    /// Number of live options that contain `item`.
    #[must_use]
    pub fn item_len(&self, item: usize) -> usize {
        debug_assert!(self.is_item(item));
        self.items[item].len
    }

    /// Kind of the cell at `cell`.
    #[must_use]
    pub fn cell_kind(&self, cell: usize) -> CellKind {
        self.cells[cell].kind
    }

    /// Iterates over the live cells of `item`'s column, top to bottom.
    pub fn column(&self, item: usize) -> impl Iterator<Item = usize> + '_ {
        debug_assert!(self.is_item(item));
        LinkIterator::from_slice(&self.cells, item)
    }

    /// Next cell down the column (wrapping through the header).
    #[must_use]
    pub fn next_in_column(&self, cell: usize) -> usize {
        self.cells[cell].link.next
    }

    /// Next cell up the column (wrapping through the header).
    #[must_use]
    pub fn prev_in_column(&self, cell: usize) -> usize {
        self.cells[cell].link.prev
    }

    /// Next cell of the same row, wrapping from the last cell to the first.
    #[must_use]
    pub fn next_in_row(&self, cell: usize) -> usize {
        let next = cell + 1;
        match self.cells[next].kind {
            CellKind::Spacer => self.cells[next].link.prev,
            _ => next,
        }
    }

    /// Previous cell of the same row, wrapping from the first cell to the last.
    #[must_use]
    pub fn prev_in_row(&self, cell: usize) -> usize {
        let prev = cell - 1;
        match self.cells[prev].kind {
            CellKind::Spacer => self.cells[prev].link.next,
            _ => prev,
        }
    }

    /// Zero-based position of the option in the order it was added to the builder.
    #[must_use]
    pub fn option_index(&self, option: OptionCell) -> usize {
        debug_assert!(self.is_member(option.0));
        self.spacers.partition_point(|&spacer| spacer < option.0) - 1
    }

    /// Items of the option, in the order they were given to the builder.
    pub fn option_items(&self, option: OptionCell) -> impl Iterator<Item = usize> + '_ {
        let row = self.option_index(option);
        (self.spacers[row] + 1..self.spacers[row + 1]).map(|cell| self.item_of(cell))
    }

    /// Item owning a member cell. A header is its own item.
    pub(crate) fn item_of(&self, cell: usize) -> usize {
        match self.cells[cell].kind {
            CellKind::Member(item) => item,
            CellKind::Header => cell,
            CellKind::Spacer => {
                debug_assert!(false, "spacer {cell} has no item");
                0
            }
        }
    }

    pub(crate) fn is_item(&self, i: usize) -> bool {
        (1..self.items.len()).contains(&i)
    }

    pub(crate) fn is_member(&self, i: usize) -> bool {
        i < self.cells.len() && matches!(self.cells[i].kind, CellKind::Member(_))
    }
}

/// Builder for [`Matrix`]: the construction side of the engine's contract.
pub struct MatrixBuilder {
    matrix: Matrix,
}

impl MatrixBuilder {
    /// Creates a matrix with `n_items` items numbered from 1 and no options.
    #[must_use]
    pub fn new(n_items: usize) -> Self {
        let items = (0..=n_items)
            .map(|i| Item {
                link: DoubleIndexLink {
                    prev: if i == 0 { n_items } else { i - 1 },
                    next: if i == n_items { 0 } else { i + 1 },
                },
                len: 0,
            })
            .collect();

        let mut cells: Vec<Cell> = (0..=n_items)
            .map(|i| Cell {
                link: DoubleIndexLink::to_self(i),
                kind: CellKind::Header,
            })
            .collect();
        // first row spacer
        cells.push(Cell {
            link: DoubleIndexLink { prev: 0, next: 0 },
            kind: CellKind::Spacer,
        });

        Self {
            matrix: Matrix {
                items,
                cells,
                spacers: vec![n_items + 1],
                depth_hint: n_items,
            },
        }
    }

    /// Reserves room for `options` more rows holding `cells` member cells in total. The request is
    /// only a hint: if it cannot be satisfied nothing is reserved and the vectors grow on demand.
    pub fn reserve(&mut self, options: usize, cells: usize) -> &mut Self {
        let matrix = &mut self.matrix;
        if matrix
            .cells
            .try_reserve(options.saturating_add(cells))
            .is_err()
            || matrix.spacers.try_reserve(options).is_err()
        {
            matrix.cells.shrink_to_fit();
            matrix.spacers.shrink_to_fit();
        }
        self
    }

    /// Overrides the expected maximum solution length, which defaults to the number of items. It
    /// only sizes the search stack up front; the stack grows if the hint is too small.
    pub fn depth_hint(&mut self, depth: usize) -> &mut Self {
        self.matrix.depth_hint = depth;
        self
    }

    /// Appends an option made of the given items. Empty options are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::ItemOutOfRange`] if an item is not in `1..=n_items` and [`Error::RepeatedItem`] if
    /// an item appears twice. The builder is left unchanged on error.
    pub fn add_option(&mut self, option: &[usize]) -> Result<&mut Self> {
        let n_items = self.matrix.item_count();
        for (k, &item) in option.iter().enumerate() {
            if !self.matrix.is_item(item) {
                return Err(Error::ItemOutOfRange {
                    item,
                    items: n_items,
                });
            }
            if option[..k].contains(&item) {
                return Err(Error::RepeatedItem { item });
            }
        }
        if option.is_empty() {
            return Ok(self);
        }

        let cells = &mut self.matrix.cells;
        let prev_spacer = cells.len() - 1;
        for &item in option {
            let current = cells.len();
            let old_bottom = cells[item].link.prev;
            cells.push(Cell {
                link: DoubleIndexLink {
                    prev: old_bottom,
                    next: item,
                },
                kind: CellKind::Member(item),
            });
            cells[item].link.prev = current;
            cells[old_bottom].link.next = current;
            self.matrix.items[item].len += 1;
        }
        cells[prev_spacer].link.next = cells.len() - 1;

        let spacer = cells.len();
        cells.push(Cell {
            link: DoubleIndexLink {
                prev: prev_spacer + 1,
                next: 0,
            },
            kind: CellKind::Spacer,
        });
        self.matrix.spacers.push(spacer);
        Ok(self)
    }

    /// Consumes the builder and returns the completed matrix.
    #[must_use]
    pub fn build(self) -> Matrix {
        self.matrix
    }
}

/// Read-only view of the matrix under construction.
impl AsRef<Matrix> for MatrixBuilder {
    fn as_ref(&self) -> &Matrix {
        &self.matrix
    }
}
