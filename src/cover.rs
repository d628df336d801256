//! The dancing part: hiding options and covering items, and undoing both.
//!
//! Every removal leaves the removed node's own links in place, so undoing operations in exactly
//! the reverse order restores the structure bit for bit. Calls must nest like a stack.

use crate::links::DoubleIndexLinkedList;
use crate::matrix::Matrix;

impl Matrix {
    /// Removes `item` from the list of items still to cover and hides every option that contains
    /// it from the other items' columns.
    ///
    /// `item` must not already be covered. Undo with [`uncover`](Self::uncover), in LIFO order
    /// with respect to every other `cover`.
    pub fn cover(&mut self, item: usize) {
        debug_assert!(self.is_item(item), "{item} must be an item");
        debug_assert!(
            !self.items.is_removed(item),
            "item {item} must not already be covered"
        );
        let mut cell = self.next_in_column(item);
        while cell != item {
            self.hide(cell);
            cell = self.next_in_column(cell);
        }
        self.items.remove_links(item);
    }

    /// Exact inverse of [`cover`](Self::cover).
    pub fn uncover(&mut self, item: usize) {
        debug_assert!(self.is_item(item), "{item} must be an item");
        debug_assert!(self.items.is_removed(item), "item {item} must be covered");
        self.items.restore_links(item);
        let mut cell = self.prev_in_column(item);
        while cell != item {
            self.unhide(cell);
            cell = self.prev_in_column(cell);
        }
    }

    /// Unlinks every other cell of `cell`'s row from its column.
    pub(crate) fn hide(&mut self, cell: usize) {
        let mut i = self.next_in_row(cell);
        while i != cell {
            self.cells.remove_links(i);
            let item = self.item_of(i);
            self.items[item].len -= 1;
            i = self.next_in_row(i);
        }
    }

    /// Relinks the cells removed by [`hide`](Self::hide), walking the row the other way round.
    pub(crate) fn unhide(&mut self, cell: usize) {
        let mut i = self.prev_in_row(cell);
        while i != cell {
            self.cells.restore_links(i);
            let item = self.item_of(i);
            self.items[item].len += 1;
            i = self.prev_in_row(i);
        }
    }
}
