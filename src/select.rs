//! Item selection for the search.

use crate::matrix::Matrix;

impl Matrix {
    /// Chooses the uncovered item with the fewest live options, the leftmost one on ties. This is
    /// Knuth's *minimum remaining values* heuristic: it keeps the branching factor small and runs
    /// into dead ends (an item with no options) as early as possible.
    ///
    /// Returns `None` when no items are left, i.e. the current choices form a solution.
    #[must_use]
    pub fn select_item(&self) -> Option<usize> {
        // min_by_key keeps the first of several equal minima
        self.live_items().min_by_key(|&item| self.items[item].len)
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::tests::knuth_example;
    use crate::matrix::MatrixBuilder;

    #[test]
    fn picks_shortest_column() {
        let mut x = MatrixBuilder::new(3);
        x.add_option(&[1, 2]).unwrap();
        x.add_option(&[1, 3]).unwrap();
        x.add_option(&[1]).unwrap();
        x.add_option(&[3]).unwrap();
        assert_eq!(x.build().select_item(), Some(2));
    }

    #[test]
    fn ties_go_to_the_leftmost_item() {
        let mut x = knuth_example();
        assert_eq!(x.select_item(), Some(1));
        x.cover(1);
        // items 4 and 6 are both down to one option
        assert_eq!(x.select_item(), Some(4));
    }

    #[test]
    fn empty_column_wins() {
        let mut x = MatrixBuilder::new(3);
        x.add_option(&[1, 3]).unwrap();
        assert_eq!(x.build().select_item(), Some(2));
    }

    #[test]
    fn nothing_left_to_select() {
        assert_eq!(MatrixBuilder::new(0).build().select_item(), None);

        let mut x = MatrixBuilder::new(1);
        x.add_option(&[1]).unwrap();
        let mut x = x.build();
        x.cover(1);
        assert!(x.is_solved());
        assert_eq!(x.select_item(), None);
    }
}
