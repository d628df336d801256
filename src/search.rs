//! Algorithm X as an explicit state machine.
//!
//! Instead of recursing once per chosen option, the search keeps a stack of *choice cursors*:
//! entry `d` is the cell of the option currently tried at depth `d`, which lies in the column of
//! the item selected at that depth. When a cursor reaches its column header again, every option
//! for that item has been tried and the search backtracks.

use crate::matrix::{Matrix, OptionCell};

#[derive(Debug)]
enum State {
    /// pick and cover the next item
    Select,
    /// try the option at `cursor` (the top of the stack) for `item`
    Descend { item: usize, cursor: usize },
    /// undo `item` and move the previous depth on to its next option
    Backtrack { item: usize },
}

/// Searches `matrix` for an exact cover and returns the first one found, as one representative
/// cell per chosen option in the order the options were chosen. Returns `Some(vec![])` for a
/// matrix without items and `None` if no exact cover exists.
///
/// The search is depth first and deterministic: the same matrix always yields the same solution.
/// On `None` the matrix is restored to its initial state; on success the items and the options
/// that conflict with the solution are left covered.
///
/// The matrix must be consistent, as guaranteed by [`MatrixBuilder`](crate::MatrixBuilder), and
/// must not be in the middle of manual [`cover`](Matrix::cover) calls.
#[must_use]
pub fn solve(matrix: &mut Matrix) -> Option<Vec<OptionCell>> {
    let mut cursors: Vec<usize> = Vec::new();
    // capacity only, the stack grows on demand
    let _ = cursors.try_reserve(matrix.depth_hint());
    let mut state = State::Select;

    loop {
        state = match state {
            State::Select => {
                let Some(item) = matrix.select_item() else {
                    return Some(cursors.into_iter().map(OptionCell).collect());
                };
                matrix.cover(item);
                let cursor = matrix.next_in_column(item);
                cursors.push(cursor);
                State::Descend { item, cursor }
            }
            State::Descend { item, cursor } if cursor == item => State::Backtrack { item },
            State::Descend { cursor, .. } => {
                let mut j = matrix.next_in_row(cursor);
                while j != cursor {
                    matrix.cover(matrix.item_of(j));
                    j = matrix.next_in_row(j);
                }
                State::Select
            }
            State::Backtrack { item } => {
                matrix.uncover(item);
                cursors.pop();
                let top = cursors.last_mut()?;
                let mut j = matrix.prev_in_row(*top);
                while j != *top {
                    matrix.uncover(matrix.item_of(j));
                    j = matrix.prev_in_row(j);
                }
                let item = matrix.item_of(*top);
                *top = matrix.next_in_column(*top);
                State::Descend { item, cursor: *top }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::tests::knuth_example;
    use crate::matrix::MatrixBuilder;

    fn build(n_items: usize, options: &[&[usize]]) -> Matrix {
        let mut x = MatrixBuilder::new(n_items);
        for option in options {
            x.add_option(option).unwrap();
        }
        x.build()
    }

    fn chosen(x: &Matrix, solution: &[OptionCell]) -> Vec<Vec<usize>> {
        solution
            .iter()
            .map(|&option| x.option_items(option).collect())
            .collect()
    }

    #[test]
    fn solve_knuth_example() {
        let mut x = knuth_example();
        let solution = solve(&mut x).unwrap();
        assert_eq!(
            solution.iter().map(|o| o.index()).collect::<Vec<_>>(),
            [20, 24, 9]
        );
        assert_eq!(chosen(&x, &solution), [vec![1, 4, 6], vec![2, 7], vec![3, 5]]);
        assert!(x.is_solved());
    }

    #[test]
    fn only_the_full_option_covers_abc() {
        // A B C: {A,B} {B,C} {A,C} {A,B,C}
        let mut x = build(3, &[&[1, 2], &[2, 3], &[1, 3], &[1, 2, 3]]);
        let solution = solve(&mut x).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(x.option_index(solution[0]), 3);
    }

    #[test]
    fn uncoverable_item_means_no_solution() {
        let mut x = build(3, &[&[1, 2], &[1]]);
        let pristine = x.clone();
        assert_eq!(solve(&mut x), None);
        assert_eq!(x, pristine);
    }

    #[test]
    fn exhausted_search_restores_matrix() {
        // every item is coverable but no combination is exact
        let mut x = build(3, &[&[1, 2], &[2, 3], &[1, 3]]);
        let pristine = x.clone();
        assert_eq!(solve(&mut x), None);
        assert_eq!(x, pristine);
    }

    #[test]
    fn backtracks_past_a_greedy_first_choice() {
        // {1,2} is tried first for item 1 and leaves 3 without options
        let mut x = build(4, &[&[1, 2], &[1, 3], &[2, 4], &[2, 3, 4]]);
        let solution = solve(&mut x).unwrap();
        let mut options = solution
            .iter()
            .map(|&o| x.option_index(o))
            .collect::<Vec<_>>();
        options.sort_unstable();
        assert_eq!(options, [1, 2]);
    }

    #[test]
    fn no_items_is_trivially_solved() {
        let mut x = MatrixBuilder::new(0).build();
        assert_eq!(solve(&mut x), Some(vec![]));
    }

    #[test]
    fn depth_hint_is_only_a_hint() {
        let mut x = MatrixBuilder::new(4);
        for item in 1..=4 {
            x.add_option(&[item]).unwrap();
        }
        x.depth_hint(1);
        let solution = solve(&mut x.build()).unwrap();
        assert_eq!(solution.len(), 4);
    }

    #[test]
    fn same_matrix_same_answer() {
        let first = solve(&mut knuth_example());
        let second = solve(&mut knuth_example());
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
