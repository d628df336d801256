//! Exact cover properties of the search, checked through the public API

use dancing_cover::{solve, CellKind, Matrix, MatrixBuilder, OptionCell};

fn build(n_items: usize, options: &[Vec<usize>]) -> Matrix {
    let mut builder = MatrixBuilder::new(n_items);
    for option in options {
        builder.add_option(option).unwrap();
    }
    builder.build()
}

/// Asserts that the chosen options partition the items `1..=n_items`
fn assert_exact_cover(matrix: &Matrix, solution: &[OptionCell]) {
    let mut hits = vec![0; matrix.item_count() + 1];
    for &option in solution {
        for item in matrix.option_items(option) {
            hits[item] += 1;
        }
    }
    assert!(
        hits[1..].iter().all(|&n| n == 1),
        "items covered {hits:?} times"
    );
}

/// Langford pairs: place 1,1,...,n,n in 2n slots with i numbers between the two i's. Items
/// `1..=n` are the values, `n+1..=3n` the slots.
fn langford(n: usize) -> Vec<Vec<usize>> {
    let mut options = Vec::new();
    for i in 1..=n {
        for j in 1..2 * n - i {
            options.push(vec![i, n + j, n + j + i + 1]);
        }
    }
    options
}

/// Dominoes on a rows x cols board, one item per square.
fn dominoes(rows: usize, cols: usize) -> Vec<Vec<usize>> {
    let square = |r: usize, c: usize| r * cols + c + 1;
    let mut options = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                options.push(vec![square(r, c), square(r, c + 1)]);
            }
            if r + 1 < rows {
                options.push(vec![square(r, c), square(r + 1, c)]);
            }
        }
    }
    options
}

#[test]
fn langford_pairs_exist_when_n_is_0_or_3_mod_4() {
    for n in [3, 4, 7] {
        let mut matrix = build(3 * n, &langford(n));
        let solution = solve(&mut matrix).unwrap();
        assert_eq!(solution.len(), n);
        assert_exact_cover(&matrix, &solution);
    }
}

#[test]
fn langford_pairs_do_not_exist_otherwise() {
    for n in [1, 2, 5, 6] {
        let mut matrix = build(3 * n, &langford(n));
        let pristine = matrix.clone();
        assert_eq!(solve(&mut matrix), None);
        assert_eq!(matrix, pristine);
    }
}

#[test]
fn domino_tilings() {
    let mut matrix = build(24, &dominoes(4, 6));
    let solution = solve(&mut matrix).unwrap();
    assert_eq!(solution.len(), 12);
    assert_exact_cover(&matrix, &solution);

    // an odd number of squares cannot be tiled
    assert_eq!(solve(&mut build(15, &dominoes(3, 5))), None);
}

#[test]
fn cover_uncover_restores_every_item() {
    let pristine = build(24, &dominoes(4, 6));
    let mut matrix = pristine.clone();
    for item in 1..=24 {
        matrix.cover(item);
    }
    assert!(matrix.is_solved());
    for item in (1..=24).rev() {
        matrix.uncover(item);
    }
    assert_eq!(matrix, pristine);
}

#[test]
fn solving_twice_gives_the_same_choices() {
    let options = langford(7);
    let first = solve(&mut build(21, &options)).unwrap();
    let second = solve(&mut build(21, &options)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn solution_follows_selection_order() {
    // item 3 has a single option, so it is chosen first
    let mut matrix = build(3, &[vec![1, 2], vec![1], vec![2], vec![3]]);
    let solution = solve(&mut matrix).unwrap();
    let chosen = solution
        .iter()
        .map(|&option| matrix.option_index(option))
        .collect::<Vec<_>>();
    assert_eq!(chosen, [3, 0]);
}

#[test]
fn rows_and_columns_agree_on_cell_kinds() {
    let options = dominoes(2, 3);
    let matrix = build(6, &options);
    for item in 1..=6 {
        assert_eq!(matrix.cell_kind(item), CellKind::Header);
        for cell in matrix.column(item) {
            assert_eq!(matrix.cell_kind(cell), CellKind::Member(item));

            // walking the row from any of its cells comes back around to it
            let mut row = vec![cell];
            let mut next = matrix.next_in_row(cell);
            while next != cell {
                row.push(next);
                next = matrix.next_in_row(next);
            }
            let mut items = row
                .iter()
                .map(|&c| match matrix.cell_kind(c) {
                    CellKind::Member(i) => i,
                    kind => panic!("cell {c} in a row is a {kind:?}"),
                })
                .collect::<Vec<_>>();
            items.sort_unstable();
            assert!(items.contains(&item));
            assert!(options.iter().any(|option| *option == items), "{items:?}");
        }
    }
}
