use crate::GridState;
use crate::alphabet::Alphabet;
use crate::region::RegionIndex;
use crate::solver::{BacktrackingSolver, Solver};

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use std::collections::HashSet;

const ITERATIONS_PER_RUN: usize = 30;
const SEED: u64 = 0x5eed_cafe;

/// Produces a full valid grid of the given size from the cyclic base
/// pattern, relabeled by a random permutation of the numeric alphabet.
/// Relabeling preserves validity, so the result satisfies every row, column,
/// and box.
fn random_full_grid(rng: &mut ChaCha8Rng, size: usize)
        -> Vec<Vec<Option<usize>>> {
    let box_size = RegionIndex::new(size).unwrap().box_size();
    let mut permutation: Vec<usize> = (1..=size).collect();
    permutation.shuffle(rng);

    (0..size)
        .map(|row| (0..size)
            .map(|column| {
                let value =
                    ((row % box_size) * box_size + row / box_size + column)
                        % size;
                Some(permutation[value])
            })
            .collect())
        .collect()
}

fn random_puzzle(rng: &mut ChaCha8Rng, size: usize, cells_removed: usize)
        -> GridState<usize> {
    let mut cells = random_full_grid(rng, size);
    let mut positions: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .collect();
    positions.shuffle(rng);

    for &(row, column) in positions.iter().take(cells_removed) {
        cells[row][column] = None;
    }

    GridState::new(cells, Alphabet::numeric(size),
        RegionIndex::new(size).unwrap()).unwrap()
}

fn assert_all_regions_are_permutations(grid: &GridState<usize>) {
    let size = grid.size();
    let regions = grid.regions();

    let mut row_seen = vec![HashSet::new(); size];
    let mut column_seen = vec![HashSet::new(); size];
    let mut box_seen = vec![HashSet::new(); size];

    for row in 0..size {
        for column in 0..size {
            let symbol = grid.symbol_at(row, column)
                .expect("solved grid has a free cell");

            assert!(row_seen[row].insert(symbol));
            assert!(column_seen[column].insert(symbol));
            assert!(box_seen[regions.box_of(row, column)].insert(symbol));
        }
    }
}

#[test]
fn randomized_puzzles_solve_consistently() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    for _ in 0..ITERATIONS_PER_RUN {
        for &size in &[4usize, 9] {
            let cells_removed = rng.gen_range(size..=2 * size);
            let mut grid = random_puzzle(&mut rng, size, cells_removed);
            let original = grid.clone();

            assert!(BacktrackingSolver.solve(&mut grid));
            assert!(grid.is_full());
            assert_all_regions_are_permutations(&grid);

            // Every clue of the puzzle survives into the solution.
            for row in 0..size {
                for column in 0..size {
                    if let Some(symbol) = original.symbol_at(row, column) {
                        assert_eq!(Some(symbol),
                            grid.symbol_at(row, column));
                    }
                }
            }
        }
    }
}

#[test]
fn randomized_puzzles_solve_deterministically() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED ^ 1);

    for _ in 0..ITERATIONS_PER_RUN {
        let mut first = random_puzzle(&mut rng, 9, 12);
        let mut second = first.clone();

        assert!(BacktrackingSolver.solve(&mut first));
        assert!(BacktrackingSolver.solve(&mut second));
        assert_eq!(first, second);
    }
}

#[test]
fn random_place_unplace_keeps_tracker_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED ^ 2);
    let size = 9;
    let mut grid = GridState::new_empty(Alphabet::numeric(size),
        RegionIndex::new(size).unwrap()).unwrap();

    for _ in 0..500 {
        let row = rng.gen_range(0..size);
        let column = rng.gen_range(0..size);

        if grid.is_free(row, column) {
            let candidates: Vec<usize> = (0..size)
                .filter(|&symbol| grid.can_place(row, column, symbol))
                .collect();

            if let Some(&symbol) = candidates.choose(&mut rng) {
                grid.place(row, column, symbol);
            }
        }
        else {
            grid.unplace(row, column);
        }
    }

    // Rebuilding the grid from its visible cells must reproduce the
    // incrementally maintained tracker state exactly.
    let cells: Vec<Vec<Option<usize>>> = (0..size)
        .map(|row| (0..size)
            .map(|column| grid.label_at(row, column).copied())
            .collect())
        .collect();
    let rebuilt = GridState::new(cells, grid.alphabet().clone(),
        grid.regions().clone()).unwrap();

    assert_eq!(rebuilt, grid);
}
