//! This module contains the logic for solving puzzles.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.

use crate::GridState;

use std::hash::Hash;

/// A trait for structs which have the ability to complete puzzles. A solver
/// works on a mutably borrowed [GridState]: on success the grid holds the
/// completed solution, on failure every tentative placement has been undone
/// and the grid equals its state before the call.
///
/// An unsolvable puzzle is an ordinary `false` result, not an error. Callers
/// that need a deadline must wrap the call externally, e.g. by running it on
/// a cancellable worker; a solver runs to completion or exhaustion.
pub trait Solver {

    /// Attempts to fill all free cells of the provided grid such that the
    /// region-uniqueness invariant holds everywhere. Returns `true` if a
    /// completion was found, in which case it is left in the grid, and
    /// `false` if none exists, in which case the grid is restored to its
    /// initial content.
    fn solve(&self, grid: &mut GridState<impl Clone + Eq + Hash>) -> bool;
}

/// A perfect [Solver] which completes grids by recursively testing all
/// placeable symbols for the first free cell and backtracking chronologically
/// when a branch runs out of candidates. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// puzzle has many free cells.
/// * It finds a completion whenever one exists, for any combination of
/// alphabet and regions.
///
/// The search is deterministic: cells are chosen in row-major order (see
/// [GridState::first_free_cell]) and candidates are tried in ascending
/// symbol-index order, i.e. in the order of the alphabet's label list. For a
/// puzzle with several completions this always yields the one that is
/// lexicographically smallest when read cell by cell in scan order.
///
/// This is deliberately the simplest correct search: no candidate caching,
/// no propagation beyond the direct region lookahead in
/// [GridState::can_place], and no cell-selection heuristic. Recursion depth
/// is bounded by the number of cells, with each stack frame holding only the
/// chosen cell and the loop cursor.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut GridState<impl Clone + Eq + Hash>) -> bool {
        let (row, column) = match grid.first_free_cell() {
            Some(cell) => cell,
            None => return true
        };

        for symbol in 0..grid.size() {
            if grid.can_place(row, column, symbol) {
                grid.place(row, column, symbol);

                if BacktrackingSolver::solve_rec(grid) {
                    return true;
                }

                grid.unplace(row, column);
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &mut GridState<impl Clone + Eq + Hash>) -> bool {
        BacktrackingSolver::solve_rec(grid)
    }
}
