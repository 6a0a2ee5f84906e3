// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a generalized solver for Latin-square-family
//! puzzles, i.e. Sudoku and its relatives. It supports the following key
//! features:
//!
//! * Square grids of any perfect-square size, partitioned into rows, columns,
//! and boxes as uniqueness regions
//! * Custom alphabets: a puzzle may be played with the numbers 1 to n, with
//! letters, or with any other set of n distinct labels
//! * Optional extra uniqueness regions ("subsectors"): box-sized square
//! regions anchored at arbitrary cells, independent of the box partition
//! * Incremental constraint tracking with one bit set per region, giving
//! constant-time placement checks
//! * Solving by a perfect depth-first backtracking algorithm with a
//! deterministic search order
//!
//! # Parsing and printing grids
//!
//! Puzzles with numeric alphabets can be exchanged as textual codes; see
//! [GridState::parse] for the exact format. Grids also pretty-print for
//! display in a console.
//!
//! ```
//! use sudoku_regions::GridState;
//!
//! let grid = GridState::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills all free cells
//! of a [GridState] in place. It returns `true` on success, leaving the
//! solution in the grid, and `false` if no completion exists, in which case
//! the grid is restored to its initial content.
//!
//! ```
//! use sudoku_regions::GridState;
//! use sudoku_regions::solver::{BacktrackingSolver, Solver};
//!
//! let mut grid =
//!     GridState::parse("4; , , ,4, ,4,3, , ,3, , , , ,1, ").unwrap();
//! assert!(BacktrackingSolver.solve(&mut grid));
//!
//! let solution =
//!     GridState::parse("4;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3").unwrap();
//! assert_eq!(solution, grid);
//! ```
//!
//! # Custom alphabets
//!
//! A grid over a non-numeric alphabet is built from its cell matrix, where
//! `None` denotes a free cell.
//!
//! ```
//! use sudoku_regions::GridState;
//! use sudoku_regions::alphabet::Alphabet;
//! use sudoku_regions::region::RegionIndex;
//! use sudoku_regions::solver::{BacktrackingSolver, Solver};
//!
//! let alphabet = Alphabet::new(vec!['w', 'x', 'y', 'z']).unwrap();
//! let regions = RegionIndex::new(4).unwrap();
//! let cells = vec![
//!     vec![Some('w'), Some('x'), Some('y'), Some('z')],
//!     vec![Some('y'), Some('z'), Some('w'), Some('x')],
//!     vec![Some('x'), Some('w'), Some('z'), None],
//!     vec![Some('z'), Some('y'), Some('x'), None]
//! ];
//! let mut grid = GridState::new(cells, alphabet, regions).unwrap();
//!
//! assert!(BacktrackingSolver.solve(&mut grid));
//! assert_eq!(Some(&'y'), grid.label_at(2, 3));
//! assert_eq!(Some(&'w'), grid.label_at(3, 3));
//! ```
//!
//! # Subsectors
//!
//! Extra uniqueness regions are declared on the
//! [RegionIndex](region::RegionIndex) and enforced like rows, columns, and
//! boxes, both when validating the initial grid and during search. See the
//! [region] module for details.
//!
//! # Note regarding performance
//!
//! Backtracking has exponential worst-case runtime, so puzzles with very few
//! clues or large grids can take a while. It is strongly recommended to use
//! at least `opt-level = 2`, even in tests that solve sparse grids.

pub mod alphabet;
pub mod error;
pub mod region;
pub mod solver;
pub mod util;

#[cfg(test)]
mod random_tests;

use alphabet::Alphabet;
use error::{PuzzleError, PuzzleParseError, PuzzleParseResult, PuzzleResult};
use region::{ConstraintTracker, RegionIndex, Subsector};

use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

pub(crate) fn index(row: usize, column: usize, size: usize) -> usize {
    debug_assert!(row < size && column < size, "cell coordinate out of bounds");
    row * size + column
}

/// The complete state of a puzzle in progress: the n-by-n cell matrix
/// together with the [Alphabet] defining its symbols, the [RegionIndex]
/// defining its uniqueness regions, and the [ConstraintTracker] recording
/// which symbols each region currently contains.
///
/// Cells hold symbol *indices* (`Option<usize>`), with `None` denoting a
/// free cell; labels are translated at the boundary by the alphabet. The
/// cell matrix and the tracker are kept consistent by construction: the only
/// mutating operations are [GridState::place] and [GridState::unplace],
/// which update both in lockstep. Construction validates the puzzle
/// parameters and the initial grid, so a successfully created `GridState` is
/// always in a consistent, conflict-free state.
///
/// A `GridState` is exclusively owned by the caller and mutably borrowed for
/// the duration of a [Solver::solve](solver::Solver::solve) call; distinct
/// instances share nothing and may be solved on separate threads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridState<L: Clone + Eq + Hash> {
    size: usize,
    cells: Vec<Option<usize>>,
    alphabet: Alphabet<L>,
    regions: RegionIndex,
    tracker: ConstraintTracker
}

fn horizontal_line(size: usize, box_size: usize, cell_width: usize,
        start: char, thick_sep: char, thin_sep: char, fill: char, end: char)
        -> String {
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % box_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        for _ in 0..(cell_width + 2) {
            result.push(fill);
        }
    }

    result.push(end);
    result
}

impl<L: Clone + Eq + Hash + Display> Display for GridState<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size;
        let box_size = self.regions.box_size();
        let cell_width = self.alphabet.labels().iter()
            .map(|label| label.to_string().chars().count())
            .max()
            .unwrap_or(1);

        let top_row = horizontal_line(size, box_size, cell_width,
            '╔', '╦', '╤', '═', '╗');
        let thin_separator = horizontal_line(size, box_size, cell_width,
            '╟', '╫', '┼', '─', '╢');
        let thick_separator = horizontal_line(size, box_size, cell_width,
            '╠', '╬', '╪', '═', '╣');
        let bottom_row = horizontal_line(size, box_size, cell_width,
            '╚', '╩', '╧', '═', '╝');

        for row in 0..size {
            if row == 0 {
                writeln!(f, "{}", top_row)?;
            }
            else if row % box_size == 0 {
                writeln!(f, "{}", thick_separator)?;
            }
            else {
                writeln!(f, "{}", thin_separator)?;
            }

            for column in 0..size {
                let separator = if column % box_size == 0 { '║' } else { '│' };
                let content = match self.label_at(row, column) {
                    Some(label) => label.to_string(),
                    None => String::new()
                };
                write!(f, "{} {:>width$} ", separator, content,
                    width = cell_width)?;
            }

            writeln!(f, "║")?;
        }

        write!(f, "{}", bottom_row)
    }
}

impl<L: Clone + Eq + Hash> GridState<L> {

    /// Creates a new grid state from an initial cell matrix. The matrix must
    /// be square with the side length given by `regions`; each entry is
    /// either `Some` label of the alphabet or `None` for a free cell. All
    /// given symbols are registered in the constraint tracker, so the search
    /// can start from a consistent state.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::InvalidAlphabet` if the alphabet has a different
    /// number of symbols than the grid has rows.
    /// * `PuzzleError::InvalidDimensions` if `initial` is not an n-by-n
    /// matrix matching the region index.
    /// * `PuzzleError::InvalidSymbol` if a non-empty cell holds a label that
    /// is not a member of the alphabet.
    /// * `PuzzleError::ConflictingInitialGrid` if the initial grid already
    /// contains the same symbol twice in some region.
    pub fn new(initial: Vec<Vec<Option<L>>>, alphabet: Alphabet<L>,
            regions: RegionIndex) -> PuzzleResult<GridState<L>> {
        let mut state = GridState::new_empty(alphabet, regions)?;
        let size = state.size;

        if initial.len() != size ||
                initial.iter().any(|row| row.len() != size) {
            return Err(PuzzleError::InvalidDimensions);
        }

        for (row, row_cells) in initial.into_iter().enumerate() {
            for (column, cell) in row_cells.into_iter().enumerate() {
                if let Some(label) = cell {
                    let symbol = state.alphabet.index_of(&label)
                        .ok_or(PuzzleError::InvalidSymbol)?;
                    state.place_initial(row, column, symbol)?;
                }
            }
        }

        Ok(state)
    }

    /// Creates a new grid state in which every cell is free.
    ///
    /// # Errors
    ///
    /// If the alphabet has a different number of symbols than the grid has
    /// rows. In that case, `PuzzleError::InvalidAlphabet` is returned.
    pub fn new_empty(alphabet: Alphabet<L>, regions: RegionIndex)
            -> PuzzleResult<GridState<L>> {
        let size = regions.size();

        if alphabet.len() != size {
            return Err(PuzzleError::InvalidAlphabet);
        }

        let tracker =
            ConstraintTracker::new(size, regions.subsectors().len());

        Ok(GridState {
            size,
            cells: vec![None; size * size],
            alphabet,
            regions,
            tracker
        })
    }

    fn place_initial(&mut self, row: usize, column: usize, symbol: usize)
            -> PuzzleResult<()> {
        for region in self.regions.regions_of(row, column) {
            if !self.tracker.mark(region, symbol) {
                return Err(PuzzleError::ConflictingInitialGrid);
            }
        }

        self.cells[index(row, column, self.size)] = Some(symbol);
        Ok(())
    }

    /// Gets the total size of the grid on one axis. Since the grid is
    /// square, this is valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the [Alphabet] this puzzle is played with.
    pub fn alphabet(&self) -> &Alphabet<L> {
        &self.alphabet
    }

    /// Gets the [RegionIndex] defining the uniqueness regions of this
    /// puzzle.
    pub fn regions(&self) -> &RegionIndex {
        &self.regions
    }

    /// Gets the symbol index stored in the cell at the specified position,
    /// or `None` if the cell is free. Coordinates must be in the range
    /// `[0, size)`.
    pub fn symbol_at(&self, row: usize, column: usize) -> Option<usize> {
        self.cells[index(row, column, self.size)]
    }

    /// Gets the alphabet label of the symbol stored in the cell at the
    /// specified position, or `None` if the cell is free. Coordinates must
    /// be in the range `[0, size)`.
    pub fn label_at(&self, row: usize, column: usize) -> Option<&L> {
        self.symbol_at(row, column)
            .map(|symbol| self.alphabet.label_at(symbol).unwrap())
    }

    /// Indicates whether the cell at the specified position is free, i.e.
    /// holds no symbol. Coordinates must be in the range `[0, size)`.
    pub fn is_free(&self, row: usize, column: usize) -> bool {
        self.symbol_at(row, column).is_none()
    }

    /// Gets the position of the first free cell in row-major order, that is,
    /// rows are scanned in ascending order and within a row the columns in
    /// ascending order. Returns `None` if the grid is full.
    ///
    /// The scan order is fixed: together with the ascending candidate order
    /// of the [BacktrackingSolver](crate::solver::BacktrackingSolver) it
    /// makes the search fully deterministic.
    pub fn first_free_cell(&self) -> Option<(usize, usize)> {
        self.cells.iter()
            .position(|cell| cell.is_none())
            .map(|position| (position / self.size, position % self.size))
    }

    /// Indicates whether the symbol with the given index could be placed in
    /// the cell at the specified position without violating a region
    /// constraint, i.e. none of the regions containing the cell uses the
    /// symbol yet. The content of the queried cell itself is not considered.
    pub fn can_place(&self, row: usize, column: usize, symbol: usize)
            -> bool {
        self.regions.regions_of(row, column).into_iter()
            .all(|region| !self.tracker.used(region, symbol))
    }

    /// Places the symbol with the given index into the cell at the specified
    /// position and marks it as used in all regions containing the cell.
    ///
    /// The cell must be free and the placement must be allowed by
    /// [GridState::can_place]; both preconditions are checked by
    /// `debug_assert!`. Every `place` must be paired with an
    /// [GridState::unplace] on backtrack, on every code path, to keep the
    /// tracker consistent.
    pub fn place(&mut self, row: usize, column: usize, symbol: usize) {
        debug_assert!(self.is_free(row, column),
            "placement into an occupied cell");
        debug_assert!(self.can_place(row, column, symbol),
            "placement violates a region constraint");

        for region in self.regions.regions_of(row, column) {
            self.tracker.mark(region, symbol);
        }

        self.cells[index(row, column, self.size)] = Some(symbol);
    }

    /// Clears the cell at the specified position and unmarks its former
    /// symbol in all regions containing the cell.
    ///
    /// The cell must be occupied; the precondition is checked by
    /// `debug_assert!`.
    pub fn unplace(&mut self, row: usize, column: usize) {
        debug_assert!(!self.is_free(row, column),
            "unplacement of a free cell");

        let cell_index = index(row, column, self.size);

        if let Some(symbol) = self.cells[cell_index] {
            for region in self.regions.regions_of(row, column) {
                self.tracker.unmark(region, symbol);
            }

            self.cells[cell_index] = None;
        }
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// symbol.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_none())
    }

    /// Counts the number of clues given by this grid, that is, the number of
    /// non-free cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl<L: Clone + Eq + Hash + Display> GridState<L> {

    /// Converts the grid into a `String` holding the size and the cell
    /// labels, separated as in the format of [GridState::parse]. For grids
    /// with a numeric alphabet the result parses back to an equal grid; for
    /// other alphabets it is a one-way textual form.
    pub fn to_parseable_string(&self) -> String {
        let mut result = format!("{};", self.size);
        let cells = (0..self.size * self.size)
            .map(|position| {
                let (row, column) =
                    (position / self.size, position % self.size);

                match self.label_at(row, column) {
                    Some(label) => label.to_string(),
                    None => String::new()
                }
            })
            .collect::<Vec<String>>()
            .join(",");
        result.push_str(cells.as_str());
        result
    }
}

impl GridState<usize> {

    /// Parses a code encoding a grid over the default numeric alphabet. The
    /// code has to be of the format `<size>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty or a number
    /// in the range `[1, size]`. The entries are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. Whitespace in the entries is ignored to allow for more
    /// intuitive formatting. The number of entries must be `size²`.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` parses to
    /// the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `PuzzleParseError` (see that documentation).
    pub fn parse(code: &str) -> PuzzleParseResult<GridState<usize>> {
        GridState::parse_with_subsectors(code, Vec::new())
    }

    /// Parses a grid code as in [GridState::parse], additionally registering
    /// the given subsectors as extra uniqueness regions. The initial grid
    /// must respect the subsectors as well, otherwise
    /// `PuzzleParseError::Puzzle(PuzzleError::ConflictingInitialGrid)` is
    /// returned.
    pub fn parse_with_subsectors(code: &str, subsectors: Vec<Subsector>)
            -> PuzzleParseResult<GridState<usize>> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(PuzzleParseError::WrongNumberOfParts);
        }

        let size: usize = parts[0].trim().parse()?;
        let regions = RegionIndex::with_subsectors(size, subsectors)?;
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != size * size {
            return Err(PuzzleParseError::WrongNumberOfCells);
        }

        let mut rows: Vec<Vec<Option<usize>>> = Vec::with_capacity(size);

        for row_entries in entries.chunks(size) {
            let mut row = Vec::with_capacity(size);

            for entry in row_entries {
                let entry = entry.trim();

                if entry.is_empty() {
                    row.push(None);
                    continue;
                }

                let number = entry.parse::<usize>()?;

                if number == 0 || number > size {
                    return Err(PuzzleParseError::InvalidNumber);
                }

                row.push(Some(number));
            }

            rows.push(row);
        }

        let grid = GridState::new(rows, Alphabet::numeric(size), regions)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid = GridState::parse("4; 1,,,2, ,3,,4, ,2,,, 3,,,").unwrap();

        assert_eq!(4, grid.size());
        assert_eq!(Some(0), grid.symbol_at(0, 0));
        assert_eq!(None, grid.symbol_at(0, 1));
        assert_eq!(None, grid.symbol_at(0, 2));
        assert_eq!(Some(&2), grid.label_at(0, 3));
        assert_eq!(Some(&3), grid.label_at(1, 1));
        assert_eq!(Some(&4), grid.label_at(1, 3));
        assert_eq!(Some(&2), grid.label_at(2, 1));
        assert_eq!(Some(&3), grid.label_at(3, 0));
        assert_eq!(None, grid.label_at(3, 3));
        assert_eq!(6, grid.count_clues());
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(PuzzleParseError::WrongNumberOfParts),
            GridState::parse("4"));
        assert_eq!(Err(PuzzleParseError::WrongNumberOfParts),
            GridState::parse("4;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(PuzzleParseError::NumberFormatError),
            GridState::parse("x;,"));
        assert_eq!(Err(PuzzleParseError::NumberFormatError),
            GridState::parse("4;#,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_invalid_size() {
        assert_eq!(
            Err(PuzzleParseError::Puzzle(PuzzleError::InvalidSize)),
            GridState::parse("5;,,,,,,,,,,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(PuzzleParseError::WrongNumberOfCells),
            GridState::parse("4;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(PuzzleParseError::WrongNumberOfCells),
            GridState::parse("4;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(PuzzleParseError::InvalidNumber),
            GridState::parse("4;,,,5,,,,,,,,,,,,"));
        assert_eq!(Err(PuzzleParseError::InvalidNumber),
            GridState::parse("4;0,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_conflicting_row() {
        assert_eq!(
            Err(PuzzleParseError::Puzzle(
                PuzzleError::ConflictingInitialGrid)),
            GridState::parse("4;1,,,1,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_conflicting_column() {
        assert_eq!(
            Err(PuzzleParseError::Puzzle(
                PuzzleError::ConflictingInitialGrid)),
            GridState::parse("4;,2,,,,,,,,2,,,,,,"));
    }

    #[test]
    fn parse_conflicting_box() {
        assert_eq!(
            Err(PuzzleParseError::Puzzle(
                PuzzleError::ConflictingInitialGrid)),
            GridState::parse("4;3,,,,,3,,,,,,,,,,"));
    }

    #[test]
    fn conflicting_subsector_rejected_at_construction() {
        // The two 3s sit in different rows, columns, and boxes, but inside
        // the subsector anchored at (1, 1).
        let code = "4;,,,,,3,,,,,3,,,,,";

        assert!(GridState::parse(code).is_ok());
        assert_eq!(
            Err(PuzzleParseError::Puzzle(
                PuzzleError::ConflictingInitialGrid)),
            GridState::parse_with_subsectors(code,
                vec![Subsector::new(1, 1)]));
    }

    #[test]
    fn new_rejects_wrong_alphabet_size() {
        let alphabet = Alphabet::new(vec!['a', 'b', 'c']).unwrap();
        let regions = RegionIndex::new(4).unwrap();

        assert_eq!(Err(PuzzleError::InvalidAlphabet),
            GridState::new_empty(alphabet, regions));
    }

    #[test]
    fn new_rejects_misshapen_grid() {
        let alphabet = Alphabet::numeric(4);
        let regions = RegionIndex::new(4).unwrap();
        let too_few_rows = vec![vec![None; 4]; 3];

        assert_eq!(Err(PuzzleError::InvalidDimensions),
            GridState::new(too_few_rows, alphabet.clone(),
                regions.clone()));

        let ragged_row = vec![
            vec![None; 4],
            vec![None; 3],
            vec![None; 4],
            vec![None; 4]
        ];

        assert_eq!(Err(PuzzleError::InvalidDimensions),
            GridState::new(ragged_row, alphabet, regions));
    }

    #[test]
    fn new_rejects_foreign_symbol() {
        let alphabet = Alphabet::new(vec!['a', 'b', 'c', 'd']).unwrap();
        let regions = RegionIndex::new(4).unwrap();
        let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; 4]; 4];
        cells[2][1] = Some('z');

        assert_eq!(Err(PuzzleError::InvalidSymbol),
            GridState::new(cells, alphabet, regions));
    }

    #[test]
    fn first_free_cell_scans_row_major() {
        let grid = GridState::parse("4;1,2,3,4,3,4,1,2,2,3,4,1,4,1,2,3")
            .unwrap();
        assert_eq!(None, grid.first_free_cell());

        let grid = GridState::parse("4;1,2,3,4,3,4,1,2,2,3,,1,4,,2,3")
            .unwrap();
        assert_eq!(Some((2, 2)), grid.first_free_cell());

        let grid = GridState::parse("4;,,,,,,,,,,,,,,,").unwrap();
        assert_eq!(Some((0, 0)), grid.first_free_cell());
    }

    #[test]
    fn can_place_respects_row_column_and_box() {
        let grid = GridState::parse("4;1, , , , , ,2, , , , , , , , ,3")
            .unwrap();

        // (1, 1) shares its box with the 1, its row with nothing blocking 4.
        assert!(!grid.can_place(1, 1, 0));
        assert!(grid.can_place(1, 1, 3));
        // (0, 2) shares its column with the 2 at (1, 2) and its row with
        // the 1 at (0, 0).
        assert!(!grid.can_place(0, 2, 1));
        assert!(!grid.can_place(0, 2, 0));
        assert!(grid.can_place(0, 2, 2));
        // (3, 0) shares its row with the 3 at (3, 3).
        assert!(!grid.can_place(3, 0, 2));
        assert!(grid.can_place(3, 0, 1));
    }

    #[test]
    fn can_place_respects_subsector() {
        let grid = GridState::parse_with_subsectors(
            "4;,,,,,1,,,,,,,,,,", vec![Subsector::new(1, 1)]).unwrap();

        // (2, 2) is in a different row, column, and box than (1, 1), but in
        // the same subsector.
        assert!(!grid.can_place(2, 2, 0));
        assert!(grid.can_place(2, 2, 1));
    }

    #[test]
    fn place_and_unplace_restore_state() {
        let original =
            GridState::parse("4;1, , , , , ,2, , , , , , , , ,3").unwrap();
        let mut grid = original.clone();

        grid.place(1, 1, 3);
        assert!(!grid.is_free(1, 1));
        assert_eq!(Some(&4), grid.label_at(1, 1));
        assert!(!grid.can_place(1, 0, 3));

        grid.unplace(1, 1);
        assert!(grid.is_free(1, 1));
        assert!(grid.can_place(1, 0, 3));
        assert_eq!(original, grid);
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let code = "4;1,,3,,2,,,,4,,,3,,,,2";
        let grid = GridState::parse(code).unwrap();

        assert_eq!(code, grid.to_parseable_string().as_str());
        assert_eq!(grid,
            GridState::parse(grid.to_parseable_string().as_str()).unwrap());
    }

    #[test]
    fn display_draws_boxes() {
        let grid = GridState::parse("4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2")
            .unwrap();
        let expected =
            "╔═══╤═══╦═══╤═══╗\n\
             ║ 1 │   ║ 2 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 3 ║   │ 4 ║\n\
             ╠═══╪═══╬═══╪═══╣\n\
             ║   │   ║ 3 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 1 ║   │ 2 ║\n\
             ╚═══╧═══╩═══╧═══╝";

        assert_eq!(expected, format!("{}", grid));
    }

    #[test]
    fn display_pads_wide_labels() {
        let alphabet =
            Alphabet::new(vec!["10", "11", "12", "13"]).unwrap();
        let regions = RegionIndex::new(4).unwrap();
        let cells = vec![
            vec![Some("10"), Some("11"), Some("12"), Some("13")],
            vec![None; 4],
            vec![None; 4],
            vec![None; 4]
        ];
        let grid = GridState::new(cells, alphabet, regions).unwrap();
        let expected =
            "╔════╤════╦════╤════╗\n\
             ║ 10 │ 11 ║ 12 │ 13 ║\n\
             ╟────┼────╫────┼────╢\n\
             ║    │    ║    │    ║\n\
             ╠════╪════╬════╪════╣\n\
             ║    │    ║    │    ║\n\
             ╟────┼────╫────┼────╢\n\
             ║    │    ║    │    ║\n\
             ╚════╧════╩════╧════╝";

        assert_eq!(expected, format!("{}", grid));
    }
}
