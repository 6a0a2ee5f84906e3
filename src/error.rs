//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors that can occur when constructing a
/// [RegionIndex](crate::region::RegionIndex) or a
/// [GridState](crate::GridState). All of these are fatal: no instance is
/// produced, the error is reported once to the caller, and nothing is retried
/// internally. Note that an unsolvable puzzle is *not* an error, it is the
/// ordinary `false` result of
/// [Solver::solve](crate::solver::Solver::solve).
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// Indicates that the grid size specified for a puzzle is not a positive
    /// perfect square. Only perfect squares admit the fixed
    /// sqrt(n)-by-sqrt(n) box partition.
    InvalidSize,

    /// Indicates that the initial grid handed to a
    /// [GridState](crate::GridState) does not have the shape required by its
    /// region index, that is, it is not an n-by-n matrix of cells.
    InvalidDimensions,

    /// Indicates that the supplied alphabet does not fit the puzzle: its
    /// length differs from the grid size or it contains duplicate labels.
    InvalidAlphabet,

    /// Indicates that a non-empty cell of the initial grid holds a value
    /// which is not a member of the alphabet.
    InvalidSymbol,

    /// Indicates that the initial grid already violates the region-uniqueness
    /// invariant, i.e. some row, column, box, or subsector contains the same
    /// symbol twice. Such a grid is rejected before any search begins, since
    /// the solver relies on a consistent starting state.
    ConflictingInitialGrid
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidSize =>
                write!(f, "grid size is not a positive perfect square"),
            PuzzleError::InvalidDimensions =>
                write!(f, "initial grid does not match the puzzle size"),
            PuzzleError::InvalidAlphabet =>
                write!(f, "alphabet has the wrong length or duplicate labels"),
            PuzzleError::InvalidSymbol =>
                write!(f, "initial grid contains a value outside the alphabet"),
            PuzzleError::ConflictingInitialGrid =>
                write!(f, "initial grid contains a region duplicate")
        }
    }
}

/// Syntactic sugar for `Result<V, PuzzleError>`.
pub type PuzzleResult<V> = Result<V, PuzzleError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [GridState::parse](crate::GridState::parse).
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: size and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the parsed size.
    WrongNumberOfCells,

    /// Indicates that one of the numbers (size or cell content) could not be
    /// parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with a number outside the alphabet
    /// range (0 or more than the grid size).
    InvalidNumber,

    /// Indicates that the parsed grid was rejected during construction. This
    /// wraps the underlying [PuzzleError], e.g.
    /// [PuzzleError::ConflictingInitialGrid] for a grid code that contains a
    /// region duplicate.
    Puzzle(PuzzleError)
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;

impl From<ParseIntError> for PuzzleParseError {
    fn from(_: ParseIntError) -> Self {
        PuzzleParseError::NumberFormatError
    }
}

impl From<PuzzleError> for PuzzleParseError {
    fn from(e: PuzzleError) -> Self {
        PuzzleParseError::Puzzle(e)
    }
}
