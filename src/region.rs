//! This module defines the uniqueness regions of a puzzle and the constraint
//! tracker which records the symbols used within each region.
//!
//! Every cell of a grid belongs to exactly one row, one column, and one box.
//! In addition, a puzzle may declare [Subsector]s: extra square regions of
//! box size which are anchored at an arbitrary cell and act as independent
//! uniqueness regions. Subsectors may overlap boxes or each other, and a
//! subsector anchored near the edge of the grid simply covers fewer cells.
//!
//! The [RegionIndex] is the pure mapping from a cell coordinate to the
//! [RegionId]s of all regions the cell belongs to. The [ConstraintTracker]
//! holds one [SymbolSet](crate::util::SymbolSet) per region id and answers in
//! constant time whether a symbol is already used in a region.

use crate::error::{PuzzleError, PuzzleResult};
use crate::util::SymbolSet;

use serde::{Deserialize, Serialize};

/// Identifies a single uniqueness region of a puzzle. Row, column, and box
/// ids are each in the range `[0, size)`; subsector ids are positions in the
/// anchor list the [RegionIndex] was built with.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RegionId {

    /// The row with the given index, containing all cells `(i, 0..size)`.
    Row(usize),

    /// The column with the given index, containing all cells `(0..size, j)`.
    Column(usize),

    /// The box with the given id. Boxes partition the grid into `size`
    /// square blocks of box size; see [RegionIndex::box_of] for the id
    /// assignment.
    Box(usize),

    /// The subsector with the given index into the anchor list.
    Subsector(usize)
}

/// An additional square uniqueness region of box size, anchored at a given
/// cell. The cell `(row, column)` belongs to the subsector if and only if
/// `row` lies in `[anchor_row, anchor_row + box_size)` and `column` lies in
/// `[anchor_column, anchor_column + box_size)`.
///
/// Subsectors are independent of the box partition: they may cut across box
/// borders, coincide with a box, or overlap other subsectors. An anchor so
/// close to the grid border that the block sticks out yields a partial
/// region covering only the cells that exist.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Subsector {
    anchor_row: usize,
    anchor_column: usize
}

impl Subsector {

    /// Creates a new subsector anchored at the given cell, which becomes its
    /// top-left corner.
    pub fn new(anchor_row: usize, anchor_column: usize) -> Subsector {
        Subsector {
            anchor_row,
            anchor_column
        }
    }

    /// Gets the row of the anchor cell.
    pub fn anchor_row(&self) -> usize {
        self.anchor_row
    }

    /// Gets the column of the anchor cell.
    pub fn anchor_column(&self) -> usize {
        self.anchor_column
    }

    fn contains(&self, box_size: usize, row: usize, column: usize) -> bool {
        row >= self.anchor_row && row < self.anchor_row + box_size &&
            column >= self.anchor_column &&
            column < self.anchor_column + box_size
    }
}

fn exact_sqrt(size: usize) -> Option<usize> {
    let mut root = 0usize;

    while root * root < size {
        root += 1;
    }

    if root * root == size {
        Some(root)
    }
    else {
        None
    }
}

/// The pure mapping from cell coordinates to the regions containing them.
/// For every cell this is its row, its column, its box, and at most one
/// subsector. A `RegionIndex` carries no mutable state; it is constructed
/// once from the puzzle parameters and consulted by the
/// [GridState](crate::GridState) on every placement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegionIndex {
    size: usize,
    box_size: usize,
    subsectors: Vec<Subsector>
}

impl RegionIndex {

    /// Creates a region index for a grid of the given size with only the
    /// standard regions (rows, columns, and boxes).
    ///
    /// # Errors
    ///
    /// If `size` is zero or not a perfect square. In that case,
    /// `PuzzleError::InvalidSize` is returned.
    pub fn new(size: usize) -> PuzzleResult<RegionIndex> {
        RegionIndex::with_subsectors(size, Vec::new())
    }

    /// Creates a region index for a grid of the given size with the standard
    /// regions plus one subsector per entry of `subsectors`. The position of
    /// an anchor in the list is the subsector id used in
    /// [RegionId::Subsector]. When two subsectors overlap, a cell in the
    /// overlap is attributed to the one that comes first in the list.
    ///
    /// # Errors
    ///
    /// If `size` is zero or not a perfect square. In that case,
    /// `PuzzleError::InvalidSize` is returned.
    pub fn with_subsectors(size: usize, subsectors: Vec<Subsector>)
            -> PuzzleResult<RegionIndex> {
        if size == 0 {
            return Err(PuzzleError::InvalidSize);
        }

        let box_size = exact_sqrt(size).ok_or(PuzzleError::InvalidSize)?;

        Ok(RegionIndex {
            size,
            box_size,
            subsectors
        })
    }

    /// Gets the total size of the grid on one axis, which is also the number
    /// of rows, of columns, and of boxes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the side length of one box, i.e. the square root of
    /// [RegionIndex::size].
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Gets the subsectors of this index in id order.
    pub fn subsectors(&self) -> &[Subsector] {
        &self.subsectors
    }

    /// Computes the id of the box containing the cell at the given position.
    /// Box ids are assigned left-to-right, top-to-bottom:
    /// `box_size * (row / box_size) + column / box_size`. The id of a box
    /// depends only on the cell position, never on the traversal order.
    pub fn box_of(&self, row: usize, column: usize) -> usize {
        self.box_size * (row / self.box_size) + column / self.box_size
    }

    /// Gets the id of the subsector containing the cell at the given
    /// position, or `None` if no subsector covers it. If several anchors
    /// cover the cell, the lowest id wins.
    pub fn subsector_of(&self, row: usize, column: usize) -> Option<usize> {
        self.subsectors.iter()
            .position(|s| s.contains(self.box_size, row, column))
    }

    /// Gets the ids of all regions containing the cell at the given position:
    /// always its row, its column, and its box, plus its subsector if any.
    pub fn regions_of(&self, row: usize, column: usize) -> Vec<RegionId> {
        let mut regions = Vec::with_capacity(4);
        regions.push(RegionId::Row(row));
        regions.push(RegionId::Column(column));
        regions.push(RegionId::Box(self.box_of(row, column)));

        if let Some(subsector) = self.subsector_of(row, column) {
            regions.push(RegionId::Subsector(subsector));
        }

        regions
    }
}

/// Records, for every region of a puzzle, the set of symbols currently
/// placed in it. The tracker is owned by a [GridState](crate::GridState),
/// which keeps it in sync with the cell matrix through its place and unplace
/// operations.
///
/// All operations are constant time and have no error conditions; passing a
/// region id or symbol index that does not belong to the puzzle is a caller
/// bug.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintTracker {
    rows: Vec<SymbolSet>,
    columns: Vec<SymbolSet>,
    boxes: Vec<SymbolSet>,
    subsectors: Vec<SymbolSet>
}

impl ConstraintTracker {

    /// Creates a tracker for a grid of the given size with the given number
    /// of subsectors, where every region starts out empty.
    pub fn new(size: usize, subsector_count: usize) -> ConstraintTracker {
        ConstraintTracker {
            rows: vec![SymbolSet::new(size); size],
            columns: vec![SymbolSet::new(size); size],
            boxes: vec![SymbolSet::new(size); size],
            subsectors: vec![SymbolSet::new(size); subsector_count]
        }
    }

    fn set(&self, region: RegionId) -> &SymbolSet {
        match region {
            RegionId::Row(i) => &self.rows[i],
            RegionId::Column(j) => &self.columns[j],
            RegionId::Box(b) => &self.boxes[b],
            RegionId::Subsector(s) => &self.subsectors[s]
        }
    }

    fn set_mut(&mut self, region: RegionId) -> &mut SymbolSet {
        match region {
            RegionId::Row(i) => &mut self.rows[i],
            RegionId::Column(j) => &mut self.columns[j],
            RegionId::Box(b) => &mut self.boxes[b],
            RegionId::Subsector(s) => &mut self.subsectors[s]
        }
    }

    /// Indicates whether the symbol with the given index is currently used
    /// in the given region.
    pub fn used(&self, region: RegionId, symbol: usize) -> bool {
        self.set(region).contains(symbol)
    }

    /// Marks the symbol with the given index as used in the given region.
    /// Returns `true` if the symbol was not marked before and `false` if it
    /// already was, which callers use to detect duplicates while populating
    /// the tracker from an initial grid.
    pub fn mark(&mut self, region: RegionId, symbol: usize) -> bool {
        self.set_mut(region).insert(symbol)
    }

    /// Unmarks the symbol with the given index in the given region, i.e.
    /// records that it is no longer used there.
    pub fn unmark(&mut self, region: RegionId, symbol: usize) {
        self.set_mut(region).remove(symbol);
    }
}
