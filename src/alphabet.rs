//! This module contains the definition of the [Alphabet], which fixes the set
//! of symbols a puzzle is played with.

use crate::error::{PuzzleError, PuzzleResult};
use crate::util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;

use std::collections::HashMap;
use std::hash::Hash;

/// An ordered list of distinct symbol labels together with a mapping from
/// each label to its dense index. All bookkeeping inside a
/// [GridState](crate::GridState) operates on the indices in the range
/// `[0, len)`; labels only appear at the boundary, when a puzzle is
/// constructed or its cells are read back.
///
/// The label type is generic, so a puzzle can be played with plain numbers,
/// characters, strings, or anything else that is hashable. An ordinary 9x9
/// Sudoku uses [Alphabet::numeric], which assigns the labels `1..=9`:
///
/// ```
/// use sudoku_regions::alphabet::Alphabet;
///
/// let alphabet = Alphabet::numeric(9);
/// assert_eq!(9, alphabet.len());
/// assert_eq!(Some(0), alphabet.index_of(&1));
/// assert_eq!(Some(&9), alphabet.label_at(8));
/// ```
///
/// A cell that holds no symbol is represented by `Option::None` at the grid
/// level, so there is no reserved empty label; every label of the alphabet is
/// a valid symbol.
///
/// The label list order is significant: it defines the candidate order of the
/// [BacktrackingSolver](crate::solver::BacktrackingSolver) and thereby which
/// of several completions of an ambiguous puzzle is found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<L>
where
    L: Clone + Eq + Hash
{
    labels: Vec<L>,
    indices: HashMap<L, usize>
}

impl<L: Clone + Eq + Hash + Serialize> Serialize for Alphabet<L> {
    fn serialize<S: Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        self.labels.serialize(serializer)
    }
}

impl<'de, L> Deserialize<'de> for Alphabet<L>
where
    L: Clone + Eq + Hash + Deserialize<'de>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D)
            -> Result<Alphabet<L>, D::Error> {
        let labels = Vec::<L>::deserialize(deserializer)?;
        Alphabet::new(labels).map_err(Error::custom)
    }
}

impl<L: Clone + Eq + Hash> Alphabet<L> {

    /// Creates a new alphabet from the given ordered list of labels. The
    /// index of each label is its position in the list.
    ///
    /// # Errors
    ///
    /// If `labels` is empty or contains the same label twice. In that case,
    /// `PuzzleError::InvalidAlphabet` is returned.
    pub fn new(labels: Vec<L>) -> PuzzleResult<Alphabet<L>> {
        if labels.is_empty() || util::contains_duplicate(labels.iter()) {
            return Err(PuzzleError::InvalidAlphabet);
        }

        let indices = labels.iter()
            .cloned()
            .enumerate()
            .map(|(index, label)| (label, index))
            .collect();

        Ok(Alphabet {
            labels,
            indices
        })
    }

    /// Gets the index of the given label, or `None` if it is not a member of
    /// this alphabet.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.indices.get(label).copied()
    }

    /// Gets the label at the given index, or `None` if the index is greater
    /// than or equal to [Alphabet::len].
    pub fn label_at(&self, index: usize) -> Option<&L> {
        self.labels.get(index)
    }

    /// Gets the labels of this alphabet in index order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the number of symbols in this alphabet.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Indicates whether this alphabet contains no symbols. Since
    /// construction rejects empty label lists, this is always `false`; it is
    /// provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Alphabet<usize> {

    /// Creates the default numeric alphabet for a grid of the given size: the
    /// labels `1..=size` in ascending order, so label `v` has index `v - 1`.
    pub fn numeric(size: usize) -> Alphabet<usize> {
        let labels: Vec<usize> = (1..=size).collect();
        let indices = labels.iter()
            .map(|&label| (label, label - 1))
            .collect();

        Alphabet {
            labels,
            indices
        }
    }
}
