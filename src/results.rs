//! Read-only view over the sets a query matched.

use serde::Serialize;

use crate::error::IndexError;
use crate::record::{CombatantSet, MOVE_SLOTS};
use crate::stat::StatLine;

/// Ordered, index-addressable matches of one query.
///
/// Keeps dataset order. There is no way to add, remove or edit entries;
/// every accessor hands out shared references.
///
/// # Examples
///
/// ```rust
/// use battle_factory::{IndexError, SetResults};
///
/// let results = SetResults::default();
/// assert!(results.is_empty());
/// assert_eq!(
///     results.get(0).unwrap_err(),
///     IndexError::OutOfBounds { index: 0, len: 0 }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SetResults {
    sets: Vec<CombatantSet>,
}

impl SetResults {
    pub(crate) fn new(sets: Vec<CombatantSet>) -> Self {
        Self { sets }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The match at `index`.
    pub fn get(&self, index: usize) -> Result<&CombatantSet, IndexError> {
        self.sets.get(index).ok_or(IndexError::OutOfBounds {
            index,
            len: self.sets.len(),
        })
    }

    /// Species name of the match at `index`.
    pub fn name(&self, index: usize) -> Result<&str, IndexError> {
        self.get(index).map(|set| set.name.as_str())
    }

    /// Held item of the match at `index`.
    pub fn item(&self, index: usize) -> Result<&str, IndexError> {
        self.get(index).map(|set| set.item.as_str())
    }

    /// Move slots of the match at `index`, empty slots included.
    pub fn moves(&self, index: usize) -> Result<&[String; MOVE_SLOTS], IndexError> {
        self.get(index).map(|set| &set.moves)
    }

    /// Nature name of the match at `index`, as stored.
    pub fn nature(&self, index: usize) -> Result<&str, IndexError> {
        self.get(index).map(|set| set.nature.as_str())
    }

    /// Stored EV spread of the match at `index`.
    pub fn evs(&self, index: usize) -> Result<&StatLine<u16>, IndexError> {
        self.get(index).map(|set| &set.evs)
    }

    /// Matches in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, CombatantSet> {
        self.sets.iter()
    }

    pub fn as_slice(&self) -> &[CombatantSet] {
        &self.sets
    }
}

impl<'a> IntoIterator for &'a SetResults {
    type Item = &'a CombatantSet;
    type IntoIter = std::slice::Iter<'a, CombatantSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
