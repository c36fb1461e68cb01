//! Derived stat results.
//!
//! Contains the `DerivedStat` type, a final attribute value together with
//! the terms and steps that produced it.

use serde::{Deserialize, Serialize};

use crate::stat::Stat;

/// A derived stat value with its full breakdown.
///
/// `terms` are the additive inputs to the level scaling
/// (`2 x base`, effort, stored EV quarter). `steps` are the values after each
/// operation applied on top of their sum, in order.
///
/// # Examples
///
/// ```rust
/// use battle_factory::{DerivedStat, Stat};
///
/// let mut derived = DerivedStat::new(Stat::Speed, 145);
/// derived.add_term("Base x2", 140);
/// derived.add_term("Effort", 0);
/// derived.add_step("Level 100 scaling", 140);
/// derived.add_step("Flat +5", 145);
///
/// assert_eq!(derived.terms.len(), 2);
/// assert_eq!(derived.steps.last().unwrap().1, 145);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedStat {
    pub stat: Stat,

    /// The final value shown in game.
    pub value: u16,

    /// Each entry is `(term_description, value)`.
    pub terms: Vec<(String, u32)>,

    /// Each entry is `(step_description, value_after_step)`.
    pub steps: Vec<(String, u32)>,
}

impl DerivedStat {
    /// Create a `DerivedStat` with an empty breakdown.
    pub fn new(stat: Stat, value: u16) -> Self {
        Self {
            stat,
            value,
            terms: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn add_term(&mut self, description: impl Into<String>, value: u32) {
        self.terms.push((description.into(), value));
    }

    pub fn add_step(&mut self, description: impl Into<String>, value: u32) {
        self.steps.push((description.into(), value));
    }

    /// Sum of all terms, the value fed into level scaling.
    pub fn term_total(&self) -> u32 {
        self.terms.iter().map(|(_, value)| value).sum()
    }
}
