//! Tournament round context for stat derivation and set filtering.
//!
//! The Battle Factory hands out stronger opponents as a run progresses.
//! `RoundContext` captures where a run stands: the round number and whether
//! the "Fight Seven" rule shifts the schedule forward by one round.

use serde::{Deserialize, Serialize};

/// Highest distinct round. Everything after it behaves like round 8.
pub const MAX_ROUND: u8 = 8;

/// Effort granted per cleared round.
pub const EFFORT_PER_ROUND: u8 = 4;

/// Effort at the final round, regardless of the linear schedule.
pub const MAX_EFFORT: u8 = 31;

/// Round number plus the special-rule flag.
///
/// # Examples
///
/// ```rust
/// use battle_factory::RoundContext;
///
/// assert_eq!(RoundContext::new(1, false).effort(), 0);
/// assert_eq!(RoundContext::new(1, true).effort(), 4);
/// assert_eq!(RoundContext::new(10, false).effort(), 31);
///
/// // Out-of-range rounds are clamped
/// assert_eq!(RoundContext::new(0, false).round(), 1);
/// assert_eq!(RoundContext::new(12, true).round(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRound")]
pub struct RoundContext {
    round: u8,
    fight_seven: bool,
}

/// Unchecked wire form; every decoded value goes through [`RoundContext::new`].
#[derive(Deserialize)]
struct RawRound {
    round: u32,
    #[serde(default)]
    fight_seven: bool,
}

impl From<RawRound> for RoundContext {
    fn from(raw: RawRound) -> Self {
        Self::new(raw.round, raw.fight_seven)
    }
}

impl RoundContext {
    /// Create a context, clamping `round` into `1..=8`.
    pub fn new(round: u32, fight_seven: bool) -> Self {
        let round = round.clamp(1, u32::from(MAX_ROUND)) as u8;
        Self { round, fight_seven }
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    /// Whether the "Fight Seven" rule is on.
    pub fn fight_seven(&self) -> bool {
        self.fight_seven
    }

    /// Effort accumulated by this round.
    ///
    /// Fills the formula's individual-value slot. Grows by
    /// [`EFFORT_PER_ROUND`] per round, starting one round early under the
    /// special rule, and is pinned to [`MAX_EFFORT`] from round 8 on.
    pub fn effort(&self) -> u8 {
        if self.round >= MAX_ROUND {
            return MAX_EFFORT;
        }
        let cleared = if self.fight_seven {
            self.round
        } else {
            self.round.saturating_sub(1)
        };
        cleared * EFFORT_PER_ROUND
    }

    /// Whether a set with the given 1-based number can appear this round.
    ///
    /// Early rounds only deal a narrow window of set numbers: sets `round - 1`
    /// and `round` through round 4, or only set `round + 1` through round 3
    /// under the special rule. Later rounds deal any set.
    pub fn admits_set(&self, set_number: u32) -> bool {
        let round = u32::from(self.round);
        if self.fight_seven {
            round >= 4 || set_number == round + 1
        } else {
            round >= 5 || set_number == round || set_number + 1 == round
        }
    }
}

impl Default for RoundContext {
    fn default() -> Self {
        Self::new(1, false)
    }
}
