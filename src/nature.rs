//! The 25 natures and their stat modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;
use crate::stat::Stat;

/// A nature raises one non-HP attribute by 10% and lowers another by 10%.
///
/// Five natures name the same attribute twice and are neutral.
///
/// # Examples
///
/// ```rust
/// use battle_factory::{Nature, NatureModifier, Stat};
///
/// let adamant: Nature = "adamant".parse().unwrap();
/// assert_eq!(adamant.modifier(Stat::Attack), NatureModifier::Boosted);
/// assert_eq!(adamant.modifier(Stat::SpAttack), NatureModifier::Hindered);
/// assert_eq!(adamant.modifier(Stat::Speed), NatureModifier::Neutral);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Adamant,
    Naughty,
    Brave,
    Bold,
    Docile,
    Impish,
    Lax,
    Relaxed,
    Modest,
    Mild,
    Bashful,
    Rash,
    Quiet,
    Calm,
    Gentle,
    Careful,
    Quirky,
    Sassy,
    Timid,
    Hasty,
    Jolly,
    Naive,
    Serious,
}

impl Nature {
    /// Every nature, in the game's index order.
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Brave,
        Nature::Bold,
        Nature::Docile,
        Nature::Impish,
        Nature::Lax,
        Nature::Relaxed,
        Nature::Modest,
        Nature::Mild,
        Nature::Bashful,
        Nature::Rash,
        Nature::Quiet,
        Nature::Calm,
        Nature::Gentle,
        Nature::Careful,
        Nature::Quirky,
        Nature::Sassy,
        Nature::Timid,
        Nature::Hasty,
        Nature::Jolly,
        Nature::Naive,
        Nature::Serious,
    ];

    /// `(raised, lowered)` attributes. Equal for neutral natures.
    ///
    /// The index order lays the table out as a 5x5 grid, so the raised
    /// attribute is the row and the lowered one the column.
    pub fn effects(self) -> (Stat, Stat) {
        const GRID: [Stat; 5] = [
            Stat::Attack,
            Stat::Defense,
            Stat::SpAttack,
            Stat::SpDefense,
            Stat::Speed,
        ];
        let index = self as usize;
        (GRID[index / 5], GRID[index % 5])
    }

    /// Whether this nature leaves every attribute unchanged.
    pub fn is_neutral(self) -> bool {
        let (raised, lowered) = self.effects();
        raised == lowered
    }

    /// The modifier this nature applies to `stat`. HP is never affected.
    pub fn modifier(self, stat: Stat) -> NatureModifier {
        let (raised, lowered) = self.effects();
        if raised == lowered {
            NatureModifier::Neutral
        } else if stat == raised {
            NatureModifier::Boosted
        } else if stat == lowered {
            NatureModifier::Hindered
        } else {
            NatureModifier::Neutral
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Brave => "Brave",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Relaxed => "Relaxed",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Quiet => "Quiet",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
            Nature::Sassy => "Sassy",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Serious => "Serious",
        }
    }
}

impl FromStr for Nature {
    type Err = LookupError;

    /// Case-insensitive, ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Nature::ALL
            .into_iter()
            .find(|nature| nature.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LookupError::UnknownNature(s.to_string()))
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Effect of a nature on a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NatureModifier {
    Boosted,
    Neutral,
    Hindered,
}

impl NatureModifier {
    /// Multiplier in percent.
    pub fn percent(self) -> u32 {
        match self {
            NatureModifier::Boosted => 110,
            NatureModifier::Neutral => 100,
            NatureModifier::Hindered => 90,
        }
    }

    /// Scale `value`, rounding down as the game does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use battle_factory::NatureModifier;
    ///
    /// assert_eq!(NatureModifier::Boosted.apply(275), 302);
    /// assert_eq!(NatureModifier::Hindered.apply(195), 175);
    /// assert_eq!(NatureModifier::Neutral.apply(145), 145);
    /// ```
    pub fn apply(self, value: u32) -> u32 {
        value * self.percent() / 100
    }

    pub fn description(self) -> String {
        format!("Nature x{}%", self.percent())
    }
}
