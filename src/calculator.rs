//! Stat derivation.
//!
//! Reproduces the game's integer stat formula for a set at a given round:
//!
//! ```text
//! core  = floor((2 x base + effort + floor(ev / 4)) x level / 100)
//! HP    = core + level + 10
//! other = floor((core + 5) x nature% / 100)
//! ```
//!
//! `effort` comes from the [`RoundContext`]; the set's stored EVs are not
//! used by [`compute_stats`]. [`variant_stat`] takes an explicit EV value for
//! callers that want it applied.

use std::path::Path;
use tracing::debug;

use crate::context::RoundContext;
use crate::error::{FactoryError, LookupError};
use crate::nature::{Nature, NatureModifier};
use crate::record::{BaseStatsTable, CombatantSet};
use crate::resolved::DerivedStat;
use crate::stat::{Stat, StatLine};
use crate::store::load_base_stats;

/// Level of every Battle Factory opponent.
pub const LEVEL: u32 = 100;

fn core_value(base: u16, effort: u8, ev: u16, level: u32) -> u32 {
    (2 * u32::from(base) + u32::from(effort) + u32::from(ev) / 4) * level / 100
}

/// HP for the given inputs. Natures never touch HP.
///
/// # Examples
///
/// ```rust
/// use battle_factory::calculator::{hp_value, LEVEL};
///
/// // Metagross, no effort, no EVs
/// assert_eq!(hp_value(80, 0, 0, LEVEL), 270);
/// ```
pub fn hp_value(base: u16, effort: u8, ev: u16, level: u32) -> u32 {
    core_value(base, effort, ev, level) + level + 10
}

/// Any non-HP attribute for the given inputs.
///
/// # Examples
///
/// ```rust
/// use battle_factory::calculator::{stat_value, LEVEL};
/// use battle_factory::NatureModifier;
///
/// // Adamant Metagross attack at full effort, without and with 252 EVs
/// assert_eq!(stat_value(135, 31, 0, LEVEL, NatureModifier::Boosted), 336);
/// assert_eq!(stat_value(135, 31, 252, LEVEL, NatureModifier::Boosted), 405);
/// ```
pub fn stat_value(base: u16, effort: u8, ev: u16, level: u32, modifier: NatureModifier) -> u32 {
    modifier.apply(core_value(base, effort, ev, level) + 5)
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Stat calculator for a fixed level.
///
/// Holds no data of its own; every call is a pure function of its
/// arguments.
///
/// # Examples
///
/// ```rust
/// use battle_factory::{BaseStats, BaseStatsTable, CombatantSet, RoundContext, StatCalculator, StatLine};
///
/// let table: BaseStatsTable = [BaseStats {
///     name: "Metagross".to_string(),
///     stats: StatLine { hp: 80, attack: 135, defense: 130, sp_attack: 95, sp_defense: 90, speed: 70 },
/// }]
/// .into_iter()
/// .collect();
///
/// let set = CombatantSet {
///     name: "Metagross".to_string(),
///     set_number: 1,
///     item: "Lum Berry".to_string(),
///     moves: ["Meteor Mash", "Earthquake", "Agility", "Pursuit"].map(String::from),
///     nature: "Adamant".to_string(),
///     evs: StatLine::default(),
/// };
///
/// let stats = StatCalculator::new()
///     .compute(&set, &table, RoundContext::new(8, false))
///     .unwrap();
/// assert_eq!(stats.hp, 301);
/// assert_eq!(stats.attack, 336);
/// assert_eq!(stats.sp_attack, 203);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCalculator {
    level: u32,
}

impl StatCalculator {
    /// Calculator at [`LEVEL`].
    pub fn new() -> Self {
        Self { level: LEVEL }
    }

    /// Calculator at another level, clamped to `1..=100`.
    pub fn with_level(level: u32) -> Self {
        Self {
            level: level.clamp(1, 100),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Derive one attribute with its breakdown.
    pub fn derive(&self, stat: Stat, base: u16, effort: u8, ev: u16, nature: Nature) -> DerivedStat {
        let level = self.level;
        let mut derived = DerivedStat::new(stat, 0);

        derived.add_term("Base x2", 2 * u32::from(base));
        derived.add_term("Effort", u32::from(effort));
        if ev > 0 {
            derived.add_term("EV / 4", u32::from(ev) / 4);
        }

        let core = core_value(base, effort, ev, level);
        derived.add_step(format!("Level {level} scaling"), core);

        let value = if stat == Stat::Hp {
            let hp = core + level + 10;
            derived.add_step(format!("Flat +{}", level + 10), hp);
            hp
        } else {
            derived.add_step("Flat +5", core + 5);
            let modifier = nature.modifier(stat);
            let value = modifier.apply(core + 5);
            if modifier != NatureModifier::Neutral {
                derived.add_step(modifier.description(), value);
            }
            value
        };

        derived.value = clamp_u16(value);
        derived
    }

    /// Full breakdown of all six attributes for `set` at `round`.
    pub fn breakdown(
        &self,
        set: &CombatantSet,
        base_stats: &BaseStatsTable,
        round: RoundContext,
    ) -> Result<StatLine<DerivedStat>, LookupError> {
        let base = base_stats.get(&set.name)?;
        let nature = set.parsed_nature()?;
        let effort = round.effort();
        debug!(
            species = %set.name,
            set_number = set.set_number,
            round = round.round(),
            fight_seven = round.fight_seven(),
            effort,
            "deriving stats"
        );
        Ok(base
            .stats
            .map(|stat, &value| self.derive(stat, value, effort, 0, nature)))
    }

    /// The six final values for `set` at `round`.
    pub fn compute(
        &self,
        set: &CombatantSet,
        base_stats: &BaseStatsTable,
        round: RoundContext,
    ) -> Result<StatLine<u16>, LookupError> {
        let breakdown = self.breakdown(set, base_stats, round)?;
        Ok(breakdown.map(|_, derived| derived.value))
    }
}

impl Default for StatCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// The six final values for `set` at `round`, at level 100.
///
/// Fails with [`LookupError::UnknownSpecies`] when the species has no base
/// stats, or [`LookupError::UnknownNature`] when the stored nature is not one
/// of the 25.
pub fn compute_stats(
    set: &CombatantSet,
    base_stats: &BaseStatsTable,
    round: RoundContext,
) -> Result<StatLine<u16>, LookupError> {
    StatCalculator::new().compute(set, base_stats, round)
}

/// One attribute for one species, loading base stats from `base_path`.
///
/// Unlike [`compute_stats`], the stored EV value is applied.
pub fn variant_stat(
    base_path: impl AsRef<Path>,
    species: &str,
    stat_key: &str,
    stored_ev: u16,
    derived_effort: u8,
    level: u32,
    nature: &str,
) -> Result<u16, FactoryError> {
    let stat: Stat = stat_key.parse()?;
    let nature: Nature = nature.parse()?;
    let table = load_base_stats(base_path)?;
    let base = table.get(species)?.stats.get(stat);
    let derived = StatCalculator::with_level(level).derive(stat, base, derived_effort, stored_ev, nature);
    Ok(derived.value)
}
