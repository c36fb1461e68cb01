//! Attribute identifiers and six-attribute stat lines.
//!
//! Provides the [`Stat`] key type and [`StatLine`], a fixed record with one
//! value per attribute. The same line type carries base stats, stored effort
//! allocations and final derived values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// One of the six battle attributes.
///
/// Serializes as the dataset key (`hp`, `attack`, `defense`, `spAttack`,
/// `spDefense`, `speed`).
///
/// # Examples
///
/// ```rust
/// use battle_factory::Stat;
///
/// let speed: Stat = "speed".parse().unwrap();
/// assert_eq!(speed, Stat::Speed);
/// assert_eq!(Stat::SpAttack.key(), "spAttack");
///
/// // Short aliases are accepted too
/// let spa: Stat = "SPA".parse().unwrap();
/// assert_eq!(spa, Stat::SpAttack);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    /// All attributes in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    /// The dataset key for this attribute.
    pub fn key(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpAttack => "spAttack",
            Stat::SpDefense => "spDefense",
            Stat::Speed => "speed",
        }
    }

    /// Short label used in tables.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Atk",
            Stat::Defense => "Def",
            Stat::SpAttack => "SpA",
            Stat::SpDefense => "SpD",
            Stat::Speed => "Spe",
        }
    }
}

impl FromStr for Stat {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "hp" => Ok(Stat::Hp),
            "attack" | "atk" => Ok(Stat::Attack),
            "defense" | "def" => Ok(Stat::Defense),
            "spattack" | "spa" => Ok(Stat::SpAttack),
            "spdefense" | "spd" => Ok(Stat::SpDefense),
            "speed" | "spe" => Ok(Stat::Speed),
            _ => Err(LookupError::UnknownStat(s.to_string())),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Stat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.key().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One value per attribute.
///
/// Every field is required when deserializing, so a dataset entry missing
/// any of the six keys is rejected at load time.
///
/// # Examples
///
/// ```rust
/// use battle_factory::{Stat, StatLine};
///
/// let line = StatLine::from_fn(|stat| if stat == Stat::Hp { 80 } else { 100 });
/// assert_eq!(line.get(Stat::Hp), 80);
/// assert_eq!(line.iter().map(|(_, v)| v).sum::<u16>(), 580);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine<T> {
    pub hp: T,
    pub attack: T,
    pub defense: T,
    pub sp_attack: T,
    pub sp_defense: T,
    pub speed: T,
}

impl<T> StatLine<T> {
    /// Build a line by evaluating `f` once per attribute, in [`Stat::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Stat) -> T) -> Self {
        Self {
            hp: f(Stat::Hp),
            attack: f(Stat::Attack),
            defense: f(Stat::Defense),
            sp_attack: f(Stat::SpAttack),
            sp_defense: f(Stat::SpDefense),
            speed: f(Stat::Speed),
        }
    }

    /// Borrow the value for one attribute.
    pub fn get_ref(&self, stat: Stat) -> &T {
        match stat {
            Stat::Hp => &self.hp,
            Stat::Attack => &self.attack,
            Stat::Defense => &self.defense,
            Stat::SpAttack => &self.sp_attack,
            Stat::SpDefense => &self.sp_defense,
            Stat::Speed => &self.speed,
        }
    }

    /// Replace the value for one attribute.
    pub fn set(&mut self, stat: Stat, value: T) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpAttack => self.sp_attack = value,
            Stat::SpDefense => self.sp_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Apply `f` to every value, keeping attribute positions.
    pub fn map<U>(&self, mut f: impl FnMut(Stat, &T) -> U) -> StatLine<U> {
        StatLine::from_fn(|stat| f(stat, self.get_ref(stat)))
    }

    /// Fallible variant of [`StatLine::map`]; stops at the first error.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(Stat, &T) -> Result<U, E>) -> Result<StatLine<U>, E> {
        Ok(StatLine {
            hp: f(Stat::Hp, &self.hp)?,
            attack: f(Stat::Attack, &self.attack)?,
            defense: f(Stat::Defense, &self.defense)?,
            sp_attack: f(Stat::SpAttack, &self.sp_attack)?,
            sp_defense: f(Stat::SpDefense, &self.sp_defense)?,
            speed: f(Stat::Speed, &self.speed)?,
        })
    }
}

impl<T: Copy> StatLine<T> {
    /// Value for one attribute.
    pub fn get(&self, stat: Stat) -> T {
        *self.get_ref(stat)
    }

    /// `(attribute, value)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, T)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }
}
