//! Typed dataset records.
//!
//! Records are parsed once at load time into plain structs. Field access is
//! member access; a record that is missing a move slot or an attribute key
//! never makes it out of the loader.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::LookupError;
use crate::nature::Nature;
use crate::stat::StatLine;

/// Number of move slots on every set.
pub const MOVE_SLOTS: usize = 4;

/// One preset configuration from the Battle Factory pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantSet {
    /// Species name.
    pub name: String,
    /// 1-based position among the sets of the same species.
    pub set_number: u32,
    pub item: String,
    /// Move slots in dataset order. Source data may leave a slot empty.
    pub moves: [String; MOVE_SLOTS],
    pub nature: String,
    /// Stored effort allocation. Kept as loaded; the round-based
    /// calculation does not read it.
    pub evs: StatLine<u16>,
}

impl CombatantSet {
    /// Parse the stored nature name.
    pub fn parsed_nature(&self) -> Result<Nature, LookupError> {
        self.nature.parse()
    }

    /// Non-empty move slots.
    pub fn filled_moves(&self) -> impl Iterator<Item = &str> {
        self.moves
            .iter()
            .map(String::as_str)
            .filter(|slot| !slot.trim().is_empty())
    }
}

/// Variant body shared by both dataset layouts.
#[derive(Debug, Deserialize)]
struct VariantEntry {
    item: String,
    moves: [String; MOVE_SLOTS],
    nature: String,
    evs: StatLine<u16>,
}

impl VariantEntry {
    fn into_set(self, name: String, set_number: u32) -> CombatantSet {
        CombatantSet {
            name,
            set_number,
            item: self.item,
            moves: self.moves,
            nature: self.nature,
            evs: self.evs,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NamedVariant {
    name: String,
    #[serde(flatten)]
    variant: VariantEntry,
}

#[derive(Debug, Deserialize)]
struct SpeciesGroup {
    variants: Vec<VariantEntry>,
}

/// Every set in a combatant-set document, in document order.
///
/// Accepts either the native grouped layout (species name mapped to its
/// `variants`) or a flat list of named records. The grouped layout is read
/// entry by entry so species order survives without an ordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCatalog(pub Vec<CombatantSet>);

impl SetCatalog {
    /// Take the sets out of the catalog.
    pub fn into_inner(self) -> Vec<CombatantSet> {
        self.0
    }
}

impl<'de> Deserialize<'de> for SetCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = SetCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of sets or a map of species to variants")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut sets = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        let mut seen: HashMap<String, u32> = HashMap::new();
        while let Some(entry) = seq.next_element::<NamedVariant>()? {
            let count = seen.entry(entry.name.clone()).or_insert(0);
            *count += 1;
            sets.push(entry.variant.into_set(entry.name, *count));
        }
        Ok(SetCatalog(sets))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut sets = Vec::new();
        let mut seen: HashMap<String, u32> = HashMap::new();
        while let Some((name, group)) = map.next_entry::<String, SpeciesGroup>()? {
            // A repeated species key continues numbering where the first left off
            let count = seen.entry(name.clone()).or_insert(0);
            for variant in group.variants {
                *count += 1;
                sets.push(variant.into_set(name.clone(), *count));
            }
        }
        Ok(SetCatalog(sets))
    }
}

/// One species' base attribute profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub name: String,
    pub stats: StatLine<u16>,
}

/// Base attributes keyed by species name.
///
/// # Examples
///
/// ```rust
/// use battle_factory::{BaseStatsTable, Stat};
///
/// let json = r#"{"Starmie": {"hp":60,"attack":75,"defense":85,"spAttack":100,"spDefense":85,"speed":115}}"#;
/// let table: BaseStatsTable = serde_json::from_str(json).unwrap();
///
/// let starmie = table.get("Starmie").unwrap();
/// assert_eq!(starmie.stats.get(Stat::Speed), 115);
/// assert!(table.get("Staryu").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, StatLine<u16>>")]
pub struct BaseStatsTable {
    entries: HashMap<String, BaseStats>,
}

impl BaseStatsTable {
    /// Look up a species by its exact name.
    pub fn get(&self, species: &str) -> Result<&BaseStats, LookupError> {
        self.entries
            .get(species)
            .ok_or_else(|| LookupError::UnknownSpecies(species.to_string()))
    }

    /// Whether `species` has an entry.
    pub fn contains(&self, species: &str) -> bool {
        self.entries.contains_key(species)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add or replace the entry for `base.name`.
    pub fn insert(&mut self, base: BaseStats) {
        self.entries.insert(base.name.clone(), base);
    }
}

impl From<HashMap<String, StatLine<u16>>> for BaseStatsTable {
    fn from(raw: HashMap<String, StatLine<u16>>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(name, stats)| (name.clone(), BaseStats { name, stats }))
            .collect();
        Self { entries }
    }
}

impl FromIterator<BaseStats> for BaseStatsTable {
    fn from_iter<I: IntoIterator<Item = BaseStats>>(iter: I) -> Self {
        let mut table = Self::default();
        for base in iter {
            table.insert(base);
        }
        table
    }
}
