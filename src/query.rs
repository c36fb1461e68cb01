//! Set search.
//!
//! A query is a handful of partial strings: a species name, an item and up
//! to four moves. Each non-empty field narrows the result; empty fields are
//! wildcards. Comparison lowercases both sides and collapses whitespace, then
//! checks that the query text occurs inside the record text, so `"meta"`
//! finds Metagross and `"thunder"` finds both Thunder and Thunderbolt.

use std::path::Path;
use tracing::debug;

use crate::context::RoundContext;
use crate::error::DatasetError;
use crate::record::CombatantSet;
use crate::results::SetResults;
use crate::store::load_combatant_sets;

/// Lowercase and collapse every whitespace run to one space.
///
/// # Examples
///
/// ```rust
/// use battle_factory::query::normalize;
///
/// assert_eq!(normalize("  Mr.   MIME "), "mr. mime");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_normalized(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || normalize(haystack).contains(needle)
}

/// Constraints for one search.
///
/// Strings are normalized when set. Empty move strings are dropped and
/// repeated moves collapse, so the move list behaves as a set.
///
/// # Examples
///
/// ```rust
/// use battle_factory::QueryCriteria;
///
/// let criteria = QueryCriteria::new()
///     .with_name(" Metagross ")
///     .with_moves(["Earthquake", "", "earthquake", "Meteor Mash"]);
///
/// assert_eq!(criteria.name(), "metagross");
/// assert_eq!(criteria.moves(), ["earthquake", "meteor mash"]);
/// assert!(!criteria.is_wildcard());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCriteria {
    name: String,
    item: String,
    moves: Vec<String>,
    round: Option<RoundContext>,
}

impl QueryCriteria {
    /// Criteria that match every set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the species name to contain `name`.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = normalize(name);
        self
    }

    /// Require the held item to contain `item`.
    pub fn with_item(mut self, item: &str) -> Self {
        self.item = normalize(item);
        self
    }

    /// Add one required move. Empty and repeated moves are ignored.
    pub fn with_move(mut self, name: &str) -> Self {
        let name = normalize(name);
        if !name.is_empty() && !self.moves.contains(&name) {
            self.moves.push(name);
        }
        self
    }

    /// Add several required moves; see [`QueryCriteria::with_move`].
    pub fn with_moves<I, S>(self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        moves
            .into_iter()
            .fold(self, |criteria, name| criteria.with_move(name.as_ref()))
    }

    /// Restrict results to the set numbers dealt at this round.
    pub fn with_round(mut self, round: RoundContext) -> Self {
        self.round = Some(round);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    /// Required moves, normalized, in first-seen order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn round(&self) -> Option<RoundContext> {
        self.round
    }

    /// True when no field constrains the search.
    pub fn is_wildcard(&self) -> bool {
        self.name.is_empty() && self.item.is_empty() && self.moves.is_empty() && self.round.is_none()
    }

    /// Whether `set` satisfies every constraint.
    pub fn matches(&self, set: &CombatantSet) -> bool {
        if let Some(round) = self.round {
            if !round.admits_set(set.set_number) {
                return false;
            }
        }
        if !contains_normalized(&set.name, &self.name) || !contains_normalized(&set.item, &self.item) {
            return false;
        }
        if self.moves.is_empty() {
            return true;
        }
        let slots: Vec<String> = set.moves.iter().map(|slot| normalize(slot)).collect();
        self.moves
            .iter()
            .all(|wanted| slots.iter().any(|slot| slot.contains(wanted.as_str())))
    }
}

/// Keep the sets matching `criteria`, in dataset order.
///
/// The input slice is left untouched; matches are copied into the result.
pub fn filter_sets(criteria: &QueryCriteria, sets: &[CombatantSet]) -> SetResults {
    if criteria.is_wildcard() {
        return SetResults::new(sets.to_vec());
    }
    let matched: Vec<CombatantSet> = sets.iter().filter(|set| criteria.matches(set)).cloned().collect();
    debug!(
        scanned = sets.len(),
        matched = matched.len(),
        name = criteria.name(),
        item = criteria.item(),
        moves = ?criteria.moves(),
        "filtered combatant sets"
    );
    SetResults::new(matched)
}

/// Load the dataset at `dataset_path` and search it.
///
/// The round window always applies here: before round 5 (round 4 under the
/// Fight Seven rule) only the set numbers dealt at `round` can match, so a
/// query with every text field empty returns the whole pool only from that
/// round on. Use [`filter_sets`] with [`QueryCriteria::new`] to list every
/// set regardless of round.
///
/// `exact` is accepted for callers that pass it but does not change
/// matching; comparison is always case-insensitive containment.
///
/// # Examples
///
/// ```rust,no_run
/// use battle_factory::search;
///
/// let none: [&str; 0] = [];
/// let opening = search("", &none, "", 1, false, false, "data/battle_factory_pokemon.json")?;
/// assert!(opening.iter().all(|set| set.set_number == 1));
///
/// let late = search("", &["earthquake"], "", 8, false, false, "data/battle_factory_pokemon.json")?;
/// assert!(!late.is_empty());
/// # Ok::<(), battle_factory::DatasetError>(())
/// ```
pub fn search<S: AsRef<str>>(
    name: &str,
    moves: &[S],
    item: &str,
    round: u32,
    fight_seven: bool,
    exact: bool,
    dataset_path: impl AsRef<Path>,
) -> Result<SetResults, DatasetError> {
    if exact {
        debug!("exact matching requested; using case-insensitive matching");
    }
    let criteria = QueryCriteria::new()
        .with_name(name)
        .with_item(item)
        .with_moves(moves)
        .with_round(RoundContext::new(round, fight_seven));
    let sets = load_combatant_sets(dataset_path)?;
    Ok(filter_sets(&criteria, &sets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::StatLine;

    fn set(name: &str, set_number: u32, item: &str, moves: [&str; 4]) -> CombatantSet {
        CombatantSet {
            name: name.to_string(),
            set_number,
            item: item.to_string(),
            moves: moves.map(str::to_string),
            nature: "Adamant".to_string(),
            evs: StatLine::default(),
        }
    }

    fn pool() -> Vec<CombatantSet> {
        vec![
            set("Metagross", 1, "Lum Berry", ["Meteor Mash", "Earthquake", "Agility", "Pursuit"]),
            set("Starmie", 1, "Leftovers", ["Surf", "Thunderbolt", "Ice Beam", "Recover"]),
            set("Starmie", 2, "Lum Berry", ["Hydro Pump", "Psychic", "Thunder", "Rapid Spin"]),
            set("Mr. Mime", 1, "Leftovers", ["Psychic", "Thunderbolt", "Barrier", ""]),
        ]
    }

    fn names(results: &SetResults) -> Vec<(String, u32)> {
        results.iter().map(|s| (s.name.clone(), s.set_number)).collect()
    }

    #[test]
    fn test_search_applies_round_window() {
        use std::io::Write;

        let evs = r#"{"hp":0,"attack":0,"defense":0,"spAttack":252,"spDefense":6,"speed":252}"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Starmie": {{"variants": [
                {{"item":"Leftovers","moves":["Surf","Thunderbolt","Ice Beam","Recover"],"nature":"Timid","evs":{evs}}},
                {{"item":"Lum Berry","moves":["Hydro Pump","Psychic","Thunder","Rapid Spin"],"nature":"Modest","evs":{evs}}}
            ]}}}}"#
        )
        .unwrap();
        let none: [&str; 0] = [];

        let opening = search("", &none, "", 1, false, false, file.path()).unwrap();
        assert_eq!(names(&opening), vec![("Starmie".to_string(), 1)]);

        let fight_seven = search("", &none, "", 1, true, false, file.path()).unwrap();
        assert_eq!(names(&fight_seven), vec![("Starmie".to_string(), 2)]);

        let late = search("", &none, "", 5, false, true, file.path()).unwrap();
        assert_eq!(late.len(), 2);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("\tMeteor \n  Mash  "), "meteor mash");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_wildcard_returns_everything() {
        let sets = pool();
        let results = filter_sets(&QueryCriteria::new(), &sets);
        assert_eq!(results.as_slice(), sets.as_slice());
    }

    #[test]
    fn test_name_is_case_and_space_insensitive() {
        let results = filter_sets(&QueryCriteria::new().with_name("  MR.  mime "), &pool());
        assert_eq!(names(&results), vec![("Mr. Mime".to_string(), 1)]);
    }

    #[test]
    fn test_item_filter() {
        let results = filter_sets(&QueryCriteria::new().with_item("lum berry"), &pool());
        assert_eq!(
            names(&results),
            vec![("Metagross".to_string(), 1), ("Starmie".to_string(), 2)]
        );
    }

    #[test]
    fn test_moves_are_an_unordered_subset() {
        let forward = filter_sets(&QueryCriteria::new().with_moves(["psychic", "thunderbolt"]), &pool());
        let backward = filter_sets(&QueryCriteria::new().with_moves(["THUNDERBOLT", "Psychic"]), &pool());
        assert_eq!(forward, backward);
        assert_eq!(names(&forward), vec![("Mr. Mime".to_string(), 1)]);
    }

    #[test]
    fn test_move_text_matches_inside_slot() {
        let results = filter_sets(&QueryCriteria::new().with_move("thunder"), &pool());
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_empty_move_is_not_a_slot_requirement() {
        let criteria = QueryCriteria::new().with_moves(["", "  "]);
        assert!(criteria.is_wildcard());
        assert_eq!(filter_sets(&criteria, &pool()).len(), 4);
    }

    #[test]
    fn test_unknown_move_matches_nothing() {
        let results = filter_sets(&QueryCriteria::new().with_move("Splash"), &pool());
        assert!(results.is_empty());
    }

    #[test]
    fn test_round_window_filters_set_numbers() {
        let criteria = QueryCriteria::new()
            .with_name("starmie")
            .with_round(RoundContext::new(1, true));
        assert_eq!(names(&filter_sets(&criteria, &pool())), vec![("Starmie".to_string(), 2)]);

        let late = QueryCriteria::new()
            .with_name("starmie")
            .with_round(RoundContext::new(6, false));
        assert_eq!(filter_sets(&late, &pool()).len(), 2);
    }
}
