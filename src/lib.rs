//! # battle-factory - Battle Factory Set Finder and Stat Calculator
//!
//! Finds the preset sets the Battle Factory can deal from a partial
//! description (species, item, up to four moves) and derives their level-100
//! stats for a given round:
//! - **Forgiving** search (case, spacing and move order do not matter)
//! - **Deterministic** stat derivation using the game's integer formula
//! - **Typed** datasets parsed once at load time
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! ```text
//! [Record Store] → [QueryCriteria] → [SetResults] → [StatCalculator] → [StatLine]
//! ```
//!
//! 1. **Record Store** loads the set pool and the base-stat table
//! 2. **Query** keeps the sets consistent with every non-empty field
//! 3. **SetResults** is a read-only, indexable view of the matches
//! 4. **StatCalculator** turns one match plus a [`RoundContext`] into six values
//!
//! ## Example
//!
//! ```rust
//! use battle_factory::*;
//!
//! let sets: SetCatalog = serde_json::from_str(r#"{
//!     "Metagross": {"variants": [{
//!         "item": "Lum Berry",
//!         "moves": ["Meteor Mash", "Earthquake", "Agility", "Pursuit"],
//!         "nature": "Adamant",
//!         "evs": {"hp": 6, "attack": 252, "defense": 0, "spAttack": 0, "spDefense": 0, "speed": 252}
//!     }]}
//! }"#).unwrap();
//! let base: BaseStatsTable = serde_json::from_str(r#"{
//!     "Metagross": {"hp": 80, "attack": 135, "defense": 130, "spAttack": 95, "spDefense": 90, "speed": 70}
//! }"#).unwrap();
//!
//! let results = filter_sets(&QueryCriteria::new().with_move("meteor mash"), &sets.0);
//! assert_eq!(results.len(), 1);
//!
//! let stats = compute_stats(results.get(0).unwrap(), &base, RoundContext::new(8, false)).unwrap();
//! assert_eq!(stats.get(Stat::Attack), 336);
//! ```
//!
//! ## Modules
//!
//! - [`store`] - Dataset loading and snapshot cache
//! - [`record`] - Set and base-stat records
//! - [`query`] - Search criteria and filtering
//! - [`results`] - Read-only result view
//! - [`calculator`] - Stat formula
//! - [`context`] - Round number and special rule
//! - [`nature`] - Nature table
//! - [`stat`] - Attribute keys and stat lines
//! - [`resolved`] - Derived stat breakdowns
//! - [`factory`] - Facade used by front ends
//! - [`config`] - Configuration
//! - [`error`] - Error types

pub mod calculator;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod nature;
pub mod query;
pub mod record;
pub mod resolved;
pub mod results;
pub mod stat;
pub mod store;

// Re-export main types for convenience
pub use calculator::{compute_stats, variant_stat, StatCalculator, LEVEL};
pub use config::FactoryConfig;
pub use context::RoundContext;
pub use error::{ConfigError, DatasetError, FactoryError, IndexError, LookupError};
pub use factory::Factory;
pub use nature::{Nature, NatureModifier};
pub use query::{filter_sets, search, QueryCriteria};
pub use record::{BaseStats, BaseStatsTable, CombatantSet, SetCatalog, MOVE_SLOTS};
pub use resolved::DerivedStat;
pub use results::SetResults;
pub use stat::{Stat, StatLine};
pub use store::{load_base_stats, load_combatant_sets, SnapshotCache};
