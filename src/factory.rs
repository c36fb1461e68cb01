//! Service facade used by front ends.
//!
//! `Factory` ties configuration, dataset loading and the two engines
//! together. It keeps no per-query state; the only thing it remembers between
//! calls is the optional snapshot cache.

use std::sync::Arc;
use tracing::debug;

use crate::calculator::StatCalculator;
use crate::config::FactoryConfig;
use crate::context::RoundContext;
use crate::error::{DatasetError, FactoryError};
use crate::query::{filter_sets, QueryCriteria};
use crate::record::{BaseStatsTable, CombatantSet};
use crate::resolved::DerivedStat;
use crate::results::SetResults;
use crate::stat::StatLine;
use crate::store::{load_base_stats, load_combatant_sets, SnapshotCache};

/// Search and stat service over one pair of dataset files.
///
/// Cheap to share across threads: snapshots are immutable `Arc`s and the
/// cache sits behind a mutex.
///
/// # Examples
///
/// ```rust,no_run
/// use battle_factory::{Factory, FactoryConfig, QueryCriteria, RoundContext};
///
/// let factory = Factory::new(FactoryConfig::default());
/// let results = factory.search(&QueryCriteria::new().with_name("metagross"))?;
/// let stats = factory.stats_for(&results, 0, RoundContext::new(8, false))?;
/// println!("attack {}", stats.attack);
/// # Ok::<(), battle_factory::FactoryError>(())
/// ```
#[derive(Debug, Default)]
pub struct Factory {
    config: FactoryConfig,
    cache: SnapshotCache,
    calculator: StatCalculator,
}

impl Factory {
    /// Service at level 100 reading the files named in `config`.
    pub fn new(config: FactoryConfig) -> Self {
        Self {
            config,
            cache: SnapshotCache::new(),
            calculator: StatCalculator::new(),
        }
    }

    /// Configuration this service was built with.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Current combatant-set snapshot.
    pub fn sets(&self) -> Result<Arc<[CombatantSet]>, DatasetError> {
        if self.config.cache_datasets {
            self.cache.combatant_sets(&self.config.sets_path)
        } else {
            load_combatant_sets(&self.config.sets_path).map(Arc::from)
        }
    }

    /// Current base-stat snapshot.
    pub fn base_stats(&self) -> Result<Arc<BaseStatsTable>, DatasetError> {
        if self.config.cache_datasets {
            self.cache.base_stats(&self.config.base_stats_path)
        } else {
            load_base_stats(&self.config.base_stats_path).map(Arc::new)
        }
    }

    /// Sets matching `criteria`, in dataset order.
    pub fn search(&self, criteria: &QueryCriteria) -> Result<SetResults, DatasetError> {
        let sets = self.sets()?;
        Ok(filter_sets(criteria, &sets))
    }

    /// Final stats for one set.
    pub fn stats(&self, set: &CombatantSet, round: RoundContext) -> Result<StatLine<u16>, FactoryError> {
        let table = self.base_stats()?;
        Ok(self.calculator.compute(set, &table, round)?)
    }

    /// Final stats with per-attribute breakdown.
    pub fn breakdown(
        &self,
        set: &CombatantSet,
        round: RoundContext,
    ) -> Result<StatLine<DerivedStat>, FactoryError> {
        let table = self.base_stats()?;
        Ok(self.calculator.breakdown(set, &table, round)?)
    }

    /// Stats for the `index`-th match of a previous search.
    pub fn stats_for(
        &self,
        results: &SetResults,
        index: usize,
        round: RoundContext,
    ) -> Result<StatLine<u16>, FactoryError> {
        let set = results.get(index)?;
        debug!(index, species = %set.name, "selected result");
        self.stats(set, round)
    }
}
