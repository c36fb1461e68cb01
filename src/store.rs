//! Dataset loading.
//!
//! The plain loaders read and parse a file on every call. `SnapshotCache`
//! keeps the parsed result behind an `Arc` and reuses it until the file's
//! modification time changes.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, trace};

use crate::error::DatasetError;
use crate::record::{BaseStatsTable, CombatantSet, SetCatalog};

/// Default location of the combatant-set dataset.
pub const DEFAULT_SETS_PATH: &str = "data/battle_factory_pokemon.json";

/// Default location of the base-stat dataset.
pub const DEFAULT_BASE_STATS_PATH: &str = "data/base_stats.json";

fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = fs::read(path).map_err(|source| DatasetError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    // Encoding problems are content problems, so they surface from the parser.
    serde_json::from_slice(&raw).map_err(|source| DatasetError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every combatant set, in document order.
pub fn load_combatant_sets(path: impl AsRef<Path>) -> Result<Vec<CombatantSet>, DatasetError> {
    let path = path.as_ref();
    let sets = read_dataset::<SetCatalog>(path)?.into_inner();
    debug!(path = %path.display(), records = sets.len(), "loaded combatant sets");
    Ok(sets)
}

/// Load the species → base stats table.
pub fn load_base_stats(path: impl AsRef<Path>) -> Result<BaseStatsTable, DatasetError> {
    let path = path.as_ref();
    let table: BaseStatsTable = read_dataset(path)?;
    debug!(path = %path.display(), species = table.len(), "loaded base stats");
    Ok(table)
}

#[derive(Debug)]
struct Snapshot<T: ?Sized> {
    modified: Option<SystemTime>,
    data: Arc<T>,
}

type SnapshotSlot<T> = Mutex<HashMap<PathBuf, Snapshot<T>>>;

/// Immutable dataset snapshots keyed by path and modification time.
///
/// Snapshots are shared `Arc`s, so callers on different threads can hold the
/// same data. A file whose modification time cannot be read is never served
/// from the cache.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    sets: SnapshotSlot<[CombatantSet]>,
    base_stats: SnapshotSlot<BaseStatsTable>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combatant sets at `path`, loading them if the cached copy is stale.
    pub fn combatant_sets(&self, path: impl AsRef<Path>) -> Result<Arc<[CombatantSet]>, DatasetError> {
        cached(&self.sets, path.as_ref(), |p| {
            load_combatant_sets(p).map(Arc::from)
        })
    }

    /// Base stats at `path`, loading them if the cached copy is stale.
    pub fn base_stats(&self, path: impl AsRef<Path>) -> Result<Arc<BaseStatsTable>, DatasetError> {
        cached(&self.base_stats, path.as_ref(), |p| {
            load_base_stats(p).map(Arc::new)
        })
    }

    /// Drop every cached snapshot.
    pub fn clear(&self) {
        self.sets.lock().clear();
        self.base_stats.lock().clear();
    }
}

fn cached<T: ?Sized>(
    slot: &SnapshotSlot<T>,
    path: &Path,
    load: impl FnOnce(&Path) -> Result<Arc<T>, DatasetError>,
) -> Result<Arc<T>, DatasetError> {
    let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok();

    if let (Some(snapshot), Some(_)) = (slot.lock().get(path), modified) {
        if snapshot.modified == modified {
            trace!(path = %path.display(), "dataset snapshot cache hit");
            return Ok(Arc::clone(&snapshot.data));
        }
    }

    let data = load(path)?;
    slot.lock().insert(
        path.to_path_buf(),
        Snapshot {
            modified,
            data: Arc::clone(&data),
        },
    );
    Ok(data)
}
