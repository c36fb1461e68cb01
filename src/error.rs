//! Error types for dataset loading, lookups and result access.
//!
//! Each failure class has its own enum so callers can tell a missing
//! dataset apart from a species that simply is not in it. `FactoryError`
//! wraps all of them for the entry points that can fail more than one way.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading one of the bundled JSON datasets.
///
/// Datasets are static resources, so neither variant is worth retrying.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The path does not resolve to a readable file.
    #[error("dataset not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but does not match the expected schema.
    ///
    /// This includes records with the wrong number of move slots or a
    /// missing attribute key in `evs`.
    #[error("malformed dataset {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    /// Path of the dataset that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DatasetError::NotFound { path, .. } | DatasetError::Malformed { path, .. } => path,
        }
    }
}

/// A name that could not be resolved against the loaded reference data.
///
/// These fail a single stat computation and never poison a batch.
///
/// # Examples
///
/// ```rust
/// use battle_factory::LookupError;
///
/// let err = LookupError::UnknownSpecies("Missingno".to_string());
/// assert_eq!(err.to_string(), "unknown species: Missingno");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    #[error("unknown nature: {0}")]
    UnknownNature(String),

    #[error("unknown stat key: {0}")]
    UnknownStat(String),
}

/// Out-of-range access into a [`SetResults`](crate::SetResults).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("result index {index} out of bounds ({len} matches)")]
    OutOfBounds { index: usize, len: usize },
}

/// Problems reading a `factory.toml` configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Any failure surfaced by the [`Factory`](crate::Factory) facade.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::UnknownNature("Grumpy".to_string());
        assert!(err.to_string().contains("Grumpy"));
    }

    #[test]
    fn test_index_error_display() {
        let err = IndexError::OutOfBounds { index: 7, len: 3 };
        let display = err.to_string();
        assert!(display.contains('7'));
        assert!(display.contains("3 matches"));
    }

    #[test]
    fn test_dataset_error_keeps_path() {
        let err = DatasetError::NotFound {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.path(), std::path::Path::new("missing.json"));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_factory_error_from_lookup() {
        let err: FactoryError = LookupError::UnknownSpecies("Ditto".to_string()).into();
        assert!(matches!(err, FactoryError::Lookup(_)));
        assert_eq!(err.to_string(), "unknown species: Ditto");
    }
}
