//! Per-path cache of parsed JSON configuration documents.
//!
//! Entries are revalidated lazily against the file's modification time on
//! every [`PathCache::get`]. A file that disappears, cannot be read, or fails
//! to parse loses its entry, so a document is never served after its backing
//! file stops being loadable. Other stat failures are treated as transient
//! and leave the entry alone.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::extract::value_kind;

/// A parsed document and the modification time it was read at.
#[derive(Debug, Clone)]
struct CacheEntry {
    observed: SystemTime,
    document: Map<String, Value>,
}

/// Counters describing how a [`PathCache`] has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from an entry that was still current.
    pub hits: u64,
    /// Files read and parsed, either for the first time or because they went stale.
    pub reloads: u64,
    /// Entries dropped because their file vanished or failed to load.
    pub purges: u64,
}

/// Why a file could not be turned into a cache entry.
#[derive(Debug, Error)]
enum LoadError {
    #[error("unreadable: {0}")]
    Unreadable(std::io::Error),

    #[error("malformed JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("top-level value is {0}, expected an object")]
    NotAnObject(&'static str),
}

/// Cache mapping file paths to their parsed top-level JSON object.
///
/// Callers only ever receive clones of individual values, never the cached
/// document itself.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: HashMap<PathBuf, CacheEntry>,
    stats: CacheStats,
}

impl PathCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key` in the file at `path`.
    ///
    /// The file is stat'ed on every call and re-read when it is not cached
    /// yet or its modification time is newer than the cached one. Returns
    /// `None` when the file does not exist, cannot be loaded, lacks the key,
    /// or holds `null` under it.
    pub fn get(&mut self, path: &Path, key: &str) -> Option<Value> {
        let modified = match std::fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file does not exist");
                self.purge(path);
                return None;
            }
            Err(e) => {
                // Transient: keep whatever is cached for the next attempt.
                warn!(path = %path.display(), error = %e, "cannot stat config file");
                return None;
            }
        };

        let stale = self
            .entries
            .get(path)
            .map_or(true, |entry| entry.observed < modified);

        if stale {
            debug!(path = %path.display(), "stale cache, reloading");
            match load_document(path) {
                Ok(document) => {
                    debug!(path = %path.display(), "updating cache");
                    self.stats.reloads += 1;
                    self.entries.insert(
                        path.to_path_buf(),
                        CacheEntry {
                            observed: modified,
                            document,
                        },
                    );
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot load config file");
                    self.purge(path);
                    return None;
                }
            }
        } else {
            debug!(path = %path.display(), "found cache");
            self.stats.hits += 1;
        }

        self.entries
            .get(path)?
            .document
            .get(key)
            .filter(|value| !value.is_null())
            .cloned()
    }

    /// Drops the entry for `path`, forcing the next lookup to re-read it.
    ///
    /// Returns whether an entry was present.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Drops every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn purge(&mut self, path: &Path) {
        if self.entries.remove(path).is_some() {
            debug!(path = %path.display(), "purged from cache");
            self.stats.purges += 1;
        }
    }
}

/// Reads and parses a config file into its top-level object.
fn load_document(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let contents = std::fs::read(path).map_err(LoadError::Unreadable)?;
    match serde_json::from_slice(&contents).map_err(LoadError::Malformed)? {
        Value::Object(document) => Ok(document),
        other => Err(LoadError::NotAnObject(value_kind(&other))),
    }
}
