//! Cascading key lookup over an ordered list of cached files.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::cache::{CacheStats, PathCache};
use super::extract::{into_deserialized, into_int, into_string, into_strings};
use super::source::FileList;
use super::ConfigError;
use crate::context::Context;

/// Returned by [`Config::lookup_int`] when no candidate file holds the key.
pub const MISSING_INT: i64 = -1;

/// Resolves configuration keys through a cascade of JSON files.
///
/// For every lookup the registered [`FileList`] turns the context into an
/// ordered list of files; the first file holding a non-null value for the
/// key wins and later files are never touched. Parsed files are kept in a
/// [`PathCache`] and revalidated against their modification time.
///
/// One lock covers the cache and the file-list builder for the whole of a
/// lookup, including every stat and read it performs. Lookups are therefore
/// fully serialized across threads.
pub struct Config<C = Context> {
    state: Mutex<State<C>>,
}

struct State<C> {
    cache: PathCache,
    file_list: Box<dyn FileList<C>>,
}

impl<C> Config<C> {
    /// Creates a resolver that derives candidate files with `file_list`.
    pub fn new(file_list: impl FileList<C> + 'static) -> Self {
        Self::from_boxed(Box::new(file_list))
    }

    pub(crate) fn from_boxed(file_list: Box<dyn FileList<C>>) -> Self {
        Self {
            state: Mutex::new(State {
                cache: PathCache::new(),
                file_list,
            }),
        }
    }

    /// Replaces the file-list builder. Cached documents are kept.
    pub fn set_file_list(&self, file_list: impl FileList<C> + 'static) {
        self.lock().file_list = Box::new(file_list);
    }

    /// Drops the cached document for `path`, returning whether one existed.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        self.lock().cache.invalidate(path.as_ref())
    }

    /// Drops every cached document.
    pub fn clear_cache(&self) {
        self.lock().cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.lock().cache.stats()
    }

    // Entries are only ever replaced whole, so a panic elsewhere cannot
    // leave the cache half-updated.
    fn lock(&self) -> MutexGuard<'_, State<C>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: fmt::Debug> Config<C> {
    /// Returns the raw value of `key` from the first candidate file holding it.
    pub fn lookup(&self, ctx: &C, key: &str) -> Option<Value> {
        let mut state = self.lock();
        let State { cache, file_list } = &mut *state;

        for path in file_list.files(ctx) {
            debug!(context = ?ctx, key, path = %path.display(), "looking up key");
            if let Some(value) = cache.get(&path, key) {
                info!(context = ?ctx, key, path = %path.display(), "found key");
                return Some(value);
            }
        }

        info!(context = ?ctx, key, "key not found");
        None
    }

    /// Looks up a string. Returns an empty string when the key is absent.
    pub fn lookup_string(&self, ctx: &C, key: &str) -> Result<String, ConfigError> {
        match self.lookup(ctx, key) {
            Some(value) => into_string(key, value),
            None => Ok(String::new()),
        }
    }

    /// Looks up a number, truncated to an integer. Returns [`MISSING_INT`]
    /// when the key is absent.
    pub fn lookup_int(&self, ctx: &C, key: &str) -> Result<i64, ConfigError> {
        match self.lookup(ctx, key) {
            Some(value) => into_int(key, value),
            None => Ok(MISSING_INT),
        }
    }

    /// Looks up an array of strings and returns it sorted.
    ///
    /// When the key is absent the result is a single empty string, not an
    /// empty vector.
    pub fn lookup_string_slice(&self, ctx: &C, key: &str) -> Result<Vec<String>, ConfigError> {
        match self.lookup(ctx, key) {
            Some(value) => {
                let mut strings = into_strings(key, value)?;
                strings.sort();
                Ok(strings)
            }
            None => Ok(vec![String::new()]),
        }
    }

    /// Looks up an array of strings as a set. Absent keys yield an empty set.
    pub fn lookup_string_set(&self, ctx: &C, key: &str) -> Result<HashSet<String>, ConfigError> {
        match self.lookup(ctx, key) {
            Some(value) => Ok(into_strings(key, value)?.into_iter().collect()),
            None => Ok(HashSet::new()),
        }
    }

    /// Looks up a value and deserializes it into `T`.
    ///
    /// Unlike the other typed lookups this reports absence as `None`.
    pub fn lookup_as<T: DeserializeOwned>(
        &self,
        ctx: &C,
        key: &str,
    ) -> Result<Option<T>, ConfigError> {
        self.lookup(ctx, key)
            .map(|value| into_deserialized(key, value))
            .transpose()
    }
}

impl<C> fmt::Debug for Config<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Config")
            .field("cached_files", &state.cache.len())
            .field("stats", &state.cache.stats())
            .finish_non_exhaustive()
    }
}
