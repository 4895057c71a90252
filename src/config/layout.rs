//! Directory-based file-list builder.

use std::path::{Path, PathBuf};

use super::source::FileList;
use super::ConfigError;
use crate::context::{Context, Scope};

/// Maps a network/source/target scope onto JSON files under a root directory.
///
/// Candidates are returned most specific first:
///
/// ```text
/// {root}/{network}/{source}/{target}.json
/// {root}/{network}/{source}.json
/// {root}/{network}.json
/// {root}/common.json
/// ```
///
/// A candidate is only produced when every component it needs is set and
/// non-empty, so an empty context resolves against the common file alone.
#[derive(Debug, Clone)]
pub struct DirectoryLayout {
    root: PathBuf,
    common: String,
    extension: String,
}

impl DirectoryLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            common: "common".to_string(),
            extension: "json".to_string(),
        }
    }

    /// Creates a layout rooted at the directory named by environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        match std::env::var_os(var) {
            Some(root) if !root.is_empty() => Ok(Self::new(root)),
            _ => Err(ConfigError::MissingConfigDir(var.to_string())),
        }
    }

    /// Sets the stem of the fallback file consulted last (default `common`).
    #[must_use]
    pub fn with_common_name(mut self, name: impl Into<String>) -> Self {
        self.common = name.into();
        self
    }

    /// Sets the file extension (default `json`).
    #[must_use]
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Builds the candidate list for the given scope components.
    pub fn candidates(
        &self,
        network: Option<&str>,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Vec<PathBuf> {
        fn set(part: Option<&str>) -> Option<&str> {
            part.filter(|p| !p.is_empty())
        }

        let mut files = Vec::with_capacity(4);

        if let Some(network) = set(network) {
            if let Some(source) = set(source) {
                if let Some(target) = set(target) {
                    files.push(
                        self.root
                            .join(network)
                            .join(source)
                            .join(self.file_name(target)),
                    );
                }
                files.push(self.root.join(network).join(self.file_name(source)));
            }
            files.push(self.root.join(self.file_name(network)));
        }
        files.push(self.root.join(self.file_name(&self.common)));

        files
    }

    fn file_name(&self, stem: &str) -> String {
        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{}", self.extension)
        }
    }
}

impl FileList<Context> for DirectoryLayout {
    fn files(&self, ctx: &Context) -> Vec<PathBuf> {
        self.candidates(ctx.get("network"), ctx.get("source"), ctx.get("target"))
    }
}

impl FileList<Scope> for DirectoryLayout {
    fn files(&self, scope: &Scope) -> Vec<PathBuf> {
        self.candidates(
            Some(scope.network.as_str()),
            Some(scope.source.as_str()),
            Some(scope.target.as_str()),
        )
    }
}
