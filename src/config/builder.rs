use std::fmt;

use super::resolver::Config;
use super::source::FileList;
use super::ConfigError;
use crate::context::Context;

/// Builder for a [`Config`] resolver.
///
/// A file-list builder is mandatory: [`build`](Self::build) refuses to
/// produce a resolver without one, so no lookup can ever run against an
/// unconfigured cascade.
///
/// ## Example
///
/// ```no_run
/// use cascade_config::{Config, Context, DirectoryLayout};
///
/// let config = Config::builder()
///     .with_file_list(DirectoryLayout::new("/etc/mybot"))
///     .build()?;
///
/// let ctx = Context::new().with("network", "libera");
/// let retries = config.lookup_int(&ctx, "retries")?;
/// # Ok::<(), cascade_config::ConfigError>(())
/// ```
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder<C = Context> {
    file_list: Option<Box<dyn FileList<C>>>,
}

impl<C> ConfigBuilder<C> {
    /// Creates a builder for resolvers keyed by context type `C`.
    pub fn new() -> Self {
        Self { file_list: None }
    }

    /// Registers the function deriving candidate files from a context.
    ///
    /// Registering again replaces the previous builder.
    pub fn with_file_list(mut self, file_list: impl FileList<C> + 'static) -> Self {
        self.file_list = Some(Box::new(file_list));
        self
    }

    /// Builds the resolver with an empty cache.
    pub fn build(self) -> Result<Config<C>, ConfigError> {
        let file_list = self.file_list.ok_or(ConfigError::MissingFileList)?;
        Ok(Config::from_boxed(file_list))
    }
}

impl<C> Default for ConfigBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ConfigBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("has_file_list", &self.file_list.is_some())
            .finish()
    }
}

impl Config {
    /// Creates a builder for a resolver over the generic [`Context`].
    ///
    /// Use [`ConfigBuilder::new`] for other context types.
    pub fn builder() -> ConfigBuilder<Context> {
        ConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Scope;
    use crate::DirectoryLayout;
    use std::path::PathBuf;

    #[test]
    fn test_build_without_file_list_is_rejected() {
        let result = Config::builder().build();
        assert!(matches!(result, Err(ConfigError::MissingFileList)));
    }

    #[test]
    fn test_build_with_closure() {
        let config = Config::builder()
            .with_file_list(|_: &Context| vec![PathBuf::from("/nonexistent/common.json")])
            .build()
            .unwrap();

        assert_eq!(config.lookup(&Context::new(), "anything"), None);
    }

    #[test]
    fn test_build_for_scope() {
        let config = ConfigBuilder::<Scope>::new()
            .with_file_list(DirectoryLayout::new("/nonexistent"))
            .build()
            .unwrap();

        assert_eq!(config.lookup_int(&Scope::default(), "retries").unwrap(), -1);
    }

    #[test]
    fn test_debug_reports_file_list() {
        let builder = Config::builder();
        assert_eq!(format!("{builder:?}"), "ConfigBuilder { has_file_list: false }");
    }
}
