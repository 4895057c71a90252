//! Cached, cascading configuration lookup.

mod builder;
mod cache;
mod error;
mod extract;
mod layout;
mod resolver;
mod source;

pub use builder::ConfigBuilder;
pub use cache::{CacheStats, PathCache};
pub use error::ConfigError;
pub use layout::DirectoryLayout;
pub use resolver::{Config, MISSING_INT};
pub use source::FileList;
