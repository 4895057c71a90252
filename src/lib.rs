pub mod config;
pub mod context;

pub use config::{
    CacheStats, Config, ConfigBuilder, ConfigError, DirectoryLayout, FileList, PathCache,
    MISSING_INT,
};
pub use context::{Context, Scope};
