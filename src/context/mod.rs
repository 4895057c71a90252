//! Lookup contexts handed to file-list builders.
//!
//! The resolver never looks inside a context; only the
//! [`FileList`](crate::FileList) registered with it does.

use std::collections::BTreeMap;
use std::fmt;

/// A generic string-to-string lookup context.
///
/// ## Example
///
/// ```
/// use cascade_config::Context;
///
/// let ctx = Context::new()
///     .with("network", "irc.example.net")
///     .with("target", "#rust");
///
/// assert_eq!(ctx.get("network"), Some("irc.example.net"));
/// assert_eq!(ctx.get("source"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        for (key, value) in iter {
            ctx.insert(key, value);
        }
        ctx
    }
}

/// A fixed network/source/target scope.
///
/// Empty components are treated as unset by
/// [`DirectoryLayout`](crate::DirectoryLayout).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub network: String,
    pub source: String,
    pub target: String,
}

impl Scope {
    pub fn new(
        network: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            network: network.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<&Scope> for Context {
    fn from(scope: &Scope) -> Self {
        [
            ("network", scope.network.as_str()),
            ("source", scope.source.as_str()),
            ("target", scope.target.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}
