//! PATH resolution for the command to integrate.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{IntegrateError, Result};

/// Finds the executable behind a command name. Abstracted behind a trait so
/// tests can resolve against fixed paths instead of the environment.
pub trait CommandLocator {
    /// Resolve `name` to an absolute path, or fail with `CommandNotFound`.
    fn resolve(&self, name: &str) -> Result<PathBuf>;
}

/// Production locator backed by the environment PATH, the equivalent of
/// `where` (Windows) and `which` (everywhere else).
pub struct PathLocator;

impl CommandLocator for PathLocator {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IntegrateError::CommandNotFound(name.to_string()));
        }
        which::which(name).map_err(|_| IntegrateError::CommandNotFound(name.to_string()))
    }
}

/// Locator with a fixed answer table, for tests.
#[derive(Default)]
pub struct FixedLocator {
    hits: HashMap<String, PathBuf>,
}

impl FixedLocator {
    pub fn with(mut self, name: &str, path: PathBuf) -> Self {
        self.hits.insert(name.to_string(), path);
        self
    }
}

impl CommandLocator for FixedLocator {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        self.hits
            .get(name)
            .cloned()
            .ok_or_else(|| IntegrateError::CommandNotFound(name.to_string()))
    }
}
