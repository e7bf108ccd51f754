use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Auxiliary guidance text read from disk. Not needed for analysis itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkContext {
    path: PathBuf,
    content: String,
}

impl FrameworkContext {
    /// Read the framework file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Wrap text that did not come from a file.
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Where the text was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The guidance text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Lazily loads the framework context at most once.
///
/// A missing or unreadable file is logged and remembered as absent; it is not
/// retried for the lifetime of the source.
#[derive(Debug, Default)]
pub struct FrameworkSource {
    path: Option<PathBuf>,
    loaded: OnceLock<Option<FrameworkContext>>,
}

impl FrameworkSource {
    /// A source that reads `path` on first access.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            loaded: OnceLock::new(),
        }
    }

    /// A source that never yields a context.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// A source that already holds its context.
    pub fn preloaded(context: FrameworkContext) -> Self {
        Self {
            path: Some(context.path.clone()),
            loaded: OnceLock::from(Some(context)),
        }
    }

    /// Configured path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The framework context, loading it on first call.
    pub fn get(&self) -> Option<&FrameworkContext> {
        self.loaded
            .get_or_init(|| {
                let path = self.path.as_deref()?;
                match FrameworkContext::load(path) {
                    Ok(context) => {
                        tracing::debug!(
                            "Loaded framework context from {} ({} bytes)",
                            path.display(),
                            context.content.len()
                        );
                        Some(context)
                    }
                    Err(error) => {
                        tracing::warn!(
                            "Framework context unavailable at {}: {error}",
                            path.display()
                        );
                        tracing::warn!("Continuing with built-in rules only");
                        None
                    }
                }
            })
            .as_ref()
    }
}
