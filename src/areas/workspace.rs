use crate::errors::CheckoutError;
use std::path::{Path, PathBuf};

/// Destination directory of a single clone.
///
/// Remembers whether the directory already existed so that cleanup never
/// removes something the run did not create.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    preexisting: bool,
}

impl Workspace {
    /// Creates the parent directories of `path`; the leaf is created by the clone.
    pub fn prepare(path: PathBuf) -> Result<Self, CheckoutError> {
        let preexisting = path.exists();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| CheckoutError::Io {
                action: "create parent of",
                path: path.clone(),
                source,
            })?;
        }

        Ok(Workspace { path, preexisting })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_preexisting(&self) -> bool {
        self.preexisting
    }

    /// Removes the clone directory if this run created it.
    pub fn discard(&self) -> Result<(), CheckoutError> {
        if self.preexisting || !self.path.exists() {
            return Ok(());
        }

        std::fs::remove_dir_all(&self.path).map_err(|source| CheckoutError::Io {
            action: "remove",
            path: self.path.clone(),
            source,
        })
    }
}
