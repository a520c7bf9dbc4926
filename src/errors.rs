//! Failure classes of a checkout run
//!
//! Every step of the orchestrator maps its failure to exactly one variant,
//! carrying the branch, commit, url or path it was working on together with
//! the underlying libgit2 or filesystem error.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("invalid {what} '{input}': {reason}")]
    Parse {
        what: &'static str,
        input: String,
        reason: String,
    },

    #[error("failed to clone {url} into {}", path.display())]
    Clone {
        url: String,
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("remote branch 'origin/{branch}' not found")]
    NotFound {
        branch: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to resolve {what} '{target}'")]
    Resolution {
        what: &'static str,
        target: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to {action} local branch '{branch}'")]
    Branch {
        action: &'static str,
        branch: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to {action} for branch '{branch}'")]
    Checkout {
        action: &'static str,
        branch: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to {action} clone directory {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckoutError {
    pub fn is_parse(&self) -> bool {
        matches!(self, CheckoutError::Parse { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CheckoutError::NotFound { .. })
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, CheckoutError::Resolution { .. })
    }
}
