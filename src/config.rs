use crate::artifacts::clone_id::CloneId;
use std::path::PathBuf;

pub const DEFAULT_REMOTE_URL: &str = "https://github.com/openstack/openstack-ansible";
pub const DEFAULT_BRANCH: &str = "stable/rocky";

/// Directory created under the system temp dir when no base dir is given
pub const DEFAULT_BASE_DIR_NAME: &str = "OSA";

/// Where a checkout clones from and where it lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Source repository, any url or path libgit2 can clone from
    pub remote_url: String,
    /// Fixed destination; when unset the clone goes to `base_dir/<clone-id>`
    pub repo_path: Option<PathBuf>,
    pub base_dir: PathBuf,
    /// Remove the clone directory again when a step after its creation fails
    pub cleanup_on_failure: bool,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            repo_path: None,
            base_dir: std::env::temp_dir().join(DEFAULT_BASE_DIR_NAME),
            cleanup_on_failure: false,
        }
    }
}

impl CheckoutConfig {
    pub fn with_remote_url(mut self, remote_url: impl Into<String>) -> Self {
        self.remote_url = remote_url.into();
        self
    }

    pub fn with_repo_path(mut self, repo_path: Option<PathBuf>) -> Self {
        self.repo_path = repo_path;
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_cleanup_on_failure(mut self, cleanup_on_failure: bool) -> Self {
        self.cleanup_on_failure = cleanup_on_failure;
        self
    }

    pub fn destination(&self, clone_id: &CloneId) -> PathBuf {
        match &self.repo_path {
            Some(path) => path.clone(),
            None => self.base_dir.join(clone_id.to_string()),
        }
    }
}
