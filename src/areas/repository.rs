//! Cloned repository handle
//!
//! Thin layer over `git2::Repository` exposing only the lookups and mutations
//! a checkout needs, each mapped onto its own `CheckoutError` class. Object
//! handles returned from here borrow the repository and are released when
//! they go out of scope.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_ref::CommitRef;
use crate::errors::CheckoutError;
use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{Branch, BranchType, Commit, ErrorCode, Tree};
use std::path::Path;

pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Full clone of `url` into `path` with the default `origin` remote layout.
    pub fn clone_remote(url: &str, path: &Path) -> Result<Self, CheckoutError> {
        let inner = RepoBuilder::new()
            .clone(url, path)
            .map_err(|source| CheckoutError::Clone {
                url: url.to_string(),
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Repository { inner })
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    pub fn find_commit(&self, commit_ref: &CommitRef) -> Result<Commit<'_>, CheckoutError> {
        let resolution_error = |source| CheckoutError::Resolution {
            what: "commit",
            target: commit_ref.to_string(),
            source,
        };

        self.inner
            .find_commit(commit_ref.to_oid()?)
            .map_err(resolution_error)
    }

    pub fn find_remote_branch(&self, branch: &BranchName) -> Result<Branch<'_>, CheckoutError> {
        self.inner
            .find_branch(&branch.remote_name(), BranchType::Remote)
            .map_err(|source| CheckoutError::NotFound {
                branch: branch.to_string(),
                source,
            })
    }

    /// Looks up the local branch, `None` when it does not exist yet.
    pub fn find_local_branch(
        &self,
        branch: &BranchName,
    ) -> Result<Option<Branch<'_>>, CheckoutError> {
        match self.inner.find_branch(branch.as_ref(), BranchType::Local) {
            Ok(local) => Ok(Some(local)),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(None),
            Err(source) => Err(CheckoutError::Branch {
                action: "look up",
                branch: branch.to_string(),
                source,
            }),
        }
    }

    /// Creates `branch` at `commit` and sets its upstream to `origin/<branch>`.
    pub fn create_tracking_branch(
        &self,
        branch: &BranchName,
        commit: &Commit<'_>,
    ) -> Result<Branch<'_>, CheckoutError> {
        let mut local = self
            .inner
            .branch(branch.as_ref(), commit, false)
            .map_err(|source| CheckoutError::Branch {
                action: "create",
                branch: branch.to_string(),
                source,
            })?;

        local
            .set_upstream(Some(&branch.remote_name()))
            .map_err(|source| CheckoutError::Branch {
                action: "set upstream of",
                branch: branch.to_string(),
                source,
            })?;

        Ok(local)
    }

    pub fn tip_commit<'r>(
        &'r self,
        local: &Branch<'r>,
        branch: &BranchName,
    ) -> Result<Commit<'r>, CheckoutError> {
        local
            .get()
            .peel_to_commit()
            .map_err(|source| CheckoutError::Resolution {
                what: "tip commit of local branch",
                target: branch.to_string(),
                source,
            })
    }

    pub fn commit_tree<'r>(
        &'r self,
        commit: &Commit<'r>,
        branch: &BranchName,
    ) -> Result<Tree<'r>, CheckoutError> {
        commit.tree().map_err(|source| CheckoutError::Resolution {
            what: "tree of local branch",
            target: branch.to_string(),
            source,
        })
    }

    /// Writes `tree` into the working directory, preferring the incoming
    /// version of every conflicting file.
    pub fn checkout_tree(&self, tree: &Tree<'_>, branch: &BranchName) -> Result<(), CheckoutError> {
        let mut strategy = CheckoutBuilder::new();
        strategy
            .safe()
            .recreate_missing(true)
            .allow_conflicts(true)
            .use_theirs(true);

        self.inner
            .checkout_tree(tree.as_object(), Some(&mut strategy))
            .map_err(|source| CheckoutError::Checkout {
                action: "check out tree",
                branch: branch.to_string(),
                source,
            })
    }

    pub fn set_head(&self, branch: &BranchName) -> Result<(), CheckoutError> {
        self.inner
            .set_head(&branch.local_ref())
            .map_err(|source| CheckoutError::Checkout {
                action: "point HEAD",
                branch: branch.to_string(),
                source,
            })
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.inner.path())
            .finish()
    }
}
