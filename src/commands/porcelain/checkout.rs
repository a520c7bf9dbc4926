use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::clone_id::CloneId;
use crate::artifacts::objects::commit_ref::CommitRef;
use crate::config::CheckoutConfig;
use crate::errors::CheckoutError;
use chrono::{FixedOffset, TimeZone};
use derive_new::new;
use tracing::{debug, info, info_span, warn};

/// Clones the configured remote into a fresh directory and checks out a
/// branch there.
#[derive(Debug, Clone, new)]
pub struct Orchestrator {
    config: CheckoutConfig,
}

impl Orchestrator {
    /// Clones the remote, makes sure a local `branch_name` tracking
    /// `origin/<branch_name>` exists and checks out the tree of its tip.
    ///
    /// A missing local branch is created at `commit_sha`. An existing one is
    /// reused as-is and is NOT moved to `commit_sha`, so its current tip is
    /// what ends up in the working directory.
    ///
    /// Returns the id naming the clone directory.
    pub fn checkout(&self, commit_sha: &str, branch_name: &str) -> Result<CloneId, CheckoutError> {
        let commit_ref = CommitRef::try_parse(commit_sha)?;
        let branch = BranchName::try_parse(branch_name)?;

        let clone_id = CloneId::generate();
        let _span = info_span!(
            "checkout",
            %clone_id,
            %branch,
            commit = commit_ref.to_short_oid()
        )
        .entered();

        let workspace = Workspace::prepare(self.config.destination(&clone_id))?;
        let result = self.checkout_into(&workspace, &commit_ref, &branch);

        if let Err(err) = &result
            && self.config.cleanup_on_failure
        {
            warn!(error = %err, path = %workspace.path().display(), "removing clone after failure");
            if let Err(cleanup_err) = workspace.discard() {
                warn!(error = %cleanup_err, "failed to remove clone directory");
            }
        }

        result.map(|()| clone_id)
    }

    fn checkout_into(
        &self,
        workspace: &Workspace,
        commit_ref: &CommitRef,
        branch: &BranchName,
    ) -> Result<(), CheckoutError> {
        info!(
            url = %self.config.remote_url,
            path = %workspace.path().display(),
            "cloning repository"
        );
        let repository = Repository::clone_remote(&self.config.remote_url, workspace.path())?;

        let remote = repository.find_remote_branch(branch)?;
        debug!(
            remote = %branch.remote_name(),
            tip = ?remote.get().target(),
            "found remote branch"
        );

        let commit = repository.find_commit(commit_ref)?;
        log_commit("resolved requested commit", &commit);

        let (local, reused) = match repository.find_local_branch(branch)? {
            Some(local) => (local, true),
            None => {
                info!(upstream = %branch.remote_name(), "creating local branch");
                (repository.create_tracking_branch(branch, &commit)?, false)
            }
        };

        let tip = repository.tip_commit(&local, branch)?;
        if reused {
            info!(tip = %tip.id(), "reusing existing local branch");
            if tip.id() != commit.id() {
                warn!(
                    requested = %commit_ref,
                    tip = %tip.id(),
                    "existing local branch is not moved to the requested commit"
                );
            }
        }

        let tree = repository.commit_tree(&tip, branch)?;
        repository.checkout_tree(&tree, branch)?;
        repository.set_head(branch)?;

        info!(
            head = %branch.local_ref(),
            workdir = ?repository.workdir(),
            "checked out branch"
        );

        Ok(())
    }
}

fn log_commit(label: &str, commit: &git2::Commit<'_>) {
    let author = commit.author();

    debug!(
        commit = %commit.id(),
        author = author.name().unwrap_or_default(),
        email = author.email().unwrap_or_default(),
        date = %commit_date(commit.time()),
        commit_message = commit.message().unwrap_or_default(),
        "{label}"
    );
}

/// RFC 2822 date in the author's own timezone.
fn commit_date(time: git2::Time) -> String {
    FixedOffset::east_opt(time.offset_minutes() * 60)
        .and_then(|offset| offset.timestamp_opt(time.seconds(), 0).single())
        .map(|date| date.to_rfc2822())
        .unwrap_or_default()
}
