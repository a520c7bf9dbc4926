use crate::artifacts::branch::{INVALID_BRANCH_NAME_REGEX, LOCAL_REF_PREFIX, REMOTE_NAME};
use crate::errors::CheckoutError;

/// A branch name shared by the remote branch `origin/<name>` and the local
/// branch tracking it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: &str) -> Result<Self, CheckoutError> {
        let invalid = |reason: String| CheckoutError::Parse {
            what: "branch name",
            input: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("branch name cannot be empty".to_string()));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map_err(|err| invalid(format!("invalid branch name regex: {err}")))?;

        if re.is_match(name) {
            Err(invalid("not a valid git ref name".to_string()))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Short name of the remote tracking branch, e.g. `origin/stable/rocky`
    pub fn remote_name(&self) -> String {
        format!("{}/{}", REMOTE_NAME, self.0)
    }

    /// Full ref of the local branch, e.g. `refs/heads/stable/rocky`
    pub fn local_ref(&self) -> String {
        format!("{}{}", LOCAL_REF_PREFIX, self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
