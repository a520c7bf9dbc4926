//! Commit reference supplied by the caller
//!
//! Only full-length SHA-1 object ids are accepted: the checkout must land on
//! an exact commit, so abbreviated ids and revision expressions are rejected
//! before any network work happens.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::CheckoutError;

/// Full 40-character hexadecimal commit id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitRef(String);

impl CommitRef {
    pub fn try_parse(sha: &str) -> Result<Self, CheckoutError> {
        let invalid = |reason: String| CheckoutError::Parse {
            what: "commit reference",
            input: sha.to_string(),
            reason,
        };

        if sha.len() != OBJECT_ID_LENGTH {
            return Err(invalid(format!(
                "expected {} hex characters, got {}",
                OBJECT_ID_LENGTH,
                sha.len()
            )));
        }
        if !sha.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hexadecimal characters".to_string()));
        }

        Ok(Self(sha.to_ascii_lowercase()))
    }

    pub fn to_oid(&self) -> Result<git2::Oid, CheckoutError> {
        git2::Oid::from_str(&self.0).map_err(|err| CheckoutError::Parse {
            what: "commit reference",
            input: self.0.clone(),
            reason: err.message().to_string(),
        })
    }

    pub fn to_short_oid(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for CommitRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
