//! Git object identifiers handled by the checkout

pub mod commit_ref;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
