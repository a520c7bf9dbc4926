//! On-disk pieces of a checkout
//!
//! - `repository`: the cloned git repository and the libgit2 calls made on it
//! - `workspace`: the clone's destination directory

pub mod repository;
pub mod workspace;
