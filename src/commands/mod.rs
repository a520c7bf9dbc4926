//! Command implementations
//!
//! Only porcelain commands exist here; the object-level work is done by
//! libgit2 through `areas::repository`.

pub mod porcelain;
