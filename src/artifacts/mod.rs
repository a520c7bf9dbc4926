//! Value types passed through a checkout
//!
//! - `branch`: branch names and the refs derived from them
//! - `clone_id`: per-run identifier of the clone directory
//! - `objects`: commit references

pub mod branch;
pub mod clone_id;
pub mod objects;
