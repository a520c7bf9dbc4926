//! Checks out openstack-ansible (or any other git remote) at a given branch
//! and commit inside a freshly cloned, uniquely named directory.
//!
//! - `areas`: the cloned repository and its destination directory
//! - `artifacts`: branch names, commit references and clone ids
//! - `commands`: the checkout orchestrator
//! - `config`: where to clone from and to
//! - `errors`: failure classes of a checkout
//! - `logging`: tracing subscriber setup for the binary

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
