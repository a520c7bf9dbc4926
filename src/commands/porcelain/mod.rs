//! Porcelain commands (user-facing operations)
//!
//! - `checkout`: clone the remote and check out a tracking branch
pub mod checkout;
