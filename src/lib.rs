//! freshdoc — documentation freshness auditing across git repositories.
//!
//! The crate clones each configured (repository, branch) pair, scans
//! selected files for versioned reference blocks and hyperlinks, and
//! reports outdated reference versions, content drift under a fixed
//! version, and dead links — one aggregated report per run, no state kept
//! between runs.

pub mod aggregate;
pub mod checkout;
pub mod config;
pub mod error;
pub mod hasher;
pub mod links;
pub mod pool;
pub mod run;
pub mod scanner;
pub mod task;
pub mod types;
