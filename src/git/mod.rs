//! Git Operations Module
//!
//! This module holds the process boundary to the `git` binary for the kommit
//! CLI tool. It's split into focused submodules for better maintainability.

pub mod history;
pub mod runner;

pub use runner::{GitBackend, SystemGit, ensure_repository};
