//! Calculator, strategy dispatch and collection utilities.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (arithmetic, dispatch, collection
//!   transforms, grading, reports). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files on disk).
//!
//! Orchestration modules ([`demo`], [`report`]) combine core logic with
//! loaded inputs to implement CLI commands.

pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
