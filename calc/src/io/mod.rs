//! I/O helpers for calc commands.

pub mod config;
