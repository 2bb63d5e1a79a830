//! Stable exit codes for calc CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Unreadable or invalid config, or other errors. Clap argument errors exit with 2.
pub const INVALID: i32 = 1;
/// `calc eval` or `calc fold` hit a calculation error (division by zero).
pub const ARITHMETIC: i32 = 3;
