//! Exit codes for the CLI

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Lint found problems
pub const LINT_FAILED: u8 = 5;

/// Added to a signal number when a child process was killed by it
pub const SIGNAL_BASE: u8 = 128;
