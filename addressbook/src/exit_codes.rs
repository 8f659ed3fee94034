//! Stable exit codes for the `addressbook` binary.

/// The session ended through the exit selection or end of input.
pub const OK: i32 = 0;
/// Configuration, store, or terminal I/O failed.
pub const FAILURE: i32 = 1;
