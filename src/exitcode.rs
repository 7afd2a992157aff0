//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Query answered negatively (e.g. `find` did not locate the value)
pub const NOT_FOUND: i32 = 1;

/// Data format error (tree failed its invariant check)
pub const DATAERR: i32 = 65;

/// Configuration error
pub const CONFIG: i32 = 78;
