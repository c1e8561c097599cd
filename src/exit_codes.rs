//! Exit code constants for the refinex-diff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Input could not be read
//! - 3: Git operation failure
//! - 4: Output could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Input failure: the diff file or stdin could not be read.
pub const INPUT_FAILURE: i32 = 2;

/// Git operation failure: `git diff` could not run or exited non-zero.
pub const GIT_FAILURE: i32 = 3;

/// Output failure: serialization or writing to stdout failed.
pub const OUTPUT_FAILURE: i32 = 4;
