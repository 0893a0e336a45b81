// Copyright 2024 Martin Pool

//! Exit codes from warmup.
//!
//! These are also described in README.md.

use std::process::ExitCode;

/// Everything worked.
pub const SUCCESS: i32 = 0;

/// The wrong arguments, etc.
///
/// (1 is also the value returned by Clap.)
pub const USAGE: i32 = 1;

/// The config file couldn't be read or parsed.
pub const BAD_CONFIG: i32 = 2;

/// An internal software error, from sysexit.
pub const SOFTWARE: i32 = 70;

/// Convert an i32 exit code to `ExitCode`.
///
/// Codes outside 0-255 map to [SOFTWARE].
pub fn code_to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_status_byte(code))
}

fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(SOFTWARE as u8)
}
