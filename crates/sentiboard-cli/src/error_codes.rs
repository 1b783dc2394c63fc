//! Error codes prefixed to user-facing messages, and matching exit codes.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const FORMAT_ERROR: &str = "FORMAT_ERROR";

/// Process exit code for an error code.
pub fn exit_code(code: &str) -> u8 {
    match code {
        CONFIG_ERROR => 3,
        LOAD_ERROR => 4,
        FORMAT_ERROR => 5,
        _ => 1,
    }
}
