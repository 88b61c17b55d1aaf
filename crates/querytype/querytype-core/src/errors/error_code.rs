//! ErrorCode trait for stable diagnostics and process exit statuses.

/// Trait giving every error enum a stable code string and an exit status.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Process exit status for this error.
    fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Returns the formatted diagnostic line: `error[ERROR_CODE]: message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("error[{}]: {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const ENCODE_ERROR: &str = "ENCODE_ERROR";

// Exit statuses. 2 matches clap's own usage-error status.
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
