//! Error types for the discovery CLI.

use thiserror::Error;

use unifi_discover_core::error::CoreError;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("No devices found")]
    NoDevicesFound,
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(CoreError::Io(_)) => exit_codes::NETWORK_ERROR,
            CliError::Core(_) => exit_codes::GENERAL_ERROR,
            CliError::NoDevicesFound => exit_codes::GENERAL_ERROR,
        }
    }
}
