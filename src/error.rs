use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const SUCCESS_EXIT_CODE: u8 = 0;
pub const READ_OPEN_FAILED_EXIT_CODE: u8 = 11;
pub const CREATE_OPEN_FAILED_EXIT_CODE: u8 = 12;

/// Why a probe run did not succeed.
///
/// The underlying cause is kept for logging only. Every read failure maps to
/// the same exit code, and so does every create failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open {} for reading: {}", path.display(), source)]
    ReadOpenFailed { path: PathBuf, source: io::Error },
    #[error("Failed to open {} with create: {}", path.display(), source)]
    CreateOpenFailed { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ReadOpenFailed { .. } => READ_OPEN_FAILED_EXIT_CODE,
            Error::CreateOpenFailed { .. } => CREATE_OPEN_FAILED_EXIT_CODE,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Create mode 0o{0:o} has bits outside the permission mask")]
    InvalidMode(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
