use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_READ_PATH: &str = "/etc/resolv.conf";
pub const DEFAULT_CREATE_PATH: &str = "/tmp/newfile";

/// Read, write and execute for the owner only.
pub const OWNER_RWX: u32 = libc::S_IRWXU as u32;

/// Every bit a create mode may carry: setuid, setgid, sticky and the nine
/// permission bits.
pub const PERMISSION_MASK: u32 = (libc::S_ISUID
    | libc::S_ISGID
    | libc::S_ISVTX
    | libc::S_IRWXU
    | libc::S_IRWXG
    | libc::S_IRWXO) as u32;

/// Paths and mode used by a single probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    read_path: PathBuf,
    create_path: PathBuf,
    create_mode: u32,
}

impl ProbeConfig {
    pub fn new(
        read_path: impl Into<PathBuf>,
        create_path: impl Into<PathBuf>,
        create_mode: u32,
    ) -> Result<Self, ConfigError> {
        if create_mode & !PERMISSION_MASK != 0 {
            return Err(ConfigError::InvalidMode(create_mode));
        }
        Ok(Self {
            read_path: read_path.into(),
            create_path: create_path.into(),
            create_mode,
        })
    }

    pub fn read_path(&self) -> &Path {
        &self.read_path
    }

    pub fn create_path(&self) -> &Path {
        &self.create_path
    }

    pub fn create_mode(&self) -> u32 {
        self.create_mode
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            read_path: PathBuf::from(DEFAULT_READ_PATH),
            create_path: PathBuf::from(DEFAULT_CREATE_PATH),
            create_mode: OWNER_RWX,
        }
    }
}
