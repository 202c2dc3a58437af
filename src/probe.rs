use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;

use crate::config::ProbeConfig;
use crate::error::{Error, Result};
use crate::trace::{OpenKind, OpenTrace};

/// Both handles of a successful run. Dropping this closes them.
#[derive(Debug)]
pub struct ProbeHandles {
    pub read: File,
    pub create: File,
}

#[derive(Debug, Default)]
pub struct FileAccessProbe {
    config: ProbeConfig,
}

impl FileAccessProbe {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Attempts the read-open and then the create-open, and only afterwards
    /// looks at the results. A read failure is reported even when the
    /// create also failed, and the create has happened either way.
    pub fn run(&self, trace: &mut OpenTrace) -> Result<ProbeHandles> {
        let read = self.open_read(trace);
        let create = self.open_create(trace);

        let read = read.map_err(|source| Error::ReadOpenFailed {
            path: self.config.read_path().to_path_buf(),
            source,
        })?;
        let create = create.map_err(|source| Error::CreateOpenFailed {
            path: self.config.create_path().to_path_buf(),
            source,
        })?;
        Ok(ProbeHandles { read, create })
    }

    fn open_read(&self, trace: &mut OpenTrace) -> io::Result<File> {
        let path = self.config.read_path();
        trace.record(OpenKind::Read, path, None);
        OpenOptions::new().read(true).open(path)
    }

    // O_RDONLY | O_CREAT: std refuses `create(true)` without write access,
    // so the flag goes in raw. No O_EXCL and no O_TRUNC, an existing file
    // opens fine and keeps its contents.
    fn open_create(&self, trace: &mut OpenTrace) -> io::Result<File> {
        let path = self.config.create_path();
        let mode = self.config.create_mode();
        trace.record(OpenKind::Create, path, Some(mode));
        OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_CREAT)
            .mode(mode)
            .open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OWNER_RWX;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn create_open_does_not_truncate_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let read_path = dir.path().join("resolv.conf");
        let create_path = dir.path().join("newfile");
        fs::write(&read_path, "nameserver 127.0.0.1\n").unwrap();
        fs::write(&create_path, "keep me").unwrap();

        let config = ProbeConfig::new(&read_path, &create_path, OWNER_RWX).unwrap();
        let handles = FileAccessProbe::new(config)
            .run(&mut OpenTrace::new())
            .unwrap();
        drop(handles);

        assert_eq!(fs::read_to_string(&create_path).unwrap(), "keep me");
    }

    #[test]
    fn existing_file_keeps_its_mode() {
        let dir = tempfile::tempdir().unwrap();
        let read_path = dir.path().join("resolv.conf");
        let create_path = dir.path().join("newfile");
        fs::write(&read_path, "").unwrap();
        fs::write(&create_path, "").unwrap();
        fs::set_permissions(&create_path, fs::Permissions::from_mode(0o644)).unwrap();

        let config = ProbeConfig::new(&read_path, &create_path, OWNER_RWX).unwrap();
        FileAccessProbe::new(config)
            .run(&mut OpenTrace::new())
            .unwrap();

        let mode = fs::metadata(&create_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn trace_records_read_before_create() {
        let dir = tempfile::tempdir().unwrap();
        let read_path = dir.path().join("absent");
        let create_path = dir.path().join("newfile");

        let config = ProbeConfig::new(&read_path, &create_path, OWNER_RWX).unwrap();
        let mut trace = OpenTrace::new();
        let err = FileAccessProbe::new(config).run(&mut trace).unwrap_err();

        assert_eq!(err.exit_code(), 11);
        let kinds: Vec<_> = trace.records().iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, [OpenKind::Read, OpenKind::Create]);
    }
}
