//! Record of the opens a probe run attempts.
//!
//! Entries are appended before the open is made, so a failed open still
//! shows up. [`OpenTrace::write_to`] emits the same format a preload
//! filesystem tracer writes: each raw path followed by a newline.

use std::fmt;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use bstr::BString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenKind {
    Read,
    Create,
}

impl fmt::Display for OpenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenKind::Read => f.write_str("read"),
            OpenKind::Create => f.write_str("create"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRecord {
    kind: OpenKind,
    path: BString,
    mode: Option<u32>,
}

impl OpenRecord {
    pub fn kind(&self) -> OpenKind {
        self.kind
    }

    /// Path bytes exactly as handed to the kernel.
    pub fn path(&self) -> &[u8] {
        self.path.as_slice()
    }

    /// Requested permission bits; only set for create opens.
    pub fn mode(&self) -> Option<u32> {
        self.mode
    }
}

impl fmt::Display for OpenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path)?;
        if let Some(mode) = self.mode {
            write!(f, " (mode 0o{:o})", mode)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct OpenTrace {
    records: Vec<OpenRecord>,
}

impl OpenTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: OpenKind, path: &Path, mode: Option<u32>) {
        let record = OpenRecord {
            kind,
            path: BString::from(path.as_os_str().as_bytes()),
            mode,
        };
        log::debug!("open {}", record);
        self.records.push(record);
    }

    pub fn records(&self) -> &[OpenRecord] {
        &self.records
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for record in &self.records {
            out.write_all(record.path())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}
