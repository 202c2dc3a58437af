//! Filesystem access probe.
//!
//! Opens a known file read-only, then opens a second path with create
//! semantics, and reports which of the two failed. Meant to be run as a
//! subprocess under a sandbox or a filesystem tracer; the exit code is the
//! whole interface.

pub mod config;
pub mod error;
pub mod probe;
pub mod trace;

pub use config::ProbeConfig;
pub use error::{ConfigError, Error, Result, SUCCESS_EXIT_CODE};
pub use probe::{FileAccessProbe, ProbeHandles};
pub use trace::{OpenKind, OpenRecord, OpenTrace};
