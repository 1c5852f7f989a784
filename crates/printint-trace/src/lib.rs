//! printint-trace - `Cpu::printInt` trace extraction
//!
//! Scans a simulator log for `TRACE: Cpu::printInt pc=<PC> value=<VALUE>` lines,
//! collects them in file order and renders a report of every entry plus a set
//! of highlighted 1-based target positions.
//!
//! # Example
//!
//! ```
//! use printint_trace::{extract_entries, write_report};
//!
//! let log = "TRACE: Cpu::printInt pc=10 value=5\nTRACE: Cpu::printInt pc=20 value=7\n";
//! let entries = extract_entries(log);
//!
//! let mut out = Vec::new();
//! write_report(&mut out, &entries, &[2, 38]).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("TARGET LINE 38: no entry (only 2)\n"));
//! ```

mod report;
pub mod trace;

pub use report::{TargetLine, lookup_target, write_report};
pub use trace::{TraceEntry, decode_lenient, extract_entries, read_trace_file, split_lines};

use std::path::PathBuf;

use thiserror::Error;

/// Log file scanned when no path is given.
pub const DEFAULT_LOG_FILE: &str = "tmp_clean.err";

/// Target positions highlighted when none are given.
pub const DEFAULT_TARGETS: [usize; 5] = [38, 39, 52, 55, 57];

/// Extraction errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("target index must be 1-based, got {0}")]
    InvalidTarget(usize),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
