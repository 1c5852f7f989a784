use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::TraceEntry;
use crate::{Error, Result};

impl TraceEntry {
    /// Parse a `printInt` trace line.
    ///
    /// The marker may appear anywhere in the line, so prefixes added by the
    /// logger (timestamps, thread ids) are tolerated. Returns `None` for lines
    /// without the marker.
    ///
    /// Only ASCII digits are accepted as a program counter, and a counter that
    /// overflows `u64` is lossy: the line is dropped with a warning rather than
    /// counted as an entry.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let pattern = PRINT_INT_PATTERN.get_or_init(|| {
            Regex::new(r"TRACE: Cpu::printInt pc=([0-9]+) value=(.*)")
                .expect("printInt pattern is valid")
        });
        let caps = pattern.captures(line)?;

        let digits = caps.get(1)?.as_str();
        let Ok(pc) = digits.parse::<u64>() else {
            warn!(pc = digits, "printInt program counter out of range, skipping line");
            return None;
        };
        let value = caps.get(2)?.as_str();

        Some(Self::new(pc, value))
    }
}

/// Decode log bytes, dropping any sequences that are not valid UTF-8.
#[must_use]
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0usize;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    if dropped > 0 {
        debug!(dropped, "ignored invalid UTF-8 bytes");
    }
    text
}

/// Split `text` on every line boundary Python's `str.splitlines` recognises:
/// `\r\n`, a lone `\r`, `\n`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line/paragraph separators.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let boundary = LINE_BOUNDARY_PATTERN.get_or_init(|| {
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")
            .expect("line boundary pattern is valid")
    });
    let mut lines = boundary.split(text).peekable();
    // A trailing boundary does not start another line
    std::iter::from_fn(move || {
        let line = lines.next()?;
        if line.is_empty() && lines.peek().is_none() {
            None
        } else {
            Some(line)
        }
    })
}

/// Collect every `printInt` entry in `text`, in line order.
#[must_use]
pub fn extract_entries(text: &str) -> Vec<TraceEntry> {
    split_lines(text).filter_map(TraceEntry::parse).collect()
}

/// Read a log file and collect its `printInt` entries.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file does not exist or cannot be read.
pub fn read_trace_file(path: &Path) -> Result<Vec<TraceEntry>> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_lenient(&bytes);
    let entries = extract_entries(&text);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = split_lines(&text).count(),
        entries = entries.len(),
        "scanned trace log"
    );
    Ok(entries)
}

static PRINT_INT_PATTERN: OnceLock<Regex> = OnceLock::new();
static LINE_BOUNDARY_PATTERN: OnceLock<Regex> = OnceLock::new();
