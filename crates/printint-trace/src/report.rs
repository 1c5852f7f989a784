//! Report rendering.

use std::io::Write;

use crate::{Error, Result, TraceEntry};

/// Outcome of looking up a 1-based target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLine<'a> {
    /// The position exists.
    Found { index: usize, entry: &'a TraceEntry },
    /// Fewer than `index` entries were collected.
    Missing { index: usize, available: usize },
}

impl std::fmt::Display for TargetLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLine::Found { index, entry } => write!(f, "TARGET LINE {index}: {entry}"),
            TargetLine::Missing { index, available } => {
                write!(f, "TARGET LINE {index}: no entry (only {available})")
            }
        }
    }
}

/// Look up the `index`-th entry (1-based).
///
/// # Errors
///
/// Returns [`Error::InvalidTarget`] for index 0.
pub fn lookup_target(entries: &[TraceEntry], index: usize) -> Result<TargetLine<'_>> {
    let slot = index.checked_sub(1).ok_or(Error::InvalidTarget(index))?;
    Ok(entries.get(slot).map_or(
        TargetLine::Missing {
            index,
            available: entries.len(),
        },
        |entry| TargetLine::Found { index, entry },
    ))
}

/// Write the full report: entry count, every entry, then each target.
///
/// # Errors
///
/// Returns [`Error::InvalidTarget`] if any target is 0 (checked before
/// anything is written) and [`Error::Output`] if writing fails.
pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[TraceEntry],
    targets: &[usize],
) -> Result<()> {
    let targets = targets
        .iter()
        .map(|&index| lookup_target(entries, index))
        .collect::<Result<Vec<_>>>()?;

    writeln!(out, "found {} printInt entries", entries.len())?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}: {entry}", i + 1)?;
    }
    for target in &targets {
        writeln!(out, "{target}")?;
    }
    out.flush()?;
    Ok(())
}
