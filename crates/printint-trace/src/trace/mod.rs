//! `Cpu::printInt` trace entries.
//!
//! The simulator logs every integer printed by the guest as
//! `TRACE: Cpu::printInt pc=<PC> value=<VALUE>`, where `<PC>` is a decimal
//! program counter and `<VALUE>` runs to the end of the line.

mod parse;

pub use parse::{decode_lenient, extract_entries, read_trace_file, split_lines};

/// A single `printInt` trace entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Program counter of the print call.
    pub pc: u64,
    /// Printed value, verbatim.
    pub value: String,
}

impl TraceEntry {
    #[must_use]
    pub fn new(pc: u64, value: impl Into<String>) -> Self {
        Self {
            pc,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pc={} value={}", self.pc, self.value)
    }
}
