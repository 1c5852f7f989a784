//! Command implementation.

use std::io::{self, BufWriter};

use printint_trace::{read_trace_file, write_report};
use tracing::{debug, debug_span};

use crate::cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal;

/// Run the extraction for parsed arguments, returning the process exit code.
pub fn run_command(cli: &Cli) -> i32 {
    match extract(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            terminal::error(&e.to_string());
            EXIT_FAILURE
        }
    }
}

fn extract(cli: &Cli) -> printint_trace::Result<()> {
    let _span = debug_span!("extract", log = %cli.log.display()).entered();

    let entries = read_trace_file(&cli.log)?;
    debug!(entries = entries.len(), targets = ?cli.targets, "writing report");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &entries, &cli.targets)
}
