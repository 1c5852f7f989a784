//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::Parser;
use printint_trace::{DEFAULT_LOG_FILE, DEFAULT_TARGETS};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "printint-trace")]
#[command(about = "Extract Cpu::printInt trace lines from a simulator log")]
#[command(version)]
pub struct Cli {
    /// Log file to scan
    #[arg(value_name = "LOG", default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// 1-based entry positions to highlight (comma-separated or repeated)
    #[arg(
        short,
        long = "target",
        value_name = "IDX",
        value_delimiter = ',',
        value_parser = parse_target,
        default_values_t = DEFAULT_TARGETS
    )]
    pub targets: Vec<usize>,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

impl Cli {
    /// Default log directive for the selected verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "printint_trace=debug"
        } else if self.silent {
            "printint_trace=error"
        } else {
            "printint_trace=info"
        }
    }
}

fn parse_target(s: &str) -> Result<usize, String> {
    let index: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a valid entry position"))?;
    if index == 0 {
        return Err("entry positions are 1-based".to_string());
    }
    Ok(index)
}
