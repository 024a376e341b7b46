//! CLI argument parser for longest-line.

#![deny(missing_docs)]

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Report the longest line of a text file.
#[derive(Parser, Debug)]
#[command(
    name = "longest-line",
    version,
    about = "Report the longest line of a text file"
)]
pub struct Cli {
    /// Set log verbosity on stderr: -v=1, -v=2, -v=3
    #[arg(
        short = 'v',
        long = "verbose",
        value_name = "LEVEL",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    pub verbose: u8,

    /// Silence all logging (overrides -v).
    #[arg(short, long)]
    pub quiet: bool,

    /// File to scan. Nothing is printed when omitted.
    ///
    /// A leading `-` is kept as part of the path unless it spells one of the flags above.
    #[arg(allow_hyphen_values = true)]
    pub path: Option<PathBuf>,

    /// Anything after the path is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}
