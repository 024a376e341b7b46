// src/bin/longest-line.rs
//! Longest-line CLI binary.

#![deny(missing_docs)]

use clap::Parser;
use std::io;

use longest_line::app;
use longest_line::cli;
use longest_line::error::LineError;
use longest_line::logging;

fn main() -> LineError<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose, args.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&args, &mut out)
}
