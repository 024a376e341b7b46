//! Stderr diagnostics for longest-line.

#![deny(missing_docs)]

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Map the `-v` level and `-q` flag onto a log filter.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    // A logger may already be installed when `run` is driven from tests.
    let _ = Builder::new()
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init();
}
