// src/app.rs
//! One invocation of longest-line, start to finish.

#![deny(missing_docs)]

use crate::cli::Cli;
use crate::error::LineError;
use crate::report::{write_not_found, write_report};
use crate::scan::longest_line;
use crate::source::open_source;
use anyhow::Context;
use std::io::{BufReader, Write};

/// Scan the file named by `cli` and write the outcome to `out`.
///
/// No path or an empty file writes nothing. A missing file writes the
/// not-found message and succeeds. Any other I/O or decode failure is
/// returned before anything is written.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> LineError<()> {
    let Some(path) = cli.path.as_deref() else {
        log::debug!("no path given");
        return Ok(());
    };
    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.extra.len());
    }

    let Some(file) = open_source(path)? else {
        write_not_found(out)?;
        return Ok(());
    };

    let longest = longest_line(BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))?;

    match longest {
        Some(longest) => {
            log::debug!("longest line is {} chars", longest.length());
            write_report(out, &longest)?;
        }
        None => log::debug!("{} has no lines", path.display()),
    }
    out.flush()?;
    Ok(())
}
