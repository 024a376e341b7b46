// src/report.rs
//! Printing scan results.

#![deny(missing_docs)]

use crate::scan::LongestLine;
use std::io::{self, Write};

/// Printed when the target path does not exist.
pub const NOT_FOUND_MESSAGE: &str = "File not found.";

/// Write the two-line `Length:` / `Line:` report.
pub fn write_report<W: Write>(out: &mut W, longest: &LongestLine) -> io::Result<()> {
    writeln!(out, "Length: {}", longest.length())?;
    writeln!(out, "Line: {}", longest.stripped())
}

/// Write the missing-file message.
pub fn write_not_found<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NOT_FOUND_MESSAGE}")
}
