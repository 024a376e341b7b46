// src/source.rs
//! Opening the file to scan.

#![deny(missing_docs)]

use crate::error::LineError;
use anyhow::Context;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open `path` for reading.
///
/// Returns `Ok(None)` only when the open fails with [`ErrorKind::NotFound`].
/// Every other failure (permissions, bad path, ...) is returned as an error.
pub fn open_source(path: &Path) -> LineError<Option<File>> {
    match File::open(path) {
        Ok(file) => {
            log::debug!("opened {}", path.display());
            Ok(Some(file))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("{} does not exist", path.display());
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("failed to open {}", path.display())),
    }
}
