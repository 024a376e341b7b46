// src/error.rs
//! Error handling for longest-line.

#![deny(missing_docs)]

/// LineError is alias for anyhow
pub type LineError<T> = anyhow::Result<T>;
