// src/lib.rs
//! Longest-line library.

#![deny(missing_docs)]

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod scan;
pub mod source;
