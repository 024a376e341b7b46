// src/scan.rs
//! Selecting the longest line of an input.

#![deny(missing_docs)]

use crate::error::LineError;
use std::io::BufRead;

/// The line picked by a scan, as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestLine {
    length: usize,
    line: String,
}

impl LongestLine {
    /// Wrap a retained line, counting its `char`s.
    pub fn new(line: impl Into<String>) -> Self {
        let line = line.into();
        Self {
            length: line.chars().count(),
            line,
        }
    }

    /// Character count, terminator included.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The line exactly as read, terminator included.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The line with surrounding whitespace removed.
    pub fn stripped(&self) -> &str {
        self.line.trim_matches(is_strip_space)
    }
}

/// Unicode `White_Space` plus the four ASCII separators U+001C..=U+001F.
fn is_strip_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Running maximum over lines fed in file order.
#[derive(Default)]
struct Tracker {
    best: Option<LongestLine>,
    count: usize,
}

impl Tracker {
    /// Keep the line only if it is strictly longer, so the earliest line wins ties.
    fn offer(&mut self, content: &str, terminated: bool) {
        self.count += 1;
        let length = content.chars().count() + usize::from(terminated);
        if matches!(&self.best, Some(current) if current.length >= length) {
            return;
        }
        log::trace!("new longest line ({length} chars) at line {}", self.count);
        let mut line = String::with_capacity(content.len() + 1);
        line.push_str(content);
        if terminated {
            line.push('\n');
        }
        self.best = Some(LongestLine { length, line });
    }

    /// Split `text` at `\r\n`, `\r` and `\n`, offering each line with a
    /// single `\n` ending. A trailing unterminated piece is offered as is.
    fn feed(&mut self, text: &str) {
        let mut rest = text;
        while let Some(at) = rest.find(['\r', '\n']) {
            self.offer(&rest[..at], true);
            let was_cr = rest.as_bytes()[at] == b'\r';
            rest = &rest[at + 1..];
            if was_cr {
                rest = rest.strip_prefix('\n').unwrap_or(rest);
            }
        }
        if !rest.is_empty() {
            self.offer(rest, false);
        }
    }
}

/// Stream `reader` line by line and return its longest line.
///
/// `\r\n`, a lone `\r` and `\n` all end a line, and a retained line ends
/// in a single `\n`; the last line may have none. `Ok(None)` means the input
/// held no lines at all. Read and decode errors are returned untouched.
pub fn longest_line<R: BufRead>(mut reader: R) -> LineError<Option<LongestLine>> {
    let mut tracker = Tracker::default();
    let mut buf = String::new();

    // `read_line` stops after `\n`, so a `\r\n` pair never straddles two reads.
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        tracker.feed(&buf);
    }

    log::debug!("scanned {} lines", tracker.count);
    Ok(tracker.best)
}

/// Same selection as [`longest_line`] over text already in memory.
pub fn longest_in_str(text: &str) -> Option<LongestLine> {
    let mut tracker = Tracker::default();
    tracker.feed(text);
    tracker.best
}
