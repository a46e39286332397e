//! Delimited-file reader for labeled messages.
//!
//! The expected layout is a header line followed by one `label,message` row
//! per line:
//!
//! ```text
//! label,message
//! ham,"Ok lar... Joking wif u oni..."
//! spam,Free entry in 2 a wkly comp, text FA to 87121
//! ```
//!
//! Rows are split at the first delimiter only, so the message keeps any later
//! delimiters. One leading and one trailing `"` are dropped from the message.
//! There is no real CSV quoting: a quoted label, or a delimiter inside a
//! quoted label, is not handled.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use memchr::memchr;
use thiserror::Error;
use tracing::{debug, warn};

use sift_types::{IngestError, MalformedReason};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// One parsed data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source, header included.
    pub line: usize,
    /// Category tag.
    pub label: String,
    /// Message text with surrounding quotes removed.
    pub message: String,
}

impl RawRow {
    /// Splits the row into `(label, message)`.
    pub fn into_pair(self) -> (String, String) {
        (self.label, self.message)
    }
}

/// What to do with a row that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Log a warning and drop the row.
    Skip,
    /// Keep the row with whatever could be read; a row without a delimiter
    /// becomes a label with an empty message.
    Default,
    /// Yield the error.
    #[default]
    Abort,
}

/// Returned when a row policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown row policy `{input}` (expected skip, default or abort)")]
pub struct ParseRowPolicyError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for RowPolicy {
    type Err = ParseRowPolicyError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(RowPolicy::Skip),
            "default" => Ok(RowPolicy::Default),
            "abort" => Ok(RowPolicy::Abort),
            _ => Err(ParseRowPolicyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Streaming reader yielding one item per data row.
///
/// The header line and blank lines are skipped. Lines that are not valid
/// UTF-8 are decoded lossily. After an I/O error the reader is exhausted.
pub struct Reader<R> {
    inner: R,
    origin: String,
    delimiter: u8,
    policy: RowPolicy,
    line: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Reader<R> {
    /// Wraps `inner` with the default delimiter and [`RowPolicy::Abort`].
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            origin: String::from("<reader>"),
            delimiter: DEFAULT_DELIMITER,
            policy: RowPolicy::default(),
            line: 0,
            buf: Vec::with_capacity(256),
            done: false,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets how malformed rows are handled.
    pub fn with_policy(mut self, policy: RowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the name used in error messages.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Reads the next line into `buf` without its line terminator.
    /// Returns `Ok(false)` at end of input.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<RawRow, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    debug!(origin = %self.origin, lines = self.line, "end of input");
                    return None;
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(IngestError::Unreadable {
                        origin: self.origin.clone(),
                        source,
                    }));
                }
            }

            if self.line == 1 || self.buf.is_empty() {
                continue;
            }

            match parse_row(&self.buf, self.line, self.delimiter) {
                Ok(row) => return Some(Ok(row)),
                Err(reason) => match self.policy {
                    RowPolicy::Skip => {
                        warn!(origin = %self.origin, line = self.line, %reason, "skipping malformed row");
                    }
                    RowPolicy::Default => {
                        warn!(origin = %self.origin, line = self.line, %reason, "keeping malformed row with defaults");
                        return Some(Ok(fallback_row(&self.buf, self.line, self.delimiter)));
                    }
                    RowPolicy::Abort => {
                        return Some(Err(IngestError::MalformedRow {
                            line: self.line,
                            reason,
                        }));
                    }
                },
            }
        }
        None
    }
}

/// Parses one data line (terminator already removed).
pub fn parse_row(bytes: &[u8], line: usize, delimiter: u8) -> Result<RawRow, MalformedReason> {
    let at = memchr(delimiter, bytes).ok_or(MalformedReason::MissingDelimiter)?;
    let label = String::from_utf8_lossy(&bytes[..at]);
    if label.trim().is_empty() {
        return Err(MalformedReason::EmptyLabel);
    }
    Ok(RawRow {
        line,
        label: label.into_owned(),
        message: unquote(&bytes[at + 1..]),
    })
}

/// Best-effort row for [`RowPolicy::Default`]: everything before the first
/// delimiter (or the whole line) is the label, the rest is the message.
fn fallback_row(bytes: &[u8], line: usize, delimiter: u8) -> RawRow {
    let (label, message) = match memchr(delimiter, bytes) {
        Some(at) => (&bytes[..at], unquote(&bytes[at + 1..])),
        None => (bytes, String::new()),
    };
    RawRow {
        line,
        label: String::from_utf8_lossy(label).into_owned(),
        message,
    }
}

fn unquote(mut field: &[u8]) -> String {
    if let [b'"', rest @ ..] = field {
        field = rest;
    }
    if let [rest @ .., b'"'] = field {
        field = rest;
    }
    String::from_utf8_lossy(field).into_owned()
}

/// Opens `path` for reading.
pub fn open(path: impl AsRef<Path>) -> Result<Reader<BufReader<File>>, IngestError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| IngestError::Unreadable {
        origin: origin.clone(),
        source,
    })?;
    Ok(Reader::new(BufReader::new(file)).with_origin(origin))
}

/// Reads every row of `path` under `policy`.
pub fn load(path: impl AsRef<Path>, policy: RowPolicy) -> Result<Vec<RawRow>, IngestError> {
    open(path)?.with_policy(policy).collect()
}
