//! Core types for the Sift message normalization pipeline.
//!
//! This crate holds the plain data shared by the pipeline library and its
//! binary. Keeping them separate ensures:
//!
//! - **No logic leaks**: Nothing here transforms text
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Clean boundaries**: Ingestion errors are nameable without pulling in the pipeline

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// One message undergoing transformation.
///
/// `label` and `original_text` are fixed at creation. They are private
/// fields exposed through the read-only accessors [`Record::label`] and
/// [`Record::original_text`], so no step can change them. `clean_text` starts as a copy of the original and is
/// rewritten by text-level steps; `tokens` stays empty until a
/// [`StepKind::Tokenize`] step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    label: String,
    original_text: String,
    /// Working string rewritten by text-level steps.
    pub clean_text: String,
    /// Ordered tokens. Empty until tokenization.
    pub tokens: Vec<String>,
}

impl Record {
    /// Creates a record with `clean_text` initialized from `text`.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        let original_text = text.into();
        Self {
            label: label.into(),
            clean_text: original_text.clone(),
            original_text,
            tokens: Vec::new(),
        }
    }

    /// Category tag, e.g. `"spam"` or `"ham"`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The unmodified source message.
    #[inline]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }
}

/// Which part of a [`Record`] a step rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Operates on `clean_text`.
    Text,
    /// Operates on `tokens` (or, for tokenization, produces them).
    Token,
}

/// Name of a pipeline step.
///
/// The set is closed; the pipeline builds concrete steps from these names.
/// `#[repr(u8)]` keeps step lists compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StepKind {
    /// Drop every character that is neither a word character nor whitespace.
    PunctuationStrip = 0,
    /// Drop ASCII digits.
    DigitStrip = 1,
    /// Replace each whitespace run with one space.
    WhitespaceCollapse = 2,
    /// ASCII lowercase.
    Lowercase = 3,
    /// Split `clean_text` into `tokens`.
    Tokenize = 4,
    /// Remove tokens found in the configured stopword set.
    StopwordFilter = 5,
    /// Trim a trailing `ing` or `s`.
    SuffixStem = 6,
}

impl StepKind {
    /// Every step kind, in declaration order.
    pub const ALL: [StepKind; 7] = [
        StepKind::PunctuationStrip,
        StepKind::DigitStrip,
        StepKind::WhitespaceCollapse,
        StepKind::Lowercase,
        StepKind::Tokenize,
        StepKind::StopwordFilter,
        StepKind::SuffixStem,
    ];

    /// Default order: all text cleanup, whitespace collapse included,
    /// finishes before tokenization.
    pub const STANDARD: [StepKind; 7] = [
        StepKind::PunctuationStrip,
        StepKind::DigitStrip,
        StepKind::Lowercase,
        StepKind::WhitespaceCollapse,
        StepKind::Tokenize,
        StepKind::StopwordFilter,
        StepKind::SuffixStem,
    ];

    /// Order used by the first version of this tool. Whitespace collapse runs
    /// last, after tokens already exist, so it has no effect on them.
    pub const LEGACY: [StepKind; 7] = [
        StepKind::PunctuationStrip,
        StepKind::DigitStrip,
        StepKind::Lowercase,
        StepKind::Tokenize,
        StepKind::StopwordFilter,
        StepKind::SuffixStem,
        StepKind::WhitespaceCollapse,
    ];

    /// Which part of the record this step rewrites.
    #[must_use]
    #[inline(always)]
    pub const fn stage(self) -> Stage {
        match self {
            StepKind::PunctuationStrip
            | StepKind::DigitStrip
            | StepKind::WhitespaceCollapse
            | StepKind::Lowercase => Stage::Text,
            StepKind::Tokenize | StepKind::StopwordFilter | StepKind::SuffixStem => Stage::Token,
        }
    }

    /// Short name used in configuration and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StepKind::PunctuationStrip => "punctuation",
            StepKind::DigitStrip => "digits",
            StepKind::WhitespaceCollapse => "whitespace",
            StepKind::Lowercase => "lowercase",
            StepKind::Tokenize => "tokenize",
            StepKind::StopwordFilter => "stopwords",
            StepKind::SuffixStem => "stem",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a step name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step `{input}` (expected one of: punctuation, digits, whitespace, lowercase, tokenize, stopwords, stem)")]
pub struct ParseStepKindError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for StepKind {
    type Err = ParseStepKindError;

    /// Accepts the short name or the long kebab-case name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "punctuation" | "punctuation-strip" => StepKind::PunctuationStrip,
            "digits" | "digit-strip" => StepKind::DigitStrip,
            "whitespace" | "whitespace-collapse" => StepKind::WhitespaceCollapse,
            "lowercase" => StepKind::Lowercase,
            "tokenize" => StepKind::Tokenize,
            "stopwords" | "stopword-filter" => StepKind::StopwordFilter,
            "stem" | "suffix-stem" => StepKind::SuffixStem,
            _ => {
                return Err(ParseStepKindError {
                    input: s.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

/// Why a data row could not be turned into a label/message pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The row has no delimiter, so there is no message field.
    MissingDelimiter,
    /// The label field is empty.
    EmptyLabel,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingDelimiter => f.write_str("missing message field"),
            MalformedReason::EmptyLabel => f.write_str("empty label"),
        }
    }
}

/// Errors raised while reading labeled messages from a delimited source.
///
/// [`IngestError::Unreadable`] means the whole source is unusable;
/// [`IngestError::MalformedRow`] concerns one row and lets the caller decide
/// whether to skip it, keep it with defaults, or abort.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The source could not be opened or a read failed part-way.
    #[error("cannot read {origin}: {source}")]
    Unreadable {
        /// Path or description of the source.
        origin: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A single row could not be parsed.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source, header included.
        line: usize,
        /// What is wrong with the row.
        reason: MalformedReason,
    },
}

impl IngestError {
    /// True for row-level errors the caller may choose to skip.
    #[inline]
    pub const fn is_row_level(&self) -> bool {
        matches!(self, IngestError::MalformedRow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_starts_with_clean_copy_and_no_tokens() {
        let r = Record::new("ham", "See you at 5");
        assert_eq!(r.label(), "ham");
        assert_eq!(r.original_text(), "See you at 5");
        assert_eq!(r.clean_text, "See you at 5");
        assert!(r.tokens.is_empty());
    }

    #[test]
    fn step_kind_size_is_1_byte() {
        assert_eq!(size_of::<StepKind>(), 1);
    }

    #[test]
    fn name_round_trips_through_from_str() {
        for kind in StepKind::ALL {
            assert_eq!(kind.name().parse::<StepKind>(), Ok(kind));
        }
    }

    #[test]
    fn long_names_and_case_are_accepted() {
        assert_eq!("Suffix-Stem".parse(), Ok(StepKind::SuffixStem));
        assert_eq!(" WHITESPACE-collapse ".parse(), Ok(StepKind::WhitespaceCollapse));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "stemmer".parse::<StepKind>().unwrap_err();
        assert_eq!(err.input, "stemmer");
        assert!(err.to_string().contains("stemmer"));
    }

    #[test]
    fn stages() {
        assert_eq!(StepKind::Lowercase.stage(), Stage::Text);
        assert_eq!(StepKind::WhitespaceCollapse.stage(), Stage::Text);
        assert_eq!(StepKind::Tokenize.stage(), Stage::Token);
        assert_eq!(StepKind::SuffixStem.stage(), Stage::Token);
    }

    #[test]
    fn standard_collapses_before_tokenizing() {
        let pos = |order: &[StepKind], k| order.iter().position(|&s| s == k).unwrap();
        let std = &StepKind::STANDARD;
        assert!(pos(std, StepKind::WhitespaceCollapse) < pos(std, StepKind::Tokenize));

        let legacy = &StepKind::LEGACY;
        assert!(pos(legacy, StepKind::WhitespaceCollapse) > pos(legacy, StepKind::Tokenize));
    }

    #[test]
    fn orders_contain_every_step_once() {
        for order in [StepKind::STANDARD, StepKind::LEGACY] {
            for kind in StepKind::ALL {
                assert_eq!(order.iter().filter(|&&k| k == kind).count(), 1);
            }
        }
    }

    #[test]
    fn ingest_error_display() {
        let err = IngestError::MalformedRow {
            line: 4,
            reason: MalformedReason::MissingDelimiter,
        };
        assert_eq!(err.to_string(), "malformed row at line 4: missing message field");
        assert!(err.is_row_level());

        let err = IngestError::Unreadable {
            origin: "spam.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("cannot read spam.csv"));
        assert!(!err.is_row_level());
    }
}
