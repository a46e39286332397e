//! Normalization pipeline for short labeled messages.
//!
//! Raw `(label, message)` pairs become [`Record`]s, which a [`Pipeline`] runs
//! through an ordered list of steps:
//!
//! ```text
//! PunctuationStrip → DigitStrip → Lowercase → WhitespaceCollapse
//!     → Tokenize → StopwordFilter → SuffixStem
//! ```
//!
//! ```rust
//! use sift_core::{Pipeline, Stopwords};
//!
//! let stopwords: Stopwords = ["the", "is"].into_iter().collect();
//! let pipeline = Pipeline::standard(stopwords);
//! let records = pipeline.run([("spam", "Win $$$ NOW!!! call 12345, the prize is yours")]);
//! assert_eq!(records[0].tokens, ["win", "now", "call", "prize", "your"]);
//! ```
//!
//! [`ingest`] reads delimited files into pairs and [`report`] prints results;
//! neither is needed to use the pipeline.

pub mod analyzer;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod stopwords;

pub use pipeline::{Pipeline, PipelineConfig};
pub use sift_types::{IngestError, MalformedReason, Record, Stage, StepKind};
pub use stopwords::Stopwords;
