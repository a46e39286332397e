//! Message analysis steps.
//!
//! This module provides the transformation steps a pipeline is built from:
//! - **Text** ([`text`]): punctuation, digit, case and whitespace cleanup on `clean_text`
//! - **Tokenizer** ([`tokenizer`]): splits `clean_text` into `tokens`
//! - **Filter** ([`filter`]): stopword removal and suffix stemming on `tokens`
//!
//! Every step implements [`Transform`]. [`Step`] is the closed set of all of
//! them, which is what a [`Pipeline`](crate::Pipeline) stores.

pub mod filter;
pub mod text;
pub mod tokenizer;

use sift_types::{Record, StepKind};

use crate::stopwords::Stopwords;

pub use filter::{StopwordFilter, SuffixStem};
pub use text::{DigitStrip, Lowercase, PunctuationStrip, WhitespaceCollapse};
pub use tokenizer::Tokenize;

/// A transformation of one record in place.
///
/// Implementations hold at most read-only configuration and never fail:
/// empty text or an empty token list simply produces empty output.
pub trait Transform: Send + Sync {
    /// Name of this step.
    fn kind(&self) -> StepKind;

    /// Rewrites `record`.
    fn apply(&self, record: &mut Record);
}

/// One configured pipeline step.
#[derive(Debug, Clone)]
pub enum Step {
    /// See [`PunctuationStrip`].
    PunctuationStrip(PunctuationStrip),
    /// See [`DigitStrip`].
    DigitStrip(DigitStrip),
    /// See [`WhitespaceCollapse`].
    WhitespaceCollapse(WhitespaceCollapse),
    /// See [`Lowercase`].
    Lowercase(Lowercase),
    /// See [`Tokenize`].
    Tokenize(Tokenize),
    /// See [`StopwordFilter`].
    StopwordFilter(StopwordFilter),
    /// See [`SuffixStem`].
    SuffixStem(SuffixStem),
}

impl Step {
    /// Builds the step named by `kind`. Only the stopword filter uses
    /// `stopwords`; the set is shared, not copied.
    pub fn from_kind(kind: StepKind, stopwords: &Stopwords) -> Self {
        match kind {
            StepKind::PunctuationStrip => Step::PunctuationStrip(PunctuationStrip),
            StepKind::DigitStrip => Step::DigitStrip(DigitStrip),
            StepKind::WhitespaceCollapse => Step::WhitespaceCollapse(WhitespaceCollapse),
            StepKind::Lowercase => Step::Lowercase(Lowercase),
            StepKind::Tokenize => Step::Tokenize(Tokenize),
            StepKind::StopwordFilter => {
                Step::StopwordFilter(StopwordFilter::new(stopwords.clone()))
            }
            StepKind::SuffixStem => Step::SuffixStem(SuffixStem),
        }
    }

    #[inline]
    fn as_transform(&self) -> &dyn Transform {
        match self {
            Step::PunctuationStrip(s) => s,
            Step::DigitStrip(s) => s,
            Step::WhitespaceCollapse(s) => s,
            Step::Lowercase(s) => s,
            Step::Tokenize(s) => s,
            Step::StopwordFilter(s) => s,
            Step::SuffixStem(s) => s,
        }
    }
}

impl Transform for Step {
    #[inline]
    fn kind(&self) -> StepKind {
        self.as_transform().kind()
    }

    #[inline]
    fn apply(&self, record: &mut Record) {
        self.as_transform().apply(record);
    }
}

impl From<StopwordFilter> for Step {
    fn from(filter: StopwordFilter) -> Self {
        Step::StopwordFilter(filter)
    }
}
