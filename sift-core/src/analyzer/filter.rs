//! Token-level steps: stopword removal and suffix stemming.
//!
//! Both rewrite `Record::tokens` in place and keep the relative order of the
//! tokens they retain. Before tokenization the sequence is empty and both are
//! no-ops.

use sift_types::{Record, StepKind};

use super::Transform;
use crate::stopwords::Stopwords;

/// Removes every token that is an exact, case-sensitive member of the
/// configured stopword set.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: Stopwords,
}

impl StopwordFilter {
    /// Creates a filter over `stopwords`. The set is never modified afterwards.
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// The configured set.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}

impl Transform for StopwordFilter {
    fn kind(&self) -> StepKind {
        StepKind::StopwordFilter
    }

    fn apply(&self, record: &mut Record) {
        if self.stopwords.is_empty() {
            return;
        }
        record.tokens.retain(|t| !self.stopwords.contains(t));
    }
}

/// Applies the first matching suffix rule to `token`:
///
/// 1. more than 4 bytes and ends in `"ing"`: drop the `"ing"`
/// 2. otherwise, more than 3 bytes and ends in `'s'`: drop the `'s'`
///
/// Lengths are UTF-8 byte lengths, so `"éing"` (5 bytes) becomes `"é"`. Both
/// suffixes are ASCII, so the cut always lands on a character boundary.
///
/// This is mechanical truncation, not a linguistic stemmer. It over-stems
/// (`"spring"` becomes `"spr"`) and under-stems (`"ran"` stays `"ran"`).
///
/// ```rust
/// use sift_core::analyzer::filter::stem;
///
/// let mut t = String::from("running");
/// stem(&mut t);
/// assert_eq!(t, "runn");
/// ```
#[inline]
pub fn stem(token: &mut String) {
    let len = token.len();
    if len > 4 && token.ends_with("ing") {
        token.truncate(token.len() - "ing".len());
    } else if len > 3 && token.ends_with('s') {
        token.pop();
    }
}

/// Stems every token independently with [`stem`].
///
/// Stemming does not consult the stopword set. When it runs after
/// [`StopwordFilter`], a stem can itself be a stopword: `"hers"` survives the
/// English filter and then becomes `"her"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStem;

impl Transform for SuffixStem {
    fn kind(&self) -> StepKind {
        StepKind::SuffixStem
    }

    fn apply(&self, record: &mut Record) {
        record.tokens.iter_mut().for_each(stem);
    }
}
