//! Text-level steps: each one rewrites `Record::clean_text`.
//!
//! All four are plain scans with no configuration and no locale. Character
//! classes are fixed:
//!
//! - a **word character** is ASCII `[A-Za-z0-9_]`
//! - **whitespace** is ASCII space, `\t`, `\n`, `\x0B`, `\x0C` and `\r`;
//!   other Unicode spaces such as U+00A0 are symbols and get stripped
//! - **digits** are ASCII `0-9` only
//! - **lowercasing** touches ASCII letters only

use sift_types::{Record, StepKind};

use super::Transform;

/// Whitespace as the C locale defines it. Shared with the tokenizer so
/// stripping, collapsing and splitting agree.
#[inline(always)]
pub(crate) const fn is_ascii_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[inline(always)]
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Removes every character that is neither a word character nor whitespace.
///
/// Non-ASCII letters and non-ASCII spaces count as symbols and are removed.
#[inline]
pub fn strip_punctuation(text: &mut String) {
    text.retain(|c| is_word_char(c) || is_ascii_ws(c));
}

/// Removes ASCII digits, keeping the order of everything else.
#[inline]
pub fn strip_digits(text: &mut String) {
    text.retain(|c| !c.is_ascii_digit());
}

/// ASCII lowercase in place. Other characters are left alone.
#[inline]
pub fn lowercase(text: &mut String) {
    text.make_ascii_lowercase();
}

/// Collapses whitespace runs into an existing buffer.
///
/// Every maximal run of whitespace becomes a single `' '`. Leading and
/// trailing runs are collapsed too, not trimmed. Clears `out` before writing.
#[inline]
pub fn collapse_whitespace_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    let mut prev_space = false;
    for c in input.chars() {
        if is_ascii_ws(c) {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(c);
            prev_space = false;
        }
    }
}

/// Collapses whitespace runs and returns a new String.
#[inline]
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    collapse_whitespace_into(input, &mut out);
    out
}

/// True when `input` is already a fixed point of [`collapse_whitespace`].
fn is_collapsed(input: &str) -> bool {
    let mut prev_space = false;
    for c in input.chars() {
        if is_ascii_ws(c) {
            if prev_space || c != ' ' {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }
    true
}

/// Drops punctuation and symbols from `clean_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationStrip;

impl Transform for PunctuationStrip {
    fn kind(&self) -> StepKind {
        StepKind::PunctuationStrip
    }

    fn apply(&self, record: &mut Record) {
        strip_punctuation(&mut record.clean_text);
    }
}

/// Drops ASCII digits from `clean_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitStrip;

impl Transform for DigitStrip {
    fn kind(&self) -> StepKind {
        StepKind::DigitStrip
    }

    fn apply(&self, record: &mut Record) {
        strip_digits(&mut record.clean_text);
    }
}

/// ASCII-lowercases `clean_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Transform for Lowercase {
    fn kind(&self) -> StepKind {
        StepKind::Lowercase
    }

    fn apply(&self, record: &mut Record) {
        lowercase(&mut record.clean_text);
    }
}

/// Replaces each whitespace run in `clean_text` with one space.
///
/// Idempotent. Has no effect on `tokens`, so it must run before
/// [`Tokenize`](super::Tokenize) to matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCollapse;

impl Transform for WhitespaceCollapse {
    fn kind(&self) -> StepKind {
        StepKind::WhitespaceCollapse
    }

    fn apply(&self, record: &mut Record) {
        if is_collapsed(&record.clean_text) {
            return;
        }
        record.clean_text = collapse_whitespace(&record.clean_text);
    }
}
