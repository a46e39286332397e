//! Whitespace Tokenizer Module
//!
//! This module splits a record's cleaned text into tokens. It is the bridge
//! between the text-level steps, which rewrite `clean_text`, and the
//! token-level steps, which rewrite `tokens`.
//!
//! ## What It Does
//!
//! Given cleaned input like `"win  now call "`, it emits each word in order:
//!
//! ```text
//! "win"
//! "now"
//! "call"
//! ```
//!
//! ## Key Features
//!
//! - **Forgiving**: Any ASCII whitespace run separates tokens, so leading, trailing
//!   or repeated whitespace never produces an empty token
//! - **Streaming**: [`tokenize_with`] emits borrowed slices via a callback,
//!   no intermediate collection
//! - **Replacing**: The [`Tokenize`] step overwrites `tokens`, so running it
//!   twice does not duplicate anything
//!
//! ## Usage
//!
//! ```rust
//! use sift_core::analyzer::tokenizer::tokenize_with;
//!
//! let mut words = Vec::new();
//! tokenize_with("hello \t world", |text| words.push(text));
//! assert_eq!(words, ["hello", "world"]);
//! ```
//!
//! ## Ordering
//!
//! Tokenization reads `clean_text` once. Text-level steps that run after it
//! still rewrite `clean_text`, but the tokens were already taken, so they have
//! no visible effect on the output.

use sift_types::{Record, StepKind};

use super::text::is_ascii_ws;
use super::Transform;

/// Splits `text` on ASCII whitespace runs and emits each token left to right.
///
/// Tokens are slices of `text`; nothing is allocated. Non-ASCII spaces such
/// as U+00A0 do not separate tokens.
#[inline]
pub fn tokenize_with<'t, F>(text: &'t str, mut emit: F)
where
    F: FnMut(&'t str),
{
    for token in text.split(is_ascii_ws).filter(|t| !t.is_empty()) {
        emit(token);
    }
}

/// Splits `text` on whitespace runs into owned tokens.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    tokenize_with(text, |t| out.push(t.to_owned()));
    out
}

/// Fills `Record::tokens` from `Record::clean_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenize;

impl Transform for Tokenize {
    fn kind(&self) -> StepKind {
        StepKind::Tokenize
    }

    fn apply(&self, record: &mut Record) {
        let Record {
            clean_text, tokens, ..
        } = record;
        tokens.clear();
        tokenize_with(clean_text.as_str(), |t| tokens.push(t.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<&str> {
        let mut out = Vec::new();
        tokenize_with(input, |t| out.push(t));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hello"), ["hello"]);
    }

    #[test]
    fn two_words() {
        assert_eq!(collect("hello world"), ["hello", "world"]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn whitespace_only_emits_nothing() {
        assert!(collect("  \t\n ").is_empty());
    }

    #[test]
    fn no_empty_tokens_from_irregular_spacing() {
        let out = collect("  win   now\t\tcall \n");
        assert_eq!(out, ["win", "now", "call"]);
        assert!(out.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn non_breaking_space_does_not_split() {
        assert_eq!(collect("win\u{00A0}now call"), ["win\u{00A0}now", "call"]);
        assert_eq!(collect("a\x0Bb\x0Cc"), ["a", "b", "c"]);
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        assert_eq!(collect(&input), words);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        tokenize_with(&input, |text| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn owned_variant_matches_streaming() {
        let input = "the quick  brown fox";
        let owned = tokenize(input);
        assert_eq!(owned, collect(input));
    }

    #[test]
    fn step_replaces_existing_tokens() {
        let mut r = Record::new("ham", "see you soon");
        Tokenize.apply(&mut r);
        Tokenize.apply(&mut r);
        assert_eq!(r.tokens, ["see", "you", "soon"]);
    }

    #[test]
    fn step_on_empty_message() {
        let mut r = Record::new("ham", "");
        Tokenize.apply(&mut r);
        assert!(r.tokens.is_empty());
    }
}
