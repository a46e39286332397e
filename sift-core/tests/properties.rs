//! Property-based tests for the pipeline steps.

use proptest::prelude::*;

use sift_core::analyzer::filter::stem;
use sift_core::analyzer::text::{collapse_whitespace, lowercase, strip_digits, strip_punctuation};
use sift_core::analyzer::{StopwordFilter, SuffixStem, Transform};
use sift_core::{Pipeline, PipelineConfig, Record, StepKind, Stopwords};

fn message() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,64}",
        "[a-zA-Z0-9 \t\n!?.,$%'_-]{0,64}",
        any::<String>(),
    ]
}

fn token_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,9}", 0..16)
}

proptest! {
    #[test]
    fn collapse_is_a_fixed_point(input in message()) {
        let once = collapse_whitespace(&input);
        prop_assert_eq!(collapse_whitespace(&once), once.clone());
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn punctuation_strip_keeps_only_word_chars_and_whitespace(input in message()) {
        let mut s = input.clone();
        strip_punctuation(&mut s);
        prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()));
        prop_assert!(s.chars().all(|c| input.contains(c)));
    }

    #[test]
    fn digit_strip_removes_digits_only(input in message()) {
        let mut s = input.clone();
        strip_digits(&mut s);
        prop_assert!(!s.chars().any(|c| c.is_ascii_digit()));
        let expected: String = input.chars().filter(|c| !c.is_ascii_digit()).collect();
        prop_assert_eq!(s, expected);
    }

    #[test]
    fn lowercase_introduces_no_uppercase_ascii(input in message()) {
        let mut s = input.clone();
        lowercase(&mut s);
        prop_assert!(!s.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(s.len(), input.len());
    }

    #[test]
    fn stopword_filter_keeps_order_and_removes_members(
        tokens in token_list(),
        stop in prop::collection::vec("[a-z]{1,3}", 0..8),
    ) {
        let set: Stopwords = stop.iter().cloned().collect();
        let mut record = Record::new("ham", tokens.join(" "));
        record.tokens = tokens.clone();
        StopwordFilter::new(set.clone()).apply(&mut record);

        let expected: Vec<String> = tokens.into_iter().filter(|t| !set.contains(t)).collect();
        prop_assert!(record.tokens.iter().all(|t| !set.contains(t)));
        prop_assert_eq!(record.tokens, expected);
    }

    #[test]
    fn stem_maps_tokens_one_to_one_in_order(tokens in token_list()) {
        let mut record = Record::new("ham", tokens.join(" "));
        record.tokens = tokens.clone();
        SuffixStem.apply(&mut record);

        prop_assert_eq!(record.tokens.len(), tokens.len());
        for (out, orig) in record.tokens.iter().zip(&tokens) {
            prop_assert!(orig.starts_with(out.as_str()));
            let mut again = orig.clone();
            stem(&mut again);
            prop_assert_eq!(out, &again);
        }
    }

    #[test]
    fn full_pipeline_emits_only_nonempty_unspaced_tokens(input in message()) {
        let out = Pipeline::standard(Stopwords::english()).run([("spam", input)]);
        for token in &out[0].tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(char::is_whitespace));
        }
    }

    #[test]
    fn no_stopword_survives_the_filter(input in message()) {
        let stop = Stopwords::english();
        // Stemming is left out: it may turn "hers" into the stopword "her".
        let config = PipelineConfig {
            steps: StepKind::STANDARD[..6].to_vec(),
            stopwords: stop.clone(),
        };
        let out = Pipeline::from_config(&config).run([("spam", input)]);
        prop_assert!(out[0].tokens.iter().all(|t| !stop.contains(t)));
    }

    #[test]
    fn record_order_is_irrelevant(inputs in prop::collection::vec(message(), 0..8)) {
        let pipeline = Pipeline::default();
        let forward = pipeline.run(inputs.iter().map(|m| ("ham", m.as_str())));
        let mut backward = pipeline.run(inputs.iter().rev().map(|m| ("ham", m.as_str())));
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
