//! Stopword sets.
//!
//! A [`Stopwords`] value is built once and then only read. Clones share the
//! same underlying set, so a pipeline, its steps and any worker that holds a
//! copy all see identical contents without locking.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashSet;

/// Built-in English list.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "she", "it", "they", "them", "his", "her", "its", "the",
    "is", "in", "at", "so", "to", "for", "and", "but", "until", "there",
];

/// Immutable, case-sensitive set of words removed by the stopword filter.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: Arc<FxHashSet<String>>,
}

impl Stopwords {
    /// A set with no words; the filter becomes a pass-through.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in English list (lowercase pronouns, articles and a few
    /// conjunctions and prepositions).
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Reads one word per line.
    ///
    /// Surrounding whitespace is trimmed; blank lines and lines starting with
    /// `#` are skipped. Case is preserved.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_string());
        }
        Ok(Self {
            words: Arc::new(words),
        })
    }

    /// Reads a stopword file, see [`Stopwords::from_reader`].
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Exact, case-sensitive membership.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: Arc::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn english_has_expected_members() {
        let s = Stopwords::english();
        for w in ["the", "is", "yours", "there", "until"] {
            assert!(s.contains(w), "missing {w}");
        }
        assert!(!s.contains("prize"));
        assert_eq!(s.len(), ENGLISH.len());
    }

    #[test]
    fn membership_is_case_sensitive() {
        let s = Stopwords::english();
        assert!(s.contains("the"));
        assert!(!s.contains("The"));
    }

    #[test]
    fn reader_skips_blanks_and_comments() {
        let input = "# common words\nthe\n\n  is  \n#not\nA\n";
        let s = Stopwords::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(s.len(), 3);
        assert!(s.contains("the"));
        assert!(s.contains("is"));
        assert!(s.contains("A"));
        assert!(!s.contains("a"));
        assert!(!s.contains("#not"));
    }

    #[test]
    fn duplicates_collapse() {
        let s: Stopwords = ["to", "to", "at"].into_iter().collect();
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn clones_share_storage() {
        let a = Stopwords::english();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.words, &b.words));
    }

    #[test]
    fn empty_set() {
        let s = Stopwords::empty();
        assert!(s.is_empty());
        assert!(!s.contains(""));
        assert_eq!(s.iter().count(), 0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Stopwords::load("/definitely/not/here/stopwords.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn stopwords_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stopwords>();
    }
}
