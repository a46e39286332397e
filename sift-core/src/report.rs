//! Plain-text summary of processed records.

use std::io::{self, Write};

use sift_types::Record;

/// Writes the first `limit` records as
///
/// ```text
/// Label: spam, Original Message: Win $$$ NOW!!!
/// Processed Tokens: win now
///
/// ```
///
/// Each token is followed by a single space.
pub fn write_summary<W: Write>(mut out: W, records: &[Record], limit: usize) -> io::Result<()> {
    for record in records.iter().take(limit) {
        writeln!(
            out,
            "Label: {}, Original Message: {}",
            record.label(),
            record.original_text()
        )?;
        write!(out, "Processed Tokens: ")?;
        for token in &record.tokens {
            write!(out, "{token} ")?;
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[Record], limit: usize) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, records, limit).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_record() {
        let mut r = Record::new("spam", "Win NOW");
        r.tokens = vec!["win".into(), "now".into()];
        assert_eq!(
            render(&[r], 5),
            "Label: spam, Original Message: Win NOW\nProcessed Tokens: win now \n\n"
        );
    }

    #[test]
    fn record_without_tokens() {
        let r = Record::new("ham", "");
        assert_eq!(
            render(&[r], 1),
            "Label: ham, Original Message: \nProcessed Tokens: \n\n"
        );
    }

    #[test]
    fn limit_caps_output() {
        let records: Vec<Record> = (0..10).map(|i| Record::new("ham", format!("m{i}"))).collect();
        let out = render(&records, 3);
        assert_eq!(out.matches("Label: ").count(), 3);
        assert!(out.contains("m2"));
        assert!(!out.contains("m3"));
    }

    #[test]
    fn zero_limit_writes_nothing() {
        assert!(render(&[Record::new("ham", "x")], 0).is_empty());
    }
}
