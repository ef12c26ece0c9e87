//! Line encoding for the backing file.
//!
//! Each record occupies one line:
//! ```text
//! <id>|<name>|<department>\n
//! ```
//! There is no header, no footer and no escaping. A line parses only when it
//! splits into exactly [`FIELD_COUNT`] parts on the delimiter.

use roster_models::{Record, DELIMITER};

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = 3;

/// Outcome of interpreting one line of the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// The line held a record.
    Ok(Record),
    /// The line did not split into three fields; carries the raw text.
    Malformed(String),
}

impl ParseResult {
    /// Returns true if the line held a record.
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseResult::Ok(_))
    }

    /// Returns the parsed record, if any.
    pub fn record(&self) -> Option<&Record> {
        match self {
            ParseResult::Ok(record) => Some(record),
            ParseResult::Malformed(_) => None,
        }
    }

    /// Consumes the result, returning the parsed record, if any.
    pub fn into_record(self) -> Option<Record> {
        match self {
            ParseResult::Ok(record) => Some(record),
            ParseResult::Malformed(_) => None,
        }
    }

    /// Returns the raw text of a malformed line.
    pub fn malformed_line(&self) -> Option<&str> {
        match self {
            ParseResult::Ok(_) => None,
            ParseResult::Malformed(line) => Some(line),
        }
    }
}

/// Encodes a record as a newline-terminated line.
///
/// The record is not validated here; callers that accept untrusted input
/// should check [`Record::validate`] first.
pub fn encode_line(record: &Record) -> String {
    let [id, name, department] = record.fields();
    let mut line = String::with_capacity(id.len() + name.len() + department.len() + 3);
    line.push_str(id);
    line.push(DELIMITER);
    line.push_str(name);
    line.push(DELIMITER);
    line.push_str(department);
    line.push('\n');
    line
}

/// Decodes one line, without its trailing `\n`.
///
/// A single trailing `\r` is dropped so files saved with CRLF endings parse
/// the same way.
pub fn decode_line(line: &str) -> ParseResult {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return ParseResult::Malformed(line.to_string());
    }
    ParseResult::Ok(Record::new(parts[0], parts[1], parts[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line() {
        let record = Record::new("1", "Alice", "Eng");
        assert_eq!(encode_line(&record), "1|Alice|Eng\n");
    }

    #[test]
    fn test_encode_empty_fields() {
        let record = Record::new("", "", "");
        assert_eq!(encode_line(&record), "||\n");
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(
            decode_line("2|Bob|Sales"),
            ParseResult::Ok(Record::new("2", "Bob", "Sales"))
        );
    }

    #[test]
    fn test_decode_keeps_empty_fields() {
        assert_eq!(
            decode_line("1|Alice|"),
            ParseResult::Ok(Record::new("1", "Alice", ""))
        );
        assert_eq!(decode_line("||"), ParseResult::Ok(Record::new("", "", "")));
    }

    #[test]
    fn test_decode_wrong_field_count() {
        assert_eq!(
            decode_line("garbage"),
            ParseResult::Malformed("garbage".to_string())
        );
        assert_eq!(
            decode_line("1|Alice"),
            ParseResult::Malformed("1|Alice".to_string())
        );
        assert_eq!(
            decode_line("1|Al|ice|Eng"),
            ParseResult::Malformed("1|Al|ice|Eng".to_string())
        );
    }

    #[test]
    fn test_decode_field_count_matches_encoding() {
        let line = encode_line(&Record::new("5", "Eve", "Legal"));
        let parts = line.trim_end_matches('\n').split(DELIMITER).count();
        assert_eq!(parts, FIELD_COUNT);
        assert!(decode_line(line.trim_end_matches('\n')).is_ok());
    }

    #[test]
    fn test_decode_empty_line_is_malformed() {
        assert_eq!(decode_line(""), ParseResult::Malformed(String::new()));
    }

    #[test]
    fn test_decode_strips_carriage_return() {
        assert_eq!(
            decode_line("3|Cy|HR\r"),
            ParseResult::Ok(Record::new("3", "Cy", "HR"))
        );
        assert_eq!(
            decode_line("junk\r"),
            ParseResult::Malformed("junk".to_string())
        );
    }

    #[test]
    fn test_decode_preserves_whitespace() {
        assert_eq!(
            decode_line(" 4 | Di | Ops "),
            ParseResult::Ok(Record::new(" 4 ", " Di ", " Ops "))
        );
    }

    #[test]
    fn test_parse_result_accessors() {
        let ok = decode_line("1|Alice|Eng");
        assert!(ok.is_ok());
        assert_eq!(ok.record().map(|r| r.name.as_str()), Some("Alice"));
        assert!(ok.malformed_line().is_none());

        let bad = decode_line("nope");
        assert!(!bad.is_ok());
        assert!(bad.record().is_none());
        assert_eq!(bad.malformed_line(), Some("nope"));
        assert!(bad.into_record().is_none());
    }
}
