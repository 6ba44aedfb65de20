//! Line-oriented reading of the batch input.
//!
//! Counts are validated explicitly; domain lines are handed to the normalizer
//! with their input line number so errors can point at the offending line.

use std::io::BufRead;

use crate::domain::{normalize_line, EmptyLabelPolicy, NormalizedDomain};
use crate::error::{CheckerError, InputSection, Result};

/// Upper bound on up-front allocation driven by a declared count.
const MAX_PREALLOCATE: usize = 4096;

/// Line reader that keeps track of 1-based line numbers for error reporting.
pub struct LineReader<R> {
    inner: R,
    line_num: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line_num: 0 }
    }

    /// Number of the last line returned by [`next_line`](Self::next_line).
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Read the next line without its `\n` terminator.
    ///
    /// A `\r` before the terminator is left in place; callers decide whether
    /// to strip it. Returns `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.inner.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        self.line_num += 1;

        let line = String::from_utf8(buf).map_err(|_| CheckerError::InvalidEncoding {
            line: self.line_num,
        })?;
        Ok(Some(line))
    }

    /// Read a count line for `section`.
    pub fn read_count(&mut self, section: InputSection) -> Result<usize> {
        let line = self.next_line()?.ok_or(CheckerError::ShortInput {
            section,
            expected: 1,
            found: 0,
        })?;
        parse_count(&line, self.line_num)
    }

    /// Read exactly `count` domain lines and normalize each one.
    pub fn read_domains(
        &mut self,
        count: usize,
        section: InputSection,
        policy: EmptyLabelPolicy,
    ) -> Result<Vec<NormalizedDomain>> {
        let mut domains = Vec::with_capacity(count.min(MAX_PREALLOCATE));

        for found in 0..count {
            let line = self.next_line()?.ok_or(CheckerError::ShortInput {
                section,
                expected: count,
                found,
            })?;
            domains.push(normalize_line(&line, policy, self.line_num)?);
        }

        Ok(domains)
    }

    /// Read a count line followed by that many domains.
    pub fn read_section(
        &mut self,
        section: InputSection,
        policy: EmptyLabelPolicy,
    ) -> Result<Vec<NormalizedDomain>> {
        let count = self.read_count(section)?;
        self.read_domains(count, section, policy)
    }
}

/// Parse a count line as a non-negative integer.
///
/// A trailing `\r` and surrounding whitespace are ignored; anything else that
/// is not a valid `usize` is rejected.
pub fn parse_count(line: &str, line_num: usize) -> Result<usize> {
    let trimmed = line.strip_suffix('\r').unwrap_or(line).trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| CheckerError::MalformedCount {
            line: line_num,
            value: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let mut r = LineReader::new(Cursor::new(b"1\nm\xe9.gdz.ru\n".to_vec()));
        assert_eq!(r.read_count(InputSection::Queries).unwrap(), 1);
        let err = r
            .read_domains(1, InputSection::Queries, EmptyLabelPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, CheckerError::InvalidEncoding { line: 2 }));
    }

    #[test]
    fn test_non_ascii_utf8_labels_are_kept() {
        let mut r = reader("1\nмат.гдз.рф\n");
        let domains = r
            .read_section(InputSection::Queries, EmptyLabelPolicy::Reject)
            .unwrap();
        assert_eq!(domains[0].reversed(), "рф.гдз.мат");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3", 1).unwrap(), 3);
        assert_eq!(parse_count("0", 1).unwrap(), 0);
        assert_eq!(parse_count(" 12 ", 1).unwrap(), 12);
        assert_eq!(parse_count("5\r", 1).unwrap(), 5);
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        for bad in ["", "abc", "-1", "3.5", "1 2", "0x10"] {
            let err = parse_count(bad, 4).unwrap_err();
            match err {
                CheckerError::MalformedCount { line, value } => {
                    assert_eq!(line, 4);
                    assert_eq!(value, bad);
                }
                other => panic!("expected MalformedCount for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_next_line_tracks_numbers() {
        let mut r = reader("a\nb\r\nc");
        assert_eq!(r.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(r.line_num(), 1);
        assert_eq!(r.next_line().unwrap().as_deref(), Some("b\r"));
        assert_eq!(r.next_line().unwrap().as_deref(), Some("c"));
        assert_eq!(r.line_num(), 3);
        assert_eq!(r.next_line().unwrap(), None);
        assert_eq!(r.line_num(), 3);
    }

    #[test]
    fn test_read_section() {
        let mut r = reader("2\ngdz.ru\nmaps.me\n1\ncom\n");
        let blocked = r
            .read_section(InputSection::BlockList, EmptyLabelPolicy::Reject)
            .unwrap();
        assert_eq!(blocked.len(), 2);
        assert_eq!(blocked[0].reversed(), "ru.gdz");

        let queries = r
            .read_section(InputSection::Queries, EmptyLabelPolicy::Reject)
            .unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].reversed(), "com");
    }

    #[test]
    fn test_zero_count_reads_nothing() {
        let mut r = reader("0\n1\ncom\n");
        let blocked = r
            .read_section(InputSection::BlockList, EmptyLabelPolicy::Reject)
            .unwrap();
        assert!(blocked.is_empty());
        assert_eq!(r.read_count(InputSection::Queries).unwrap(), 1);
    }

    #[test]
    fn test_missing_count_line() {
        let mut r = reader("");
        let err = r.read_count(InputSection::BlockList).unwrap_err();
        assert!(matches!(
            err,
            CheckerError::ShortInput {
                section: InputSection::BlockList,
                expected: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn test_short_domain_list() {
        let mut r = reader("3\ngdz.ru\nmaps.me\n");
        let err = r
            .read_section(InputSection::BlockList, EmptyLabelPolicy::Reject)
            .unwrap_err();
        assert!(matches!(
            err,
            CheckerError::ShortInput {
                section: InputSection::BlockList,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_empty_label_reports_input_line() {
        let mut r = reader("2\ngdz.ru\n.maps.me\n");
        let err = r
            .read_section(InputSection::BlockList, EmptyLabelPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, CheckerError::EmptyLabel { line: 3, .. }));
    }

    #[test]
    fn test_empty_line_as_literal_domain() {
        let mut r = reader("1\n\n");
        let domains = r
            .read_section(InputSection::Queries, EmptyLabelPolicy::Literal)
            .unwrap();
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].labels(), &[""]);
    }

    #[test]
    fn test_huge_count_does_not_preallocate() {
        let mut r = reader("com\n");
        let err = r
            .read_domains(usize::MAX, InputSection::Queries, EmptyLabelPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, CheckerError::ShortInput { found: 1, .. }));
    }
}
