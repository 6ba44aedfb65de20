//! Domain normalization.
//!
//! A [`NormalizedDomain`] stores its labels from the top-level label down to
//! the most specific one, so `math.gdz.ru` becomes `["ru", "gdz", "math"]`.
//! In that order "A is A or a parent of B" is simply "A's labels are a prefix
//! of B's labels".

use std::fmt;
use std::str::FromStr;

use crate::error::{CheckerError, Result};

/// Label delimiter in dotted notation and in suffix keys.
pub const LABEL_SEPARATOR: char = '.';

/// How to treat empty labels (leading, trailing or doubled dots, empty lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyLabelPolicy {
    /// Fail with [`CheckerError::EmptyLabel`]
    #[default]
    Reject,
    /// Keep the empty string as an ordinary label value
    Literal,
}

/// A domain name with its labels ordered top-level first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedDomain {
    labels: Vec<String>,
}

impl NormalizedDomain {
    /// Normalize `raw` with the default [`EmptyLabelPolicy::Reject`] policy.
    pub fn parse(raw: &str) -> Result<Self> {
        normalize(raw, EmptyLabelPolicy::default())
    }

    /// Labels from the top-level label to the most specific one.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Labels joined top-level first, e.g. `"ru.gdz.math"` for `math.gdz.ru`.
    ///
    /// This is the key form stored by [`crate::SuffixIndex`].
    pub fn reversed(&self) -> String {
        let mut sep = [0; 4];
        self.labels.join(&*LABEL_SEPARATOR.encode_utf8(&mut sep))
    }

    /// True if `self` equals `other` or is one of its parent domains.
    pub fn is_ancestor_of(&self, other: &NormalizedDomain) -> bool {
        other.labels.starts_with(&self.labels)
    }
}

impl fmt::Display for NormalizedDomain {
    /// Writes the domain back in conventional dotted notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().rev().enumerate() {
            if i > 0 {
                write!(f, "{}", LABEL_SEPARATOR)?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl FromStr for NormalizedDomain {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Normalize a raw dotted domain.
///
/// A single trailing `\r` is stripped first so CRLF and LF input compare
/// equal. Case and all other characters are preserved.
pub fn normalize(raw: &str, policy: EmptyLabelPolicy) -> Result<NormalizedDomain> {
    normalize_line(raw, policy, 0)
}

/// Like [`normalize`], but reports `line` in [`CheckerError::EmptyLabel`].
pub(crate) fn normalize_line(
    raw: &str,
    policy: EmptyLabelPolicy,
    line: usize,
) -> Result<NormalizedDomain> {
    let raw = raw.strip_suffix('\r').unwrap_or(raw);

    let mut labels: Vec<String> = raw.split(LABEL_SEPARATOR).map(String::from).collect();

    if policy == EmptyLabelPolicy::Reject && labels.iter().any(|l| l.is_empty()) {
        return Err(CheckerError::EmptyLabel {
            line,
            domain: raw.to_string(),
        });
    }

    // split() always yields at least one item, so labels is never empty
    labels.reverse();
    Ok(NormalizedDomain { labels })
}
