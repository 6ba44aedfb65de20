//! Verdicts and batch counters.

use std::fmt;

/// Verdict for a single query domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The domain or one of its parents is on the block-list
    Bad,
    /// No block-list entry covers the domain
    Good,
}

impl Verdict {
    /// Output token written for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bad => "Bad",
            Verdict::Good => "Good",
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Bad)
    }
}

impl From<bool> for Verdict {
    fn from(blocked: bool) -> Self {
        if blocked {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters reported after a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Block-list lines read
    pub entries: usize,
    /// Distinct domains in the built index
    pub distinct_entries: usize,
    /// Query lines read
    pub queries: usize,
    /// Queries answered with [`Verdict::Bad`]
    pub blocked: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_tokens() {
        assert_eq!(Verdict::from(true).to_string(), "Bad");
        assert_eq!(Verdict::from(false).to_string(), "Good");
        assert!(Verdict::Bad.is_blocked());
        assert!(!Verdict::Good.is_blocked());
    }
}
