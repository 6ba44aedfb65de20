//! Batch checker.
//!
//! Drives the line protocol: a block-list count and its domains, then a query
//! count and its domains, answered with one `Bad`/`Good` line per query.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::domain::{EmptyLabelPolicy, NormalizedDomain};
use crate::error::{InputSection, Result};
use crate::matcher::{DomainMatcher, SuffixIndex};
use crate::parser::LineReader;
use crate::types::{BatchSummary, Verdict};

/// Batch checker options.
#[derive(Debug, Clone, Default)]
pub struct CheckerOptions {
    /// Policy for empty labels in both block-list and query domains
    pub empty_label_policy: EmptyLabelPolicy,
}

impl CheckerOptions {
    /// Create new checker options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty label policy.
    pub fn with_empty_label_policy(mut self, policy: EmptyLabelPolicy) -> Self {
        self.empty_label_policy = policy;
        self
    }
}

/// Classify every query against `matcher`, preserving query order.
pub fn check_all<M: DomainMatcher>(matcher: &M, queries: &[NormalizedDomain]) -> Vec<Verdict> {
    queries
        .iter()
        .map(|query| {
            let verdict = Verdict::from(matcher.is_blocked(query));
            trace!(domain = %query, %verdict, "checked");
            verdict
        })
        .collect()
}

/// Run one batch from `input`, writing verdicts to `output`.
///
/// The whole input is read and validated before the first verdict is
/// written, so a malformed batch produces no output at all.
pub fn run_batch<R, W>(input: R, mut output: W, options: &CheckerOptions) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let policy = options.empty_label_policy;
    let mut reader = LineReader::new(input);

    let blocked = reader.read_section(InputSection::BlockList, policy)?;
    let index = SuffixIndex::build(&blocked);

    let queries = reader.read_section(InputSection::Queries, policy)?;
    debug!(
        queries = queries.len(),
        last_line = reader.line_num(),
        "input read"
    );

    let verdicts = check_all(&index, &queries);
    for verdict in &verdicts {
        writeln!(output, "{}", verdict)?;
    }
    output.flush()?;

    Ok(BatchSummary {
        entries: blocked.len(),
        distinct_entries: index.len(),
        queries: queries.len(),
        blocked: verdicts.iter().filter(|v| v.is_blocked()).count(),
    })
}
