//! Error types for the domain checker.

use std::fmt;

use thiserror::Error;

/// Which part of the batch input an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSection {
    /// The block-list count and its domain lines
    BlockList,
    /// The query count and its domain lines
    Queries,
}

impl fmt::Display for InputSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSection::BlockList => f.write_str("block-list"),
            InputSection::Queries => f.write_str("queries"),
        }
    }
}

/// Domain checker error types
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Malformed count at line {line}: {value:?}")]
    MalformedCount { line: usize, value: String },

    #[error("Short input in {section}: expected {expected} line(s), found {found}")]
    ShortInput {
        section: InputSection,
        expected: usize,
        found: usize,
    },

    #[error("Invalid UTF-8 at line {line}")]
    InvalidEncoding { line: usize },

    #[error("Empty label in domain {domain:?} (line {line})")]
    EmptyLabel { line: usize, domain: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
