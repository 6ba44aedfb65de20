//! Domain Checker - suffix-based domain block-list matching for Rust
//!
//! A domain is blocked when it equals, or is a subdomain of, any entry in a
//! block-list. Domains are normalized into top-level-first label sequences
//! and stored as suffix keys, so a query with `k` labels costs `k` set
//! lookups.
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{NormalizedDomain, SuffixIndex};
//!
//! let blocked: Vec<NormalizedDomain> = ["gdz.ru", "maps.me", "com"]
//!     .iter()
//!     .map(|d| d.parse().unwrap())
//!     .collect();
//! let index = SuffixIndex::build(&blocked);
//!
//! let query: NormalizedDomain = "math.gdz.ru".parse().unwrap();
//! assert!(index.is_blocked(&query));
//!
//! let query: NormalizedDomain = "freegdz.ru".parse().unwrap();
//! assert!(!index.is_blocked(&query));
//! ```
//!
//! # Batch Protocol
//!
//! ```text
//! N
//! <N block-list domains, one per line>
//! M
//! <M query domains, one per line>
//! ```
//!
//! The output is `M` lines, each `Bad` (blocked) or `Good`, in query order.
//! See [`run_batch`].

pub mod checker;
pub mod domain;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use checker::{check_all, run_batch, CheckerOptions};
pub use domain::{normalize, EmptyLabelPolicy, NormalizedDomain};
pub use error::{CheckerError, InputSection, Result};
pub use matcher::{DomainMatcher, SuffixIndex};
pub use parser::{parse_count, LineReader};
pub use types::{BatchSummary, Verdict};
