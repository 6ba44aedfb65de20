//! Block-list matchers.

mod suffix;

pub use suffix::SuffixIndex;

use crate::domain::NormalizedDomain;

/// Trait for block-list matchers
pub trait DomainMatcher: Send + Sync {
    /// Check if `domain` or any of its parent domains is blocked
    fn is_blocked(&self, domain: &NormalizedDomain) -> bool;
}

impl DomainMatcher for SuffixIndex {
    fn is_blocked(&self, domain: &NormalizedDomain) -> bool {
        SuffixIndex::is_blocked(self, domain)
    }
}
