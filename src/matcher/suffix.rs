//! Suffix membership index.
//!
//! Stores each blocked domain as its top-level-first key ("ru.gdz" for
//! `gdz.ru`) in a HashSet. A query is blocked when any prefix of its own key
//! that ends on a label boundary is present, which costs one lookup per label.

use std::borrow::Borrow;
use std::collections::HashSet;

use tracing::debug;

use crate::domain::{NormalizedDomain, LABEL_SEPARATOR};

/// Set of blocked domains answering "is this domain or a parent blocked?"
#[derive(Debug, Clone, Default)]
pub struct SuffixIndex {
    keys: HashSet<String>,
}

impl SuffixIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a list of blocked domains.
    ///
    /// Duplicate entries are stored once.
    pub fn build<I, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Borrow<NormalizedDomain>,
    {
        let entries = entries.into_iter();
        let mut index = Self {
            keys: HashSet::with_capacity(entries.size_hint().0),
        };
        index.extend(entries);
        debug!(entries = index.len(), "suffix index built");
        index
    }

    /// Add a blocked domain. Returns `false` if it was already present.
    pub fn insert(&mut self, domain: &NormalizedDomain) -> bool {
        self.keys.insert(domain.reversed())
    }

    /// Check if `query` equals or is a subdomain of any blocked domain.
    pub fn is_blocked(&self, query: &NormalizedDomain) -> bool {
        if self.keys.is_empty() {
            return false;
        }

        let labels = query.labels();
        let mut candidate =
            String::with_capacity(labels.iter().map(|l| l.len() + 1).sum::<usize>());

        // Walk from the top-level label down, one lookup per level
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                candidate.push(LABEL_SEPARATOR);
            }
            candidate.push_str(label);

            if self.keys.contains(candidate.as_str()) {
                return true;
            }
        }

        false
    }

    /// Number of distinct blocked domains
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<D: Borrow<NormalizedDomain>> Extend<D> for SuffixIndex {
    fn extend<T: IntoIterator<Item = D>>(&mut self, iter: T) {
        for domain in iter {
            self.insert(domain.borrow());
        }
    }
}

impl<D: Borrow<NormalizedDomain>> FromIterator<D> for SuffixIndex {
    fn from_iter<T: IntoIterator<Item = D>>(iter: T) -> Self {
        Self::build(iter)
    }
}
