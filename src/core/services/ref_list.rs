//! Ordering engine over a parsed ref batch
//!
//! A [`RefList`] classifies a batch of [`RefRecord`]s once, eagerly, and
//! serves filtered, sorted views over the result. It never re-parses and
//! never mutates: re-querying a different filter or ordering only
//! re-filters and re-sorts the already-classified batch.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::core::error::RefListError;
use crate::core::models::{GitRef, RefOrdering, RefRecord};
use crate::core::ports::RefSource;

/// One classified entry; the timestamp stays private to the sorter
#[derive(Debug, Clone)]
struct Entry {
    timestamp: Option<DateTime<Utc>>,
    git_ref: GitRef,
}

/// An immutable batch of classified refs with filtered, ordered views
#[derive(Debug, Clone)]
pub struct RefList {
    entries: Vec<Entry>,
}

impl RefList {
    /// Build a list from producer records, classifying each one
    #[must_use]
    pub fn new(records: Vec<RefRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| Entry {
                timestamp: record.timestamp,
                git_ref: GitRef::new(record.object_id, record.full_path),
            })
            .collect();
        Self { entries }
    }

    /// Parse raw for-each-ref lines into a list
    ///
    /// # Errors
    ///
    /// [`RefListError::MalformedRefLine`] on the first bad line; no partial
    /// list is returned.
    pub fn parse<'a, I>(lines: I) -> Result<Self, RefListError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Ok(Self::new(super::parser::parse_lines(lines)?))
    }

    /// Build a list from any producer implementing the [`RefSource`] port
    ///
    /// # Errors
    ///
    /// Whatever the producer fails with (process error, repository error).
    pub fn from_source(source: &dyn RefSource) -> anyhow::Result<Self> {
        Ok(Self::new(source.list_refs()?))
    }

    /// Every classified ref, in original input order
    #[must_use]
    pub fn all(&self) -> Vec<GitRef> {
        self.entries.iter().map(|e| e.git_ref.clone()).collect()
    }

    /// Local branches, sorted by the given ordering
    #[must_use]
    pub fn branches(&self, ordering: RefOrdering) -> Vec<GitRef> {
        self.ordered_filtered(ordering, |r| r.is_head())
    }

    /// Tags, sorted by the given ordering
    #[must_use]
    pub fn tags(&self, ordering: RefOrdering) -> Vec<GitRef> {
        self.ordered_filtered(ordering, |r| r.is_tag())
    }

    /// Number of refs in the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the batch holds no refs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ordered_filtered(
        &self,
        ordering: RefOrdering,
        filter: impl Fn(&GitRef) -> bool,
    ) -> Vec<GitRef> {
        let mut selected: Vec<&Entry> =
            self.entries.iter().filter(|e| filter(&e.git_ref)).collect();

        match ordering {
            // sort_by_key is stable: equal timestamps keep input order.
            // Reverse(None) sorts after every Reverse(Some), so dateless
            // records land last.
            RefOrdering::ByLastAccessDate => selected.sort_by_key(|e| Reverse(e.timestamp)),
            RefOrdering::Alphabetically => {
                selected.sort_by(|a, b| a.git_ref.full_path().cmp(b.git_ref.full_path()));
            },
        }

        selected.into_iter().map(|e| e.git_ref.clone()).collect()
    }
}
