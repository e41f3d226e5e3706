//! Ref producer port
//!
//! Defines the interface any ref backend must satisfy.

use crate::core::models::RefRecord;

/// A producer of raw ref data
///
/// Implementations enumerate the refs of a repository and yield
/// `(object id, full path, optional timestamp)` tuples. The ordering
/// engine depends only on this contract, so backends (command-line git,
/// libgit2) are interchangeable without touching the classifier or sorter.
#[cfg_attr(test, mockall::automock)]
pub trait RefSource: Send + Sync {
    /// Enumerate the refs this producer can see
    fn list_refs(&self) -> anyhow::Result<Vec<RefRecord>>;
}
