//! Native-library adapter
//!
//! Implements [`RefSource`] over libgit2 via the `git2` crate. A drop-in
//! alternative to the command-line adapter: the classifier and sorter never
//! see which backend produced the records.
//!
//! The timestamp mirrors the for-each-ref format's choice: tagger date for
//! annotated tags, committer date of the peeled commit otherwise. Symbolic
//! refs without a direct target (a fresh repo's HEAD) are skipped.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use git2::Repository;

use super::RefScope;
use crate::core::models::RefRecord;
use crate::core::ports::RefSource;

/// Ref producer backed by libgit2
#[derive(Debug, Clone)]
pub struct Libgit2RefSource {
    /// Path to the repository (work tree or .git directory)
    repo_path: PathBuf,
    /// Which refs to enumerate
    scope: RefScope,
}

impl Libgit2RefSource {
    /// Create an adapter reading the repository at `repo_path`
    #[must_use]
    pub const fn new(repo_path: PathBuf, scope: RefScope) -> Self {
        Self { repo_path, scope }
    }

    /// Create an adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir(scope: RefScope) -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, scope))
    }

    /// The repository path this adapter reads
    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

impl RefSource for Libgit2RefSource {
    fn list_refs(&self) -> anyhow::Result<Vec<RefRecord>> {
        let repo = Repository::open(&self.repo_path)?;
        let mut records = Vec::new();

        for reference in repo.references()? {
            let reference = reference?;
            let Some(full_path) = reference.name() else {
                continue; // non-utf8 ref name
            };
            if !self.scope.contains(full_path) {
                continue;
            }
            let Some(oid) = reference.target() else {
                continue; // unresolved symbolic ref
            };

            records.push(RefRecord {
                timestamp: ref_timestamp(&reference),
                object_id: oid.to_string(),
                full_path: full_path.to_string(),
            });
        }

        log::debug!("libgit2 enumerated {} ref(s) in {}", records.len(), self.repo_path.display());
        Ok(records)
    }
}

/// Date a ref the same way the combined for-each-ref format does
fn ref_timestamp(reference: &git2::Reference<'_>) -> Option<DateTime<Utc>> {
    let seconds = if let Ok(tag) = reference.peel_to_tag() {
        tag.tagger().map(|sig| sig.when().seconds())
    } else {
        reference.peel_to_commit().ok().map(|commit| commit.time().seconds())
    };
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}
