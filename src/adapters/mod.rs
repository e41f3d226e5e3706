//! Adapters implementing the core ports
//!
//! - [`git`] - command-line `git for-each-ref` backend
//! - [`libgit2`] - native-library backend via the `git2` crate
//!
//! Both backends take the same [`RefScope`], so swapping one for the other
//! never changes which refs reach the core.

pub mod git;
pub mod libgit2;

pub use git::GitRefSource;
pub use libgit2::Libgit2RefSource;

/// Which refs a backend enumerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefScope {
    /// Local branches and tags
    #[default]
    All,
    /// Only `refs/heads`
    Branches,
    /// Only `refs/tags`
    Tags,
}

impl RefScope {
    /// The ref patterns passed to `git for-each-ref`
    #[must_use]
    pub const fn patterns(self) -> &'static [&'static str] {
        match self {
            Self::All => &["refs/heads", "refs/tags"],
            Self::Branches => &["refs/heads"],
            Self::Tags => &["refs/tags"],
        }
    }

    /// `true` if a full ref path falls inside this scope
    #[must_use]
    pub fn contains(self, full_path: &str) -> bool {
        self.patterns().iter().any(|p| {
            full_path.strip_prefix(p).is_some_and(|rest| rest.starts_with('/'))
        })
    }
}
