//! Classified git reference
//!
//! A [`GitRef`] pairs an object id with a full ref path and the semantic
//! kind derived from that path. Classification happens once, at
//! construction; the type is immutable afterwards.

use serde::Serialize;

/// Prefix for local branch refs
const HEADS_PREFIX: &str = "refs/heads/";
/// Prefix for tag refs
const TAGS_PREFIX: &str = "refs/tags/";
/// Prefix for remote-tracking refs
const REMOTES_PREFIX: &str = "refs/remotes/";

/// Semantic kind of a ref, derived from its full path
///
/// Classification is anchored at the start of the path and case-sensitive:
/// `/refs/heads/trunk` or `!refs/tags/0.90` classify as [`RefKind::Other`],
/// not as a branch or tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    /// A local branch (`refs/heads/...`)
    Head,
    /// A tag, lightweight or annotated (`refs/tags/...`)
    Tag,
    /// A remote-tracking ref (`refs/remotes/...`)
    Remote,
    /// Anything else (`HEAD`, notes, stash, malformed paths)
    Other,
}

impl RefKind {
    /// Classify a full ref path
    ///
    /// Total: every string has a kind, defaulting to [`RefKind::Other`].
    #[must_use]
    pub fn classify(full_path: &str) -> Self {
        if full_path.starts_with(HEADS_PREFIX) {
            Self::Head
        } else if full_path.starts_with(TAGS_PREFIX) {
            Self::Tag
        } else if full_path.starts_with(REMOTES_PREFIX) {
            Self::Remote
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => write!(f, "branch"),
            Self::Tag => write!(f, "tag"),
            Self::Remote => write!(f, "remote"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A classified, immutable git reference
///
/// Equality is determined by `object_id` and `full_path`; the kind is a
/// function of the path and carries no extra identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRef {
    /// The object id this ref points at (tag object for annotated tags)
    object_id: String,
    /// The complete ref path (e.g. `refs/heads/main`)
    full_path: String,
    /// Kind derived from `full_path`
    kind: RefKind,
}

impl GitRef {
    /// Create a ref, classifying `full_path` eagerly
    #[must_use]
    pub fn new(object_id: impl Into<String>, full_path: impl Into<String>) -> Self {
        let full_path = full_path.into();
        let kind = RefKind::classify(&full_path);
        Self {
            object_id: object_id.into(),
            full_path,
            kind,
        }
    }

    /// The object id this ref points at
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The complete ref path
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The semantic kind of this ref
    #[must_use]
    pub const fn kind(&self) -> RefKind {
        self.kind
    }

    /// The short display form with the structural prefix removed
    ///
    /// `refs/heads/feature/magic` -> `feature/magic`; internal separators
    /// are preserved. Paths that classify as [`RefKind::Other`] are
    /// returned unchanged.
    #[must_use]
    pub fn friendly_name(&self) -> &str {
        let stripped = match self.kind {
            RefKind::Head => self.full_path.strip_prefix(HEADS_PREFIX),
            RefKind::Tag => self.full_path.strip_prefix(TAGS_PREFIX),
            RefKind::Remote => self.full_path.strip_prefix(REMOTES_PREFIX),
            RefKind::Other => None,
        };
        stripped.unwrap_or(&self.full_path)
    }

    /// `true` if this ref is a local branch
    #[must_use]
    pub fn is_head(&self) -> bool {
        self.kind == RefKind::Head
    }

    /// `true` if this ref is a tag
    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.kind == RefKind::Tag
    }
}
