//! Error taxonomy for the ref-listing core
//!
//! Both variants are fatal for the operation that raised them: a malformed
//! batch is never partially returned, and an unknown ordering selector is
//! never silently defaulted.

use thiserror::Error;

/// Errors raised by the ref-listing core
#[derive(Debug, Error)]
pub enum RefListError {
    /// An input line did not match the 4-column for-each-ref layout
    #[error("malformed ref line ({reason}): {line:?}")]
    MalformedRefLine {
        /// The offending input line, verbatim
        line: String,
        /// What about the line was wrong
        reason: String,
    },

    /// An ordering selector outside the defined strategies was requested
    #[error("unsupported ordering: {0:?} (use: date, name)")]
    UnsupportedOrdering(String),
}

impl RefListError {
    /// Build a `MalformedRefLine` error for the given line
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRefLine {
            line: line.into(),
            reason: reason.into(),
        }
    }
}
