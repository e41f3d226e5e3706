//! Raw ref record, as yielded by a producer

use chrono::{DateTime, Utc};

/// One ref as reported by a producer, before classification
///
/// This is the exchange type of the [`RefSource`](crate::core::ports::RefSource)
/// contract: object id, full path, and an optional last-touched instant.
/// The line parser always supplies a timestamp; alternative backends may
/// legitimately omit it, in which case the record sorts after dated ones
/// under date ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefRecord {
    /// Seconds-precision instant the ref was last written to
    pub timestamp: Option<DateTime<Utc>>,
    /// The object id the ref points at
    pub object_id: String,
    /// The complete ref path (may contain spaces)
    pub full_path: String,
}

impl RefRecord {
    /// Create a record with a known timestamp
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        object_id: impl Into<String>,
        full_path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Some(timestamp),
            object_id: object_id.into(),
            full_path: full_path.into(),
        }
    }

    /// Create a record without a timestamp
    #[must_use]
    pub fn undated(object_id: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            object_id: object_id.into(),
            full_path: full_path.into(),
        }
    }
}
