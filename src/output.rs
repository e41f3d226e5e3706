//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Timestamps are used for
//! sorting upstream and are deliberately absent from both renderings.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{GitRef, RefKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a listing operation
#[derive(Debug, Serialize)]
pub struct RefListing {
    /// Refs in the order they should be displayed
    pub refs: Vec<RefInfo>,
}

/// One ref, projected for display
#[derive(Debug, Serialize)]
pub struct RefInfo {
    /// Short display name (prefix stripped)
    pub name: String,
    /// Complete ref path
    pub full_path: String,
    /// Object id the ref points at
    pub object_id: String,
    /// branch / tag / remote / other
    pub kind: RefKind,
}

impl From<&GitRef> for RefInfo {
    fn from(git_ref: &GitRef) -> Self {
        Self {
            name: git_ref.friendly_name().to_string(),
            full_path: git_ref.full_path().to_string(),
            object_id: git_ref.object_id().to_string(),
            kind: git_ref.kind(),
        }
    }
}

impl RefListing {
    /// Project a slice of refs for display
    #[must_use]
    pub fn from_refs(refs: &[GitRef]) -> Self {
        Self {
            refs: refs.iter().map(RefInfo::from).collect(),
        }
    }
}

/// Print a listing in the requested mode
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_listing(listing: &RefListing, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(listing)?),
        OutputMode::Human => {
            for info in &listing.refs {
                println!("{}", render_name(info));
            }
        },
    }
    Ok(())
}

/// Color a ref name by kind for the human mode
fn render_name(info: &RefInfo) -> String {
    match info.kind {
        RefKind::Head => info.name.green().to_string(),
        RefKind::Tag => info.name.yellow().to_string(),
        RefKind::Remote => info.name.red().to_string(),
        RefKind::Other => info.name.clone(),
    }
}
