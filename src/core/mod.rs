//! Core ref-listing logic for reflist
//!
//! This module contains pure transformation logic with no I/O dependencies.
//! All repository access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (GitRef, RefKind, RefRecord, RefOrdering)
//! - `services/` - Line parser and the ordering engine
//! - `ports/` - Trait definitions for ref producers

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::RefListError;
