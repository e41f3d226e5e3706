//! Command implementations

mod list;

pub use list::{RepoArgs, list_all, list_branches, list_tags};
