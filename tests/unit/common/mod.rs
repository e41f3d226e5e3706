//! Shared test fixtures and helpers
//!
//! Builders for raw for-each-ref lines and parsed batches.

use reflist::core::services::RefList;

/// Object id used by the upstream reference scenario
pub const SAMPLE_OID: &str = "943d230ba465d86c3ad2cd00f7e8c508d144d9a5";

/// The reference line from a real `git for-each-ref` run
pub const SAMPLE_LINE: &str =
    "1229370351 +0100 943d230ba465d86c3ad2cd00f7e8c508d144d9a5 refs/tags/0.90";

/// Build a 4-column ref line
pub fn line(seconds: i64, object_id: &str, full_path: &str) -> String {
    format!("{seconds} +0000 {object_id} {full_path}")
}

/// Parse a batch of owned lines into a `RefList`
pub fn parse_list(lines: &[String]) -> RefList {
    RefList::parse(lines.iter().map(String::as_str)).expect("valid test lines")
}
