//! Tests for the for-each-ref line parser

use reflist::core::error::RefListError;
use reflist::core::models::RefKind;
use reflist::core::services::{RefList, parse_line, parse_lines};

use super::common::{SAMPLE_LINE, SAMPLE_OID, line};

// =============================================================================
// COLUMN EXTRACTION
// =============================================================================

#[test]
fn test_object_id_is_third_column() {
    let record = parse_line(SAMPLE_LINE).unwrap();
    assert_eq!(record.object_id, SAMPLE_OID);
}

#[test]
fn test_full_path_is_fourth_column() {
    let record = parse_line(SAMPLE_LINE).unwrap();
    assert_eq!(record.full_path, "refs/tags/0.90");
}

#[test]
fn test_split_is_bounded_at_four_columns() {
    // Everything after the third space belongs to the ref path.
    let record = parse_line("42 +0100 abc refs/tags/with spaces inside").unwrap();
    assert_eq!(record.full_path, "refs/tags/with spaces inside");
}

#[test]
fn test_zone_offset_does_not_shift_the_instant() {
    let plus = parse_line(&line(1_229_370_351, "abc", "refs/tags/a")).unwrap();
    let minus = parse_line("1229370351 -0800 abc refs/tags/a").unwrap();
    assert_eq!(plus.timestamp, minus.timestamp);
    assert_eq!(plus.timestamp.unwrap().timestamp(), 1_229_370_351);
}

// =============================================================================
// MALFORMED INPUT
// =============================================================================

#[test]
fn test_three_columns_is_malformed() {
    let err = parse_line("1229370351 +0100 943d230b").unwrap_err();
    assert!(matches!(err, RefListError::MalformedRefLine { .. }));
}

#[test]
fn test_non_integer_timestamp_is_malformed() {
    let err = parse_line("yesterday +0100 abc refs/heads/main").unwrap_err();
    assert!(matches!(err, RefListError::MalformedRefLine { .. }));
}

#[test]
fn test_bad_line_aborts_the_batch() {
    let lines = [SAMPLE_LINE, "not a ref line"];
    assert!(parse_lines(lines).is_err());
}

#[test]
fn test_empty_batch_is_not_an_error() {
    let records = parse_lines([]).unwrap();
    assert!(records.is_empty());
}

// =============================================================================
// END-TO-END SCENARIO
// =============================================================================

#[test]
fn test_reference_line_produces_one_classified_tag() {
    let list = RefList::parse([SAMPLE_LINE]).unwrap();
    let all = list.all();

    assert_eq!(all.len(), 1);
    let git_ref = &all[0];
    assert_eq!(git_ref.object_id(), SAMPLE_OID);
    assert_eq!(git_ref.full_path(), "refs/tags/0.90");
    assert_eq!(git_ref.kind(), RefKind::Tag);
    assert_eq!(git_ref.friendly_name(), "0.90");
}
