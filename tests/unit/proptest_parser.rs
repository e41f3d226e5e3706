//! Property-based tests for the parser and ordering engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use reflist::core::models::RefOrdering;
use reflist::core::services::{RefList, parse_line};

proptest! {
    /// Columns 3 and 4 survive a parse unmodified, including spaces in the
    /// ref path
    #[test]
    fn round_trips_object_id_and_path(
        seconds in 0i64..4_000_000_000,
        object_id in "[0-9a-f]{40}",
        full_path in "refs/[a-z]{1,8}/[a-z0-9 ./-]{1,20}"
    ) {
        let line = format!("{seconds} +0100 {object_id} {full_path}");
        let record = parse_line(&line).unwrap();
        prop_assert_eq!(record.object_id, object_id);
        prop_assert_eq!(record.full_path, full_path);
        prop_assert_eq!(record.timestamp.unwrap().timestamp(), seconds);
    }

    /// Classification never panics, whatever the path looks like
    #[test]
    fn classification_is_total(full_path in "[^\n ]{0,30}") {
        let line = format!("1 +0000 abcdef {full_path}");
        if let Ok(record) = parse_line(&line) {
            let list = RefList::new(vec![record]);
            prop_assert_eq!(list.all().len(), 1);
        }
    }

    /// Alphabetical ordering is idempotent: sorting a sorted batch again
    /// yields the same sequence
    #[test]
    fn alphabetical_is_idempotent(paths in prop::collection::vec("refs/heads/[a-z]{1,8}", 0..12)) {
        let lines: Vec<String> = paths
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{i} +0000 oid{i} {p}"))
            .collect();
        let list = RefList::parse(lines.iter().map(String::as_str)).unwrap();

        let once: Vec<String> = list
            .branches(RefOrdering::Alphabetically)
            .iter()
            .map(|r| r.full_path().to_string())
            .collect();

        let relines: Vec<String> = once
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{i} +0000 oid{i} {p}"))
            .collect();
        let relist = RefList::parse(relines.iter().map(String::as_str)).unwrap();
        let twice: Vec<String> = relist
            .branches(RefOrdering::Alphabetically)
            .iter()
            .map(|r| r.full_path().to_string())
            .collect();

        prop_assert_eq!(once, twice);
    }

    /// Date ordering never drops or invents refs
    #[test]
    fn date_ordering_is_a_permutation(
        seconds in prop::collection::vec(0i64..2_000_000_000, 0..12)
    ) {
        let lines: Vec<String> = seconds
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{s} +0000 oid{i} refs/tags/t{i}"))
            .collect();
        let list = RefList::parse(lines.iter().map(String::as_str)).unwrap();

        let sorted = list.tags(RefOrdering::ByLastAccessDate);
        prop_assert_eq!(sorted.len(), seconds.len());

        let mut names: Vec<String> =
            sorted.iter().map(|r| r.full_path().to_string()).collect();
        names.sort();
        let mut expected: Vec<String> =
            (0..seconds.len()).map(|i| format!("refs/tags/t{i}")).collect();
        expected.sort();
        prop_assert_eq!(names, expected);
    }
}
