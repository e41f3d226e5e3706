//! Tests for the output projection

use reflist::core::models::RefOrdering;
use reflist::output::RefListing;

use super::common::{line, parse_list};

#[test]
fn test_listing_projects_friendly_names() {
    let list = parse_list(&[
        line(200, "b2", "refs/heads/main"),
        line(100, "a1", "refs/heads/feature/magic"),
    ]);

    let listing = RefListing::from_refs(&list.branches(RefOrdering::ByLastAccessDate));
    let names: Vec<_> = listing.refs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["main", "feature/magic"]);
}

#[test]
fn test_json_shape_has_no_timestamp() {
    let list = parse_list(&[line(100, "a1", "refs/tags/v1")]);
    let listing = RefListing::from_refs(&list.tags(RefOrdering::Alphabetically));

    let json = serde_json::to_value(&listing).unwrap();
    let entry = &json["refs"][0];
    assert_eq!(entry["name"], "v1");
    assert_eq!(entry["full_path"], "refs/tags/v1");
    assert_eq!(entry["object_id"], "a1");
    assert_eq!(entry["kind"], "tag");
    assert!(entry.get("timestamp").is_none());
    assert!(entry.get("date").is_none());
}

#[test]
fn test_empty_listing_serializes_to_empty_array() {
    let listing = RefListing::from_refs(&[]);
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["refs"].as_array().unwrap().len(), 0);
}
