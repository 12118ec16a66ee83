use super::*;

#[test]
fn mixed_case_duplicates_collapse() {
    assert_eq!(parse_tags("Foo, foo , BAR"), vec!["foo", "bar"]);
}

#[test]
fn empty_segments_are_dropped() {
    assert_eq!(parse_tags(" , rust,, ,web "), vec!["rust", "web"]);
}

#[test]
fn empty_input_yields_no_tags() {
    assert!(parse_tags("").is_empty());
    assert!(parse_tags("   ").is_empty());
}

#[test]
fn first_occurrence_order_is_kept() {
    assert_eq!(parse_tags("b, a, B, c, A"), vec!["b", "a", "c"]);
}

#[test]
fn join_round_trips_through_text_input() {
    let tags = parse_tags("Design, UX");
    assert_eq!(join_tags(&tags), "design, ux");
    assert_eq!(parse_tags(&join_tags(&tags)), tags);
}

#[test]
fn normalize_tag_rejects_blank() {
    assert_eq!(normalize_tag("  "), None);
    assert_eq!(normalize_tag(" Go "), Some("go".to_owned()));
}

// =============================================================================
// TagSet (chip input)
// =============================================================================

#[test]
fn chip_add_rejects_duplicates_and_blanks() {
    let mut set = TagSet::default();
    assert!(set.add("Rust"));
    assert!(!set.add("rust "));
    assert!(!set.add(""));
    assert_eq!(set.as_slice(), ["rust"]);
}

#[test]
fn chip_remove_reports_presence() {
    let mut set = TagSet::from_tags(["a", "b"]);
    assert!(set.remove("a"));
    assert!(!set.remove("a"));
    assert_eq!(set.into_vec(), vec!["b"]);
}

#[test]
fn from_tags_normalizes_existing_values() {
    let set = TagSet::from_tags(vec!["News".to_owned(), "news".to_owned(), " ".to_owned()]);
    assert_eq!(set.as_slice(), ["news"]);
    assert!(!set.is_empty());
}
