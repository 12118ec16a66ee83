use super::*;

#[test]
fn by_id_appends_segment() {
    assert_eq!(by_id(BLOGS, "b1"), "/blogs/b1");
    assert_eq!(by_id(USERS, "u9"), "/users/u9");
}

#[test]
fn by_id_keeps_id_inside_one_segment() {
    assert_eq!(by_id(BLOGS, "../users"), "/blogs/..%2Fusers");
    assert_eq!(by_id(TEAMS, "t1?limit=100"), "/teams/t1%3Flimit%3D100");
    assert_eq!(by_id(USERS, "u1#frag"), "/users/u1%23frag");
}

#[test]
fn tags_path_for_content_collections() {
    assert_eq!(tags(BLOGS), "/blogs/tags");
    assert_eq!(tags(CASE_STUDIES), "/case-studies/tags");
}
