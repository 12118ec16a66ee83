use super::*;
use serde_json::json;

/// `n` characters, each two bytes wide, so byte length never passes for
/// character count.
fn chars(n: usize) -> String {
    "é".repeat(n)
}

fn blog() -> Blog {
    serde_json::from_value(json!({
        "_id": "b1",
        "title": "Hello",
        "slug": "hello",
        "content": "<p>hi</p>",
        "tags": ["rust", "web"],
        "status": "published",
        "seo": { "metaTitle": "Hello", "metaKeywords": ["a", "b"] },
        "createdAt": "2024-05-01T08:00:00Z",
        "updatedAt": "2024-05-01T08:00:00Z"
    }))
    .unwrap()
}

// =============================================================================
// BLOG POSTS
// =============================================================================

#[test]
fn blog_hydrate_joins_tags_for_editing() {
    let fields = BlogFields::hydrate(&blog());
    assert_eq!(fields.tags_input, "rust, web");
    assert_eq!(fields.meta_keywords_input, "a, b");
    assert_eq!(fields.meta_title, "Hello");
    assert_eq!(fields.excerpt, "");
}

#[test]
fn blog_payload_normalizes_tags_and_drops_blank_optionals() {
    let fields = BlogFields {
        title: "T".into(),
        content: "C".into(),
        excerpt: "   ".into(),
        tags_input: "Foo, foo , BAR,,".into(),
        meta_keywords_input: " ".into(),
        ..BlogFields::default()
    };
    let payload = serde_json::to_value(fields.create_payload()).unwrap();
    assert_eq!(
        payload,
        json!({ "title": "T", "content": "C", "tags": ["foo", "bar"], "status": "draft", "seo": {} })
    );
}

#[test]
fn blog_requires_title_and_content() {
    let errors = BlogFields::default().validate(false);
    assert_eq!(errors, vec!["Title is required", "Content is required"]);
}

#[test]
fn blog_length_limits_allow_exact_max() {
    let mut fields = BlogFields { title: "T".into(), content: "C".into(), ..BlogFields::default() };
    fields.excerpt = chars(300);
    fields.meta_title = chars(70);
    fields.meta_description = chars(160);
    assert!(fields.validate(false).is_empty());
}

#[test]
fn blog_length_limits_reject_one_over() {
    let mut fields = BlogFields { title: "T".into(), content: "C".into(), ..BlogFields::default() };
    fields.excerpt = chars(301);
    fields.meta_title = chars(71);
    fields.meta_description = chars(161);
    assert_eq!(
        fields.validate(true),
        vec![
            "Excerpt must be at most 300 characters",
            "Meta title must be at most 70 characters",
            "Meta description must be at most 160 characters",
        ]
    );
}

#[test]
fn blog_status_warning_only_for_off_path_moves() {
    let mut fields = BlogFields::hydrate(&blog());
    fields.status = EntityStatus::Archived;
    assert!(fields.status_warning().is_none());

    let mut draft = blog();
    draft.status = EntityStatus::Draft;
    let mut fields = BlogFields::hydrate(&draft);
    fields.status = EntityStatus::Archived;
    assert!(fields.status_warning().unwrap().contains("draft to archived"));

    assert!(BlogFields::default().status_warning().is_none());
}

// =============================================================================
// CASE STUDIES
// =============================================================================

#[test]
fn case_study_local_time_input_is_sent_as_utc() {
    let fields = CaseStudyFields {
        title: "T".into(),
        description: "D".into(),
        published_at_input: "2024-02-03T04:05".into(),
        ..CaseStudyFields::default()
    };
    assert!(fields.validate(false).is_empty());
    let payload = serde_json::to_value(fields.update_payload()).unwrap();
    assert_eq!(payload["publishedAt"], "2024-02-03T04:05:00Z");
}

#[test]
fn case_study_blank_publish_time_is_omitted() {
    let fields = CaseStudyFields { title: "T".into(), description: "D".into(), ..CaseStudyFields::default() };
    let payload = serde_json::to_value(fields.create_payload()).unwrap();
    assert!(payload.get("publishedAt").is_none());
}

#[test]
fn case_study_rejects_garbage_publish_time() {
    let fields = CaseStudyFields {
        title: "T".into(),
        description: "D".into(),
        published_at_input: "next tuesday".into(),
        ..CaseStudyFields::default()
    };
    assert_eq!(fields.validate(true).len(), 1);
}

#[test]
fn case_study_length_limits_allow_exact_max() {
    let mut fields = CaseStudyFields { description: "D".into(), ..CaseStudyFields::default() };
    fields.title = chars(200);
    fields.excerpt = chars(300);
    fields.meta_title = chars(70);
    fields.meta_description = chars(160);
    assert!(fields.validate(false).is_empty());
}

#[test]
fn case_study_length_limits_reject_one_over() {
    let mut fields = CaseStudyFields { description: "D".into(), ..CaseStudyFields::default() };
    fields.title = chars(201);
    fields.excerpt = chars(301);
    fields.meta_title = chars(71);
    fields.meta_description = chars(161);
    assert_eq!(
        fields.validate(false),
        vec![
            "Title must be at most 200 characters",
            "Excerpt must be at most 300 characters",
            "Meta title must be at most 70 characters",
            "Meta description must be at most 160 characters",
        ]
    );
}

#[test]
fn case_study_hydrate_formats_publish_time() {
    let cs: CaseStudy = serde_json::from_value(json!({
        "_id": "c1",
        "title": "T",
        "slug": "t",
        "description": "D",
        "status": "published",
        "publishedAt": "2024-02-03T04:05:06.789Z",
        "createdAt": "2024-02-01T00:00:00Z",
        "updatedAt": "2024-02-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(CaseStudyFields::hydrate(&cs).published_at_input, "2024-02-03T04:05");
}

// =============================================================================
// TEAM MEMBERS
// =============================================================================

#[test]
fn team_defaults_to_active() {
    assert!(TeamFields::default().is_active);
}

#[test]
fn team_social_rows_default_to_website_and_blank_urls_drop() {
    let mut fields = TeamFields { name: "Jane".into(), role: "CTO".into(), ..TeamFields::default() };
    fields.add_social();
    fields.add_social();
    fields.update_social(0, Some("github"), Some("https://github.com/jane"));
    assert_eq!(fields.socials[1].platform, "website");

    let payload = fields.create_payload();
    assert_eq!(
        payload.socials,
        Some(vec![TeamSocial { platform: "github".into(), url: "https://github.com/jane".into() }])
    );
    assert_eq!(payload.is_active, Some(true));
}

#[test]
fn team_length_limits() {
    let mut fields = TeamFields { name: chars(100), role: chars(100), bio: chars(1000), ..TeamFields::default() };
    assert!(fields.validate(false).is_empty());

    fields.name = chars(101);
    fields.role = chars(101);
    fields.bio = chars(1001);
    assert_eq!(
        fields.validate(true),
        vec![
            "Name must be at most 100 characters",
            "Role must be at most 100 characters",
            "Bio must be at most 1000 characters",
        ]
    );
}

#[test]
fn team_social_edits_ignore_bad_index() {
    let mut fields = TeamFields::default();
    fields.add_social();
    fields.update_social(5, None, Some("x"));
    fields.remove_social(5);
    assert_eq!(fields.socials.len(), 1);
    fields.remove_social(0);
    assert!(fields.socials.is_empty());
}

// =============================================================================
// USERS
// =============================================================================

#[test]
fn user_edit_sends_password_only_when_typed() {
    let mut fields = UserFields { name: "Ada".into(), email: "ada@example.com".into(), ..UserFields::default() };
    let payload = serde_json::to_value(fields.update_payload()).unwrap();
    assert!(payload.get("password").is_none());

    fields.password = "n3w-Secret!".into();
    let payload = serde_json::to_value(fields.update_payload()).unwrap();
    assert_eq!(payload["password"], "n3w-Secret!");
}

#[test]
fn user_password_required_only_on_create() {
    let fields = UserFields { name: "Ada".into(), email: "ada@example.com".into(), ..UserFields::default() };
    assert_eq!(fields.validate(false), vec!["Password is required"]);
    assert!(fields.validate(true).is_empty());
}

#[test]
fn user_save_fallback_depends_on_mode() {
    assert_eq!(UserFields::save_failed(false), "Failed to create user");
    assert_eq!(UserFields::save_failed(true), "Failed to update user");
}
