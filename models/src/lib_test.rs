use super::*;

fn blog_json(published_at: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "_id": "b1",
        "title": "Hello",
        "slug": "hello",
        "content": "<p>hi</p>",
        "tags": ["news"],
        "status": "published",
        "author": { "_id": "u1", "name": "Ada" },
        "seo": { "metaTitle": "Hello" },
        "readingTime": 2,
        "publishedAt": published_at,
        "createdAt": "2024-05-01T08:00:00.000Z",
        "updatedAt": "2024-05-01T08:00:00.000Z"
    })
}

#[test]
fn blog_passes_through_server_publish_timestamp() {
    let blog: Blog = serde_json::from_value(blog_json(serde_json::json!("2024-05-01T09:30:00.000Z"))).unwrap();
    let published = blog.published_at.unwrap();
    assert_eq!(published.hour(), 9);
    assert_eq!(published.minute(), 30);
}

#[test]
fn blog_null_publish_timestamp_is_none() {
    let blog: Blog = serde_json::from_value(blog_json(serde_json::Value::Null)).unwrap();
    assert_eq!(blog.published_at, None);
    assert_eq!(blog.author.name, "Ada");
    assert_eq!(blog.seo.meta_title.as_deref(), Some("Hello"));
}

#[test]
fn blog_tolerates_missing_optional_blocks() {
    let mut json = blog_json(serde_json::Value::Null);
    let obj = json.as_object_mut().unwrap();
    obj.remove("seo");
    obj.remove("author");
    obj.remove("readingTime");
    obj.remove("publishedAt");
    let blog: Blog = serde_json::from_value(json).unwrap();
    assert!(blog.seo.is_empty());
    assert_eq!(blog.reading_time, 0);
}

#[test]
fn create_blog_omits_unset_optionals() {
    let body = CreateBlog {
        title: "T".into(),
        content: "C".into(),
        status: Some(EntityStatus::Published),
        ..CreateBlog::default()
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "title": "T", "content": "C", "status": "published" })
    );
}

#[test]
fn case_study_payload_sends_explicit_publish_time() {
    let at = time::macros::datetime!(2024-02-03 04:05:06 UTC);
    let body = UpdateCaseStudy { published_at: Some(at), ..UpdateCaseStudy::default() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "publishedAt": "2024-02-03T04:05:06Z" }));
}

#[test]
fn team_parses_socials_and_order() {
    let team: Team = serde_json::from_value(serde_json::json!({
        "_id": "t1",
        "name": "Jane",
        "slug": "jane",
        "role": "CTO",
        "socials": [{ "platform": "github", "url": "https://github.com/jane" }],
        "displayOrder": 3,
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(team.display_order, 3);
    assert_eq!(team.socials[0].platform, "github");
}

#[test]
fn reorder_body_uses_ordered_ids() {
    let body = ReorderTeams { ordered_ids: vec!["b".into(), "a".into()] };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "orderedIds": ["b", "a"] }));
}

#[test]
fn seo_is_empty_only_without_fields() {
    assert!(Seo::default().is_empty());
    let seo = Seo { meta_keywords: Some(vec!["a".into()]), ..Seo::default() };
    assert!(!seo.is_empty());
}

#[test]
fn login_credentials_debug_hides_password() {
    let creds = LoginCredentials { email: "a@b.c".into(), password: "hunter2".into() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@b.c"));
    assert!(!debug.contains("hunter2"));
}
