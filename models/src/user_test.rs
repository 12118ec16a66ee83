use super::*;

fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "name": "Ada",
        "email": "ada@example.com",
        "role": "editor",
        "isActive": true,
        "createdAt": "2024-03-01T10:00:00.000Z",
        "updatedAt": "2024-03-02T10:00:00Z"
    })
}

#[test]
fn profile_parses_backend_shape() {
    let user: UserProfile = serde_json::from_value(profile_json()).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Editor);
    assert!(user.is_active);
    assert_eq!(user.avatar, None);
    assert_eq!(user.created_at.year(), 2024);
}

#[test]
fn missing_role_defaults_to_viewer() {
    let mut json = profile_json();
    json.as_object_mut().unwrap().remove("role");
    let user: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(user.role, Role::Viewer);
}

#[test]
fn missing_active_flag_defaults_to_true() {
    let mut json = profile_json();
    json.as_object_mut().unwrap().remove("isActive");
    let user: UserProfile = serde_json::from_value(json).unwrap();
    assert!(user.is_active);
}

#[test]
fn role_parses_from_cli_text() {
    assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
    assert!("owner".parse::<Role>().is_err());
}

#[test]
fn update_user_omits_unset_fields() {
    let body = UpdateUser { password: Some("secret1".into()), ..UpdateUser::default() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "password": "secret1" }));
}

#[test]
fn create_user_uses_camel_case() {
    let body = CreateUser {
        name: "Bo".into(),
        email: "bo@example.com".into(),
        password: "hunter22".into(),
        role: Some(Role::Author),
        is_active: Some(false),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["isActive"], serde_json::json!(false));
    assert_eq!(json["role"], serde_json::json!("author"));
}
