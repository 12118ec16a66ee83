use super::*;

#[test]
fn serializes_lowercase() {
    assert_eq!(serde_json::to_value(EntityStatus::Published).unwrap(), serde_json::json!("published"));
    let parsed: EntityStatus = serde_json::from_str("\"archived\"").unwrap();
    assert_eq!(parsed, EntityStatus::Archived);
}

#[test]
fn default_is_draft() {
    assert_eq!(EntityStatus::default(), EntityStatus::Draft);
}

#[test]
fn from_str_is_case_insensitive_and_trimmed() {
    assert_eq!(" Published ".parse::<EntityStatus>().unwrap(), EntityStatus::Published);
    assert_eq!("DRAFT".parse::<EntityStatus>().unwrap(), EntityStatus::Draft);
}

#[test]
fn from_str_rejects_unknown() {
    let err = "deleted".parse::<EntityStatus>().unwrap_err();
    assert_eq!(err, ParseStatusError("deleted".to_owned()));
    assert!(err.to_string().contains("deleted"));
}

// =============================================================================
// lifecycle
// =============================================================================

#[test]
fn forward_path_is_documented() {
    assert!(EntityStatus::Draft.is_documented_transition(EntityStatus::Published));
    assert!(EntityStatus::Published.is_documented_transition(EntityStatus::Archived));
}

#[test]
fn fallbacks_to_draft_are_documented() {
    assert!(EntityStatus::Published.is_documented_transition(EntityStatus::Draft));
    assert!(EntityStatus::Archived.is_documented_transition(EntityStatus::Draft));
}

#[test]
fn skipping_stages_is_not_documented() {
    assert!(!EntityStatus::Draft.is_documented_transition(EntityStatus::Archived));
    assert!(!EntityStatus::Archived.is_documented_transition(EntityStatus::Published));
}

#[test]
fn staying_put_is_documented() {
    for status in [EntityStatus::Draft, EntityStatus::Published, EntityStatus::Archived] {
        assert!(status.is_documented_transition(status), "{status}");
    }
}
