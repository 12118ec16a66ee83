use super::*;

const PROTECTED: [&str; 8] = [
    "/",
    "/dashboard",
    "/blogs",
    "/blogs/abc123/edit",
    "/case-studies/create",
    "/teams",
    "/users/u1/edit",
    "/settings",
];

#[test]
fn anonymous_requests_to_protected_paths_go_to_login() {
    for path in PROTECTED {
        assert_eq!(evaluate(path, false), GuardDecision::Redirect(LOGIN_PATH), "{path}");
    }
}

#[test]
fn signed_in_requests_to_protected_paths_pass() {
    for path in PROTECTED {
        assert_eq!(evaluate(path, true), GuardDecision::Allow, "{path}");
    }
}

#[test]
fn signed_in_requests_to_public_paths_go_to_dashboard() {
    for path in PUBLIC_PATHS {
        assert_eq!(evaluate(path, true), GuardDecision::Redirect(DASHBOARD_PATH), "{path}");
    }
}

#[test]
fn anonymous_requests_to_public_paths_pass() {
    for path in PUBLIC_PATHS {
        assert_eq!(evaluate(path, false), GuardDecision::Allow, "{path}");
    }
}

#[test]
fn public_match_is_by_prefix() {
    assert!(is_public_path("/login"));
    assert!(is_public_path("/login/reset"));
    assert!(is_public_path("/register?invite=1"));
    assert!(!is_public_path("/blogs/login"));
    assert!(!is_public_path("/"));
}
