use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>console</html>").unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.css"), "body{}").unwrap();
    dir
}

fn router(dir: &tempfile::TempDir) -> Router {
    app(&EdgeConfig { port: 0, site_dir: dir.path().to_path_buf() })
}

async fn get_path(router: Router, path: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut request = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_bypasses_guard() {
    let dir = site();
    let response = get_path(router(&dir), "/healthz", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn assets_bypass_guard() {
    let dir = site();
    let response = get_path(router(&dir), "/assets/app.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "body{}");
}

#[tokio::test]
async fn console_route_requires_cookie() {
    let dir = site();
    let response = get_path(router(&dir), "/teams", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap().to_str().unwrap(), "/login");
}

#[tokio::test]
async fn console_route_with_cookie_serves_index() {
    let dir = site();
    let response = get_path(router(&dir), "/blogs/abc/edit", Some("auth-token=tok")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<html>console</html>");
}

#[tokio::test]
async fn login_page_served_to_anonymous_visitor() {
    let dir = site();
    let response = get_path(router(&dir), "/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<html>console</html>");
}
