use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let router = service_routes(Path::new("target/site"));
    let response = router.oneshot(request("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let router = service_routes(Path::new("does/not/exist"));
    let response = router.oneshot(request("/pkg/repo-analyzer.wasm")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_service_path_is_not_found() {
    let router = service_routes(Path::new("target/site"));
    let response = router.oneshot(request("/api/v1.0.0/auth/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn stylesheet_is_wired_into_the_site_build() {
    let manifest = include_str!("../Cargo.toml");
    assert!(manifest.contains(r#"style-file = "style/main.css""#));
    let css = include_str!("../style/main.css");
    assert!(css.contains(".navbar__link--active"));
    assert!(css.contains(".notice--error"));
}
