use super::*;

use axum::body::Body;
use axum::http::{Request, header};
use tower::util::ServiceExt;

fn fixture_dirs(name: &str) -> (PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(format!("industryhub-routes-{name}-{}", std::process::id()));
    let pkg = root.join("pkg");
    let site = root.join("site");
    std::fs::create_dir_all(&pkg).unwrap();
    std::fs::create_dir_all(site.join("widget")).unwrap();
    std::fs::write(pkg.join("industryhub.js"), "export default function init() {}").unwrap();
    std::fs::write(site.join("widget").join("chat-widget.js"), "// loader").unwrap();
    (pkg, site)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (pkg, site) = fixture_dirs("healthz");
    let response = static_routes(&pkg, &site)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn bundle_is_served_with_cors() {
    let (pkg, site) = fixture_dirs("pkg");
    let response = static_routes(&pkg, &site)
        .oneshot(
            Request::builder()
                .uri("/pkg/industryhub.js")
                .header(header::ORIGIN, "https://erp.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}

#[tokio::test]
async fn site_files_are_served_from_fallback() {
    let (pkg, site) = fixture_dirs("site");
    let response = static_routes(&pkg, &site)
        .oneshot(Request::builder().uri("/widget/chat-widget.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let (pkg, site) = fixture_dirs("missing");
    let response = static_routes(&pkg, &site)
        .oneshot(Request::builder().uri("/industries/unknown.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn shipped_site_serves_every_picker_destination() {
    use ui::state::auth::LOGIN_URL;
    use ui::state::industry::{INDUSTRIES, destination};

    let site = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site");
    let router = static_routes(&site.join("pkg"), &site);

    let mut targets: Vec<&str> = INDUSTRIES.iter().filter_map(|industry| destination(industry.id)).collect();
    assert_eq!(targets.len(), INDUSTRIES.len());
    targets.push(LOGIN_URL);
    targets.push("../widget/erp-chat-integration.js");
    targets.push("../widget/chat-widget.js");

    for target in targets {
        let uri = target.trim_start_matches("..");
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}
