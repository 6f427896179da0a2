use crate::router::handle;
use crate::tests::utils::{body_string, get, request, test_config};
use http::Method;

#[test]
fn serves_css_from_static_dir() {
    let resp = get("/static/main.css");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains("margin"));
}

#[test]
fn missing_asset_is_404() {
    let resp = get("/static/images/nope.webp");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    // Directories are not files.
    assert_eq!(get("/static/images").status(), 404);
}

#[test]
fn parent_segments_are_rejected() {
    let (config, _dir) = test_config();
    let err = handle(request(Method::GET, "/static/../Cargo.toml"), &config).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn static_dir_is_removed_with_its_guard() {
    let (config, dir) = test_config();
    let path = config.static_dir.clone();
    assert!(path.join("main.css").is_file());

    drop(dir);
    assert!(!path.exists());
}

#[test]
fn unknown_route_is_404() {
    let resp = get("/admin");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Back to home"));
}

#[test]
fn health_check() {
    let resp = get("/healthz");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
