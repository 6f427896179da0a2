use crate::config::Config;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use tempfile::TempDir;

/// Config whose static dir is a fresh temp directory holding `main.css`.
/// The directory is removed when the returned guard drops.
pub fn test_config() -> (Config, TempDir) {
    let dir = tempfile::tempdir().expect("create static dir");
    std::fs::create_dir_all(dir.path().join("images")).expect("create images dir");
    std::fs::write(dir.path().join("main.css"), "body { margin: 0; }").expect("write css");

    let config = Config {
        static_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    (config, dir)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET `uri` through the router, turning errors into their error pages.
pub fn get(uri: &str) -> Response {
    let (config, _dir) = test_config();
    match handle(request(Method::GET, uri), &config) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader().read_to_string(&mut out).unwrap();
    out
}
