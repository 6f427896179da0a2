use crate::router::handle;
use crate::tests::utils::{body_string, get, request, test_config};
use http::Method;

#[test]
fn results_partial_has_no_page_wrapper() {
    let resp = get("/listings/results?bedrooms=5");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
    assert!(body.starts_with("<div id=\"search-results\""));
    assert!(body.contains("1 listing found"));
    assert!(body.contains("Winery Estates"));
}

#[test]
fn results_partial_keeps_sort() {
    let body = body_string(get("/listings/results?sort=price-high"));
    let high = body.find("$550,000").unwrap();
    let low = body.find("$185,000").unwrap();
    assert!(high < low);
}

#[test]
fn half_baths_render_with_fraction() {
    let body = body_string(get("/listings/results?location=Artesia+at+Hafen+Ranch"));
    assert!(body.contains(">2.5<"));
    assert!(body.contains("Bathrooms"));
}

#[test]
fn non_get_is_rejected() {
    let (config, _dir) = test_config();
    let err = handle(request(Method::POST, "/"), &config).unwrap_err();
    assert_eq!(err.status(), 405);

    let err = handle(request(Method::DELETE, "/listings/results"), &config).unwrap_err();
    assert_eq!(err.status(), 405);
}
