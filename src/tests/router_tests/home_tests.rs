use crate::tests::utils::{body_string, get};
use time::OffsetDateTime;

#[test]
fn home_page_renders_every_section() {
    let resp = get("/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    for id in [
        "home",
        "profile",
        "why-choose-us",
        "listings",
        "gallery",
        "emblems",
        "services",
        "contact",
        "map",
    ] {
        assert!(
            body.contains(&format!("id=\"{id}\"")),
            "missing section #{id}"
        );
    }
    assert!(body.contains("Pahrump Realtor"));
    assert!(body.contains("google.com/maps/embed"));
    assert!(body.contains(&format!("© {}", OffsetDateTime::now_utc().year())));
}

#[test]
fn results_hidden_until_search() {
    let body = body_string(get("/?bedrooms=3"));
    assert!(!body.contains("Search Results"));
    assert!(body.contains("id=\"search-results\""));
}

#[test]
fn selectors_list_distinct_values() {
    let body = body_string(get("/"));
    assert!(body.contains("All Locations"));
    assert!(body.contains("All Types"));
    assert_eq!(body.matches("<option value=\"Townhome\"").count(), 1);
    assert_eq!(
        body.matches("<option value=\"Single Family Home\"").count(),
        1
    );
    assert!(body.contains("<option value=\"Winery Estates\""));
}

#[test]
fn chosen_filters_are_preselected() {
    let body = body_string(get("/?location=Desert+Greens&max_price=250000"));
    assert!(body.contains("value=\"Desert Greens\" selected"));
    assert!(body.contains("value=\"250000\""));
}

#[test]
fn three_bedrooms_under_400k() {
    let body = body_string(get("/?bedrooms=3&max_price=400000&searched=1"));

    assert!(body.contains("Search Results"));
    assert!(body.contains("3 listings found"));
    assert!(body.contains("$295,000"));
    assert!(body.contains("$325,000"));
    assert!(body.contains("$375,000"));
    assert!(!body.contains("$425,000"));
    assert!(!body.contains("$550,000"));

    // Default sort is price low to high.
    let a = body.find("$295,000").unwrap();
    let b = body.find("$325,000").unwrap();
    let c = body.find("$375,000").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn most_bedrooms_first() {
    let body = body_string(get("/?sort=bedrooms&searched=1"));
    assert!(body.contains("7 listings found"));
    assert!(body.contains("Showing all listings"));

    let winery = body.find("$550,000").unwrap();
    let charleston = body.find("$425,000").unwrap();
    let calvada = body.find("$325,000").unwrap();
    let desert = body.find("$185,000").unwrap();
    assert!(winery < charleston && charleston < calvada && calvada < desert);
    assert!(body.contains("value=\"bedrooms\" selected"));
}

#[test]
fn nothing_over_a_million() {
    let body = body_string(get("/?min_price=1000000&searched=1"));
    assert!(body.contains("0 listings found"));
    assert!(body.contains("No listings found"));
    assert!(body.contains("Try adjusting your search filters"));
    assert!(!body.contains("Sort by:"));
}

#[test]
fn single_result_uses_singular_noun() {
    let body = body_string(get("/?type=Townhome&searched=1"));
    assert!(body.contains("1 listing found"));
    assert!(body.contains("$210,000"));
}

#[test]
fn garbage_numbers_do_not_filter() {
    let body = body_string(get("/?bedrooms=abc&min_price=&searched=1"));
    assert!(body.contains("7 listings found"));
}

#[test]
fn clear_link_drops_filters() {
    let body = body_string(get("/?bedrooms=3&searched=1"));
    assert!(body.contains("href=\"/#listings\""));

    let sorted = body_string(get("/?bedrooms=3&sort=price-high&searched=1"));
    assert!(sorted.contains("href=\"/?sort=price-high#listings\""));
}

#[test]
fn carousel_follows_query() {
    let first = body_string(get("/"));
    assert!(first.contains("marketing1.webp"));
    assert!(!first.contains("marketing2.webp"));

    let second = body_string(get("/?why=1"));
    assert!(second.contains("marketing2.webp"));
    assert!(second.contains("href=\"/?why=2#why-choose-us\""));
    assert!(second.contains("href=\"/#why-choose-us\""));
}

#[test]
fn lightbox_opens_for_gallery_image() {
    let closed = body_string(get("/"));
    assert!(!closed.contains("Expanded gallery image"));
    assert!(closed.contains("href=\"/?image=2#gallery\""));

    let open = body_string(get("/?image=2"));
    assert!(open.contains("Expanded gallery image"));
    assert!(open.contains("Close expanded image"));
    assert!(open.contains("href=\"/#gallery\""));
}
