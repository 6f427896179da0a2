use crate::tests::utils::{body_string, get};
use serde_json::Value;

fn get_json(uri: &str) -> Value {
    let resp = get(uri);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).expect("valid json")
}

#[test]
fn api_returns_filtered_listings_and_options() {
    let json = get_json("/api/listings?max_price=200000");

    assert_eq!(json["count"], 1);
    assert_eq!(json["listings"][0]["location"], "Desert Greens");
    assert_eq!(json["listings"][0]["property_type"], "Manufactured Home");
    assert_eq!(json["locations"].as_array().unwrap().len(), 7);
    assert_eq!(json["property_types"].as_array().unwrap().len(), 4);
}

#[test]
fn api_applies_sort() {
    let json = get_json("/api/listings?sort=price-high");
    let prices: Vec<i64> = json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["price"].as_i64().unwrap())
        .collect();

    assert_eq!(prices.len(), 7);
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn api_newest_keeps_collection_order() {
    let json = get_json("/api/listings?sort=newest");
    assert_eq!(json["listings"][0]["location"], "Calvada Valley");
    assert_eq!(json["listings"][6]["location"], "Comstock Park");
    assert_eq!(json["listings"][5]["bathrooms"], 2.5);
}
