use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use serde_json::Value;

fn fetch_json(uri: &str) -> Value {
    let state = test_state();
    let resp = handle(get(uri), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(resp)).expect("response is not JSON")
}

fn titles(json: &Value) -> Vec<String> {
    json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_owned())
        .collect()
}

#[test]
fn unfiltered_listing_shows_all_six() {
    let state = test_state();
    let body = body_string(handle(get("/listings"), &state).unwrap());

    assert!(body.contains("6 Properties Found"));
    assert!(body.contains("Filters Applied: 0"));
    assert!(!body.contains("Load More Properties"));
    assert!(body.contains("Explore Properties by Region"));
    assert!(body.contains(r#"href="/listings?region=Bandung""#));
}

#[test]
fn region_filter_is_a_substring_match() {
    let json = fetch_json("/api/listings?region=Bali");

    assert_eq!(json["total"], 3);
    assert_eq!(json["filters_applied"], 1);
    assert_eq!(
        titles(&json),
        ["Modern Villa with Pool", "Beachfront Residence", "Luxury Hillside Villa"]
    );
    // Indices are positions in the filtered list.
    let indices: Vec<u64> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, [0, 1, 2]);
}

#[test]
fn region_filter_is_case_sensitive() {
    let json = fetch_json("/api/listings?region=bali");
    assert_eq!(json["total"], 0);
}

#[test]
fn price_bracket_filters_by_billions() {
    let json = fetch_json("/api/listings?price=Rp+5-10+Billion");
    assert_eq!(
        titles(&json),
        ["Modern Villa with Pool", "Beachfront Residence", "Luxury Hillside Villa"]
    );

    let json = fetch_json("/api/listings?price=Above+Rp+10+Billion");
    assert_eq!(titles(&json), ["Modern Office Space"]);

    let json = fetch_json("/api/listings?price=Under+Rp+1+Billion");
    assert_eq!(json["total"], 0);
}

#[test]
fn unknown_price_label_is_ignored() {
    let json = fetch_json("/api/listings?price=cheap");
    assert_eq!(json["total"], 6);
    assert_eq!(json["filters_applied"], 0);
}

#[test]
fn search_matches_title_or_location_ignoring_case() {
    let json = fetch_json("/api/listings?q=JAKARTA");
    assert_eq!(titles(&json), ["Luxury Apartment", "Modern Office Space"]);

    let json = fetch_json("/api/listings?q=villa&type=Villa&region=Bali");
    assert_eq!(json["total"], 2);
    assert_eq!(json["filters_applied"], 3);
}

#[test]
fn reveal_threshold_is_carried_and_floored() {
    let json = fetch_json("/api/listings?show=3");
    assert_eq!(json["show"], 6);

    let json = fetch_json("/api/listings?show=18&region=Jakarta");
    assert_eq!(json["show"], 18);
    assert_eq!(json["total"], 2);
}

#[test]
fn empty_result_shows_the_empty_state() {
    let state = test_state();
    let resp = handle(get("/listings?region=Yogyakarta&show=12"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("0 Properties Found"));
    assert!(body.contains("No Properties Found"));
    assert!(body.contains("Reset Filters"));
    assert!(body.contains(r#"href="/listings?show=12""#));
}

#[test]
fn filter_form_keeps_current_values() {
    let state = test_state();
    let body = body_string(handle(get("/listings?type=Office&q=scbd&show=12"), &state).unwrap());

    assert!(body.contains(r#"<option value="Office" selected>Office</option>"#));
    assert!(body.contains(r#"name="q" value="scbd""#));
    assert!(body.contains(r#"name="show" value="12""#));
    assert!(body.contains("1 Properties Found"));
}

#[test]
fn results_partial_is_not_a_full_page() {
    let state = test_state();
    let resp = handle(get("/listings/results?region=Jakarta"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains(r#"id="listing-results""#));
    assert!(body.contains("2 Properties Found"));
    assert!(body.contains("Filters Applied: 1"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}
