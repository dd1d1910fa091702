use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_loads_successfully() {
    let state = test_state();
    let resp = handle(get("/"), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Your Gateway to Smarter Real Estate"));
    assert!(body.contains("Explore Properties"));
    assert!(body.contains("Why Choose Angkasa Jaya"));
    // Featured set is the first four listings only.
    assert!(body.contains("Modern Office Space"));
    assert!(!body.contains("Modern Family Home"));
    assert!(body.contains("Nusa Tenggara"));
}

#[test]
fn every_view_renders() {
    let state = test_state();
    let cases = [
        ("/services", "Our Services"),
        ("/services/property-sales", "Property Sales Services"),
        ("/services/rentals", "Property Rental Services"),
        ("/services/property-management", "How We Work"),
        ("/services/marketing", "How We Work"),
        ("/services/investment-consulting", "How We Work"),
        ("/services/legal-support", "Frequently Asked Questions"),
        ("/listings", "Property Listings"),
        ("/about", "Our Story"),
        ("/contact", "Get In Touch"),
    ];

    for (path, expected) in cases {
        let resp = handle(get(path), &state).expect("Failed to handle request");
        assert_eq!(resp.status(), 200, "{path}");
        let body = body_string(resp);
        assert!(body.contains(expected), "{path} is missing {expected:?}");
    }
}

#[test]
fn nav_highlights_the_current_page_only() {
    let state = test_state();

    let body = body_string(handle(get("/about"), &state).unwrap());
    assert!(body.contains("nav-link active"));

    // Service detail pages are not nav links, so nothing is highlighted.
    let body = body_string(handle(get("/services/rentals"), &state).unwrap());
    assert!(!body.contains("nav-link active"));
}

#[test]
fn unknown_paths_show_under_construction() {
    let state = test_state();

    for path in ["/privacy", "/terms", "/sitemap", "/listings/", "/nope"] {
        let resp = handle(get(path), &state).expect("Failed to handle request");
        assert_eq!(resp.status(), 404, "{path}");
        let body = body_string(resp);
        assert!(body.contains("Page Under Construction"));
        assert!(!body.contains("nav-link active"));
    }
}

#[test]
fn footer_carries_the_current_year() {
    use chrono::Datelike;

    let state = test_state();
    let body = body_string(handle(get("/"), &state).unwrap());
    let year = chrono::Utc::now().year();

    assert!(body.contains(&format!("© {year} Angkasa Jaya Propertindo. All rights reserved.")));
}

#[test]
fn wrong_method_on_a_view_is_rejected() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/about")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::MethodNotAllowed)));

    let req = Request::builder()
        .method(Method::POST)
        .uri("/nowhere")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn stylesheet_and_health_are_served() {
    let state = test_state();

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );

    let resp = handle(get("/healthz"), &state).unwrap();
    assert_eq!(body_string(resp), "ok");
}
