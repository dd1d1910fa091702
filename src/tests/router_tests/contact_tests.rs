use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state};

const COMPLETE: &str =
    "name=Budi+Santoso&email=budi%40example.com&phone=%2B62+812+0000+0000&message=Villa+in+Ubud";

#[test]
fn htmx_submission_returns_the_sent_panel() {
    let state = test_state();
    let resp = handle(post_form("/contact", COMPLETE, true), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Message Sent!"));
    assert!(body.contains(r#"hx-get="/contact/form""#));
    assert!(body.contains(r#"hx-trigger="load delay:5000ms""#));
    assert!(!body.contains("<html"));
}

#[test]
fn plain_submission_returns_the_full_page() {
    let state = test_state();
    let resp = handle(post_form("/contact", COMPLETE, false), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("Send another message"));
    assert!(!body.contains("Budi Santoso"));
}

#[test]
fn idle_contact_page_has_no_resend_link() {
    let state = test_state();
    let resp = handle(get("/contact"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Send Message"));
    assert!(!body.contains("Send another message"));
}

#[test]
fn missing_fields_are_rejected_with_400() {
    let state = test_state();
    let resp = handle(post_form("/contact", "name=Budi&email=&phone=&message=", false), &state).unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("<li>Email Address</li>"));
    assert!(body.contains("<li>Phone Number</li>"));
    assert!(body.contains("<li>Message</li>"));
    assert!(body.contains(r#"value="Budi""#));
    assert!(!body.contains("Message Sent!"));
}

#[test]
fn htmx_validation_errors_swap_in_place() {
    let state = test_state();
    let resp = handle(post_form("/contact", "name=+&email=a%40b.c&phone=1&message=hi", true), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<li>Full Name</li>"));
    assert!(body.contains(r#"id="contact-panel""#));
    assert!(!body.contains("<html"));
}

#[test]
fn form_partial_returns_an_empty_form() {
    let state = test_state();
    let body = body_string(handle(get("/contact/form"), &state).unwrap());

    assert!(body.contains("<form"));
    assert!(body.contains("Send Message"));
    assert!(!body.contains("Message Sent!"));
}

#[test]
fn oversized_bodies_are_refused() {
    let state = test_state();
    let huge = format!("message={}", "a".repeat(20 * 1024));

    assert!(matches!(
        handle(post_form("/contact", &huge, true), &state),
        Err(ServerError::PayloadTooLarge)
    ));
}
