// templates/pages/contact.rs

use crate::content::company::{
    BUSINESS_HOURS, EMAIL, HQ_ADDRESS_LINES, MAP_EMBED_URI, OFFICES, PHONE_DISPLAY, PHONE_URI,
    WHATSAPP_CHAT_URI, WHATSAPP_DISPLAY, WHATSAPP_URI,
};
use crate::domain::contact::{ContactForm, ContactPhase};
use crate::domain::nav::NavState;
use crate::templates::components::sections::{page_hero, section_heading};
use crate::templates::site_layout;
use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1423666639041-f56000c27a9a?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub fn contact_page(
    nav: &NavState,
    form: &ContactForm,
    phase: ContactPhase,
    missing: &[&str],
) -> Markup {
    site_layout(
        "Contact",
        nav,
        html! {
            (page_hero(
                "Contact Us",
                "Get in touch with our property experts for personalized assistance with your real estate needs across Indonesia.",
                HERO_IMAGE,
            ))

            section class="section" {
                div class="container contact-grid" {
                    div class="contact-form-column" {
                        h2 { "Get In Touch" }
                        p { "Fill out the form below and our team will get back to you within 24 hours." }
                        (contact_panel(form, phase, missing))
                        // Shown only to visitors without htmx, who never poll for the form.
                        @if matches!(phase, ContactPhase::Submitted { .. }) {
                            noscript {
                                a href="/contact" class="btn btn-outline" { "Send another message" }
                            }
                        }
                    }
                    (contact_info())
                }
            }

            section class="map" {
                iframe
                    src=(MAP_EMBED_URI)
                    title="Office location"
                    width="100%"
                    height="450"
                    style="border:0"
                    allowfullscreen
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade" {}
            }

            section class="section section-light" {
                div class="container" {
                    (section_heading(
                        "Our Offices Across Indonesia",
                        Some("With offices in major cities across Indonesia, we're always close to your property needs."),
                    ))
                    div class="grid grid-4" {
                        @for office in &OFFICES {
                            div class="card office" {
                                h3 { (office.city) " Office" }
                                p { (office.address) }
                                a href=(office.phone_uri()) { (office.phone) }
                            }
                        }
                    }
                }
            }

            a href=(WHATSAPP_CHAT_URI) target="_blank" rel="noopener noreferrer" class="whatsapp-float" aria-label="Chat on WhatsApp" {
                "WhatsApp"
            }
        },
    )
}

/// The swappable part of the contact page: the form, or the confirmation
/// that swaps itself back to an empty form after `reset_after`.
pub fn contact_panel(form: &ContactForm, phase: ContactPhase, missing: &[&str]) -> Markup {
    match phase {
        ContactPhase::Submitted { reset_after } => html! {
            div id="contact-panel" class="contact-sent"
                hx-get="/contact/form"
                hx-trigger=(format!("load delay:{}ms", reset_after.as_millis()))
                hx-swap="outerHTML"
            {
                h3 { "Message Sent!" }
                p { "Thank you for contacting us. Our team will get back to you shortly." }
            }
        },
        ContactPhase::Idle => html! {
            form id="contact-panel" class="contact-form" method="post" action="/contact"
                hx-post="/contact"
                hx-target="this"
                hx-swap="outerHTML"
                hx-indicator="#contact-sending"
            {
                @if !missing.is_empty() {
                    div class="form-errors" role="alert" {
                        p { "Please fill in the following fields:" }
                        ul {
                            @for label in missing {
                                li { (label) }
                            }
                        }
                    }
                }

                (text_field("name", "Full Name", "text", &form.name, "Your name"))
                (text_field("email", "Email Address", "email", &form.email, "your.email@example.com"))
                (text_field("phone", "Phone Number", "tel", &form.phone, "+62 xxx xxxx xxxx"))

                label for="message" { "Message" }
                textarea id="message" name="message" rows="5" required placeholder="How can we help you?" {
                    (form.message)
                }

                button type="submit" class="btn btn-gold" {
                    span class="idle-label" { "Send Message" }
                    span id="contact-sending" class="htmx-indicator" { "Sending..." }
                }
            }
        },
    }
}

fn text_field(name: &str, label: &str, kind: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        label for=(name) { (label) }
        input id=(name) name=(name) type=(kind) value=(value) required placeholder=(placeholder);
    }
}

fn contact_info() -> Markup {
    html! {
        aside class="contact-info" {
            div class="card" {
                h3 { "Our Headquarters" }
                address {
                    @for (i, line) in HQ_ADDRESS_LINES.iter().enumerate() {
                        @if i > 0 { br; }
                        (line)
                    }
                }
            }
            div class="card" {
                h3 { "Contact Details" }
                ul {
                    li { "Phone: " a href=(PHONE_URI) { (PHONE_DISPLAY) } }
                    li { "WhatsApp: " a href=(WHATSAPP_URI) target="_blank" rel="noopener noreferrer" { (WHATSAPP_DISPLAY) } }
                    li { "Email: " a href=(format!("mailto:{EMAIL}")) { (EMAIL) } }
                }
            }
            div class="card" {
                h3 { "Business Hours" }
                ul {
                    @for (days, hours) in &BUSINESS_HOURS {
                        li { strong { (days) } ": " (hours) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn idle_panel_keeps_entered_values_and_lists_gaps() {
        let form = ContactForm {
            name: "Siti <Rahayu>".into(),
            ..ContactForm::default()
        };
        let html = contact_panel(&form, ContactPhase::Idle, &["Email Address"]).into_string();

        assert!(html.contains(r#"value="Siti &lt;Rahayu&gt;""#));
        assert!(html.contains("<li>Email Address</li>"));
        assert!(html.contains(r#"hx-post="/contact""#));
        assert!(html.contains("Sending..."));
    }

    #[test]
    fn submitted_panel_polls_for_a_fresh_form() {
        let phase = ContactPhase::Submitted {
            reset_after: Duration::from_millis(5000),
        };
        let html = contact_panel(&ContactForm::default(), phase, &[]).into_string();

        assert!(html.contains("Message Sent!"));
        assert!(html.contains(r#"hx-get="/contact/form""#));
        assert!(html.contains(r#"hx-trigger="load delay:5000ms""#));
        assert!(!html.contains("<form"));
    }
}
