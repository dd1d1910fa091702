use crate::content::services::Testimonial;
use maud::{html, Markup};

/// Full-width banner at the top of inner pages.
pub fn page_hero(title: &str, subtitle: &str, image: &str) -> Markup {
    let background = format!("background-image: url('{image}')");
    html! {
        section class="page-hero" style=(background) {
            div class="page-hero-overlay" {}
            div class="container page-hero-content" {
                h1 { (title) }
                div class="divider" {}
                p { (subtitle) }
            }
        }
    }
}

pub fn section_heading(title: &str, intro: Option<&str>) -> Markup {
    html! {
        div class="section-heading" {
            h2 { (title) }
            div class="divider" {}
            @if let Some(intro) = intro {
                p { (intro) }
            }
        }
    }
}

pub fn feature_card(title: &str, description: &str) -> Markup {
    html! {
        div class="card feature-card" {
            h3 { (title) }
            p { (description) }
        }
    }
}

pub fn process_step(number: usize, title: &str, description: &str) -> Markup {
    html! {
        div class="card process-step" {
            span class="step-number" { (number) }
            h3 { (title) }
            p { (description) }
        }
    }
}

pub fn stat_counter(value: &str, label: &str) -> Markup {
    html! {
        div class="stat" {
            span class="stat-value" { (value) }
            span class="stat-label" { (label) }
        }
    }
}

pub fn testimonial(t: &Testimonial) -> Markup {
    html! {
        blockquote class="card testimonial" {
            p { "\u{201c}" (t.quote) "\u{201d}" }
            footer {
                strong { (t.name) }
                span { (t.byline) }
            }
        }
    }
}

/// Accordion entry; opening one does not close the others.
pub fn faq_item(question: &str, answer: &str) -> Markup {
    html! {
        details class="faq" {
            summary { (question) }
            p { (answer) }
        }
    }
}

pub fn call_to_action(title: &str, text: &str, label: &str, href: &str) -> Markup {
    html! {
        section class="cta" {
            div class="container" {
                h2 { (title) }
                p { (text) }
                a href=(href) class="btn btn-gold" { (label) }
            }
        }
    }
}
