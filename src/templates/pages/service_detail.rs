use crate::content::company::WHATSAPP_QUOTE_URI;
use crate::content::services::Service;
use crate::domain::nav::NavState;
use crate::templates::components::sections::{
    call_to_action, faq_item, feature_card, page_hero, process_step, section_heading, testimonial,
};
use crate::templates::site_layout;
use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1582407947304-fd86f028f716?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

/// One template for every service; sections with no content are skipped.
pub fn service_detail_page(nav: &NavState, service: &Service) -> Markup {
    site_layout(
        service.title,
        nav,
        html! {
            (page_hero(service.heading, service.tagline, HERO_IMAGE))

            @if !service.offerings.is_empty() {
                section class="section" {
                    div class="container" {
                        (section_heading(service.offerings_heading, None))
                        div class="grid grid-3" {
                            @for offering in service.offerings {
                                (feature_card(offering.title, offering.description))
                            }
                        }
                    }
                }
            }

            section class="section section-light" id="process" {
                div class="container" {
                    (section_heading("How We Work", None))
                    div class="grid grid-3" {
                        @for (i, step) in service.steps.iter().enumerate() {
                            (process_step(i + 1, step.title, step.description))
                        }
                    }
                }
            }

            @if !service.stats.is_empty() {
                section class="section" {
                    div class="container grid grid-4" {
                        @for stat in service.stats {
                            div class="stat" {
                                span class="stat-value" { (stat.value) }
                                span class="stat-label" { (stat.label) }
                                p { (stat.description) }
                            }
                        }
                    }
                }
            }

            @if !service.testimonials.is_empty() {
                section class="section section-light" {
                    div class="container" {
                        (section_heading("Client Success Stories", None))
                        div class="grid grid-3" {
                            @for t in service.testimonials {
                                (testimonial(t))
                            }
                        }
                    }
                }
            }

            @if !service.benefits.is_empty() {
                section class="section" {
                    div class="container consult" {
                        h2 { "Ready to Get Started?" }
                        ul class="checklist" {
                            @for benefit in service.benefits {
                                li { (benefit) }
                            }
                        }
                        a href=(WHATSAPP_QUOTE_URI) target="_blank" rel="noopener noreferrer" class="btn btn-gold" {
                            "Free WhatsApp Consultation"
                        }
                    }
                }
            }

            @if !service.faqs.is_empty() {
                section class="section section-light" {
                    div class="container faqs" {
                        (section_heading("Frequently Asked Questions", None))
                        @for faq in service.faqs {
                            (faq_item(faq.question, faq.answer))
                        }
                    }
                }
            }

            (call_to_action(
                "Have Questions?",
                "Our consultants are happy to walk you through every step. Consultations are always free.",
                "Contact Us",
                "/contact",
            ))
        },
    )
}
