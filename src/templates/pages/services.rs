use crate::content::services::SERVICES;
use crate::domain::nav::NavState;
use crate::templates::components::sections::{call_to_action, page_hero};
use crate::templates::site_layout;
use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub fn services_page(nav: &NavState) -> Markup {
    site_layout(
        "Services",
        nav,
        html! {
            (page_hero(
                "Our Services",
                "Comprehensive property solutions tailored to your needs across Indonesia",
                HERO_IMAGE,
            ))

            section class="section" {
                div class="container grid grid-3" {
                    @for service in SERVICES {
                        a href=(service.href()) class="card service-card" {
                            h3 { (service.title) }
                            p { (service.summary) }
                            span class="link-gold" { "Learn More" }
                        }
                    }
                }
            }

            (call_to_action(
                "Need a Customized Solution?",
                "Our team of experts is ready to create a tailored property solution that meets your specific requirements.",
                "Schedule a Consultation",
                "/contact",
            ))
        },
    )
}
