// templates/pages/home.rs

use crate::content::company::WHY_CHOOSE_US;
use crate::content::regions::ARCHIPELAGO;
use crate::domain::catalog;
use crate::domain::filter::FilteredProperty;
use crate::domain::nav::NavState;
use crate::templates::components::sections::{feature_card, section_heading};
use crate::templates::{property_card, site_layout};
use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1566974472739-8e3c136b86e0?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub fn home_page(nav: &NavState) -> Markup {
    let featured: Vec<FilteredProperty> = catalog::featured()
        .iter()
        .enumerate()
        .map(|(index, record)| FilteredProperty { index, record: *record })
        .collect();
    let hero_style = format!("background-image: url('{HERO_IMAGE}')");

    site_layout(
        "Home",
        nav,
        html! {
            section class="hero" style=(hero_style) {
                div class="page-hero-overlay" {}
                div class="container hero-content" {
                    h1 { "Your Gateway to Smarter Real Estate" }
                    p class="hero-subtitle" { "Free Consultations ∙ 14+ Developer Partners Nationwide" }
                    a href="/listings" class="btn btn-gold btn-lg" { "Explore Properties" }
                }
            }

            section class="section section-light" {
                div class="container" {
                    (section_heading(
                        "Why Choose Angkasa Jaya",
                        Some("With over a decade of experience in Indonesia's property market, we offer unmatched expertise and service that puts your needs first."),
                    ))
                    div class="grid grid-3" {
                        @for feature in &WHY_CHOOSE_US {
                            (feature_card(feature.title, feature.description))
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    (section_heading(
                        "Featured Properties",
                        Some("Discover our handpicked selection of premium properties across Indonesia's most desirable locations."),
                    ))
                    div class="grid grid-4" {
                        @for item in &featured {
                            (property_card(item))
                        }
                    }
                    div class="center" {
                        a href="/listings" class="btn btn-navy" { "View All Properties" }
                    }
                }
            }

            section class="section section-light" {
                div class="container" {
                    (section_heading(
                        "Discover Properties Across Indonesia",
                        Some("Explore our extensive property listings throughout the Indonesian archipelago."),
                    ))
                    ul class="region-list" {
                        @for region in &ARCHIPELAGO {
                            li {
                                span class="region-name" { (region.name) }
                                span class="region-count" { (region.count) " properties" }
                            }
                        }
                    }
                }
            }
        },
    )
}
