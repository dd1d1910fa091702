// templates/pages/listings.rs

use crate::content::regions::FEATURED_REGIONS;
use crate::domain::filter::{FilterCriteria, PriceBracket, PROPERTY_TYPES, REGIONS};
use crate::domain::listing::ListingsView;
use crate::domain::nav::NavState;
use crate::domain::reveal::RevealWindow;
use crate::query::listings_query;
use crate::templates::components::filters::select_filter;
use crate::templates::components::sections::{call_to_action, page_hero, section_heading};
use crate::templates::{property_card, site_layout};
use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1582407947304-fd86f028f716?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub fn listings_page(nav: &NavState, view: &ListingsView) -> Markup {
    site_layout(
        "Property Listings",
        nav,
        html! {
            (page_hero(
                "Property Listings",
                "Discover your perfect property from our curated selection of premium listings across Indonesia.",
                HERO_IMAGE,
            ))

            section class="section filters-bar" {
                div class="container" {
                    (filter_form(view.criteria(), view.reveal()))
                }
            }

            section class="section section-light" {
                div class="container" {
                    (results_panel(view))
                }
            }

            section class="section" {
                div class="container" {
                    (section_heading(
                        "Explore Properties by Region",
                        Some("Discover properties in Indonesia's most sought-after locations, from vibrant cities to tranquil beachfront destinations."),
                    ))
                    div class="grid grid-4" {
                        @for region in &FEATURED_REGIONS {
                            a href=(region_href(region.name)) class="region-tile" {
                                img src=(region.image) alt=(region.name) loading="lazy";
                                div class="region-tile-label" {
                                    h3 { (region.name) }
                                    p { (region.count) " Properties" }
                                }
                            }
                        }
                    }
                }
            }

            (call_to_action(
                "Can't Find What You're Looking For?",
                "Let our property experts help you find your dream property. We have access to exclusive listings not available on our website.",
                "Contact Our Property Experts",
                "/contact",
            ))
        },
    )
}

/// Plain GET form so filtering works without scripts; htmx swaps only the
/// results panel when it is available.
fn filter_form(criteria: &FilterCriteria, reveal: RevealWindow) -> Markup {
    let price_labels = PriceBracket::ALL.map(PriceBracket::label);
    let price = criteria.price.map(PriceBracket::label).unwrap_or_default();

    html! {
        form
            id="listing-filters"
            class="filter-form"
            method="get"
            action="/listings"
            hx-get="/listings/results"
            hx-target="#listing-results"
            hx-swap="outerHTML"
            hx-trigger="change, keyup changed delay:300ms, submit"
        {
            input type="hidden" name="show" value=(reveal.threshold());
            label class="search" {
                span class="sr-only" { "Search" }
                input
                    type="search"
                    name="q"
                    value=(criteria.search)
                    placeholder="Search by location or property name";
            }
            (select_filter("region", "Province", &REGIONS, &criteria.region))
            (select_filter("price", "Price Range", &price_labels, price))
            (select_filter("type", "Property Type", &PROPERTY_TYPES, &criteria.property_type))
            noscript {
                button type="submit" class="btn btn-navy" { "Apply" }
            }
        }
    }
}

/// Count, grid, empty state and "Load More". Served on its own to htmx.
pub fn results_panel(view: &ListingsView) -> Markup {
    let criteria = view.criteria();
    let reveal = view.reveal();
    let reset_href = reset_href(criteria, reveal);

    html! {
        div id="listing-results" class="listing-results" {
            div class="results-header" {
                h2 { (view.total()) " Properties Found" }
                div class="results-meta" {
                    span { "Filters Applied: " (criteria.applied_count()) }
                    @if !criteria.is_empty() {
                        a href=(reset_href) class="btn btn-outline btn-sm" { "Reset" }
                    }
                }
            }

            @if view.is_empty() {
                div class="empty-state" {
                    h3 { "No Properties Found" }
                    p { "Try adjusting your search filters to find more properties." }
                    a href=(reset_href) class="btn btn-navy" { "Reset Filters" }
                }
            } @else {
                div class="grid grid-3" {
                    @for item in view.visible() {
                        (property_card(item))
                    }
                }
            }

            @if view.has_more() {
                @let next = format!("/listings?{}", listings_query(criteria, reveal.next()));
                div class="center" {
                    a href=(next) class="btn btn-gold" { "Load More Properties" }
                }
            }
        }
    }
}

/// Clears every criterion but keeps the reveal threshold.
fn reset_href(criteria: &FilterCriteria, reveal: RevealWindow) -> String {
    let mut cleared = criteria.clone();
    cleared.reset();
    format!("/listings?{}", listings_query(&cleared, reveal))
}

fn region_href(region: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("region", region)
        .finish();
    format!("/listings?{query}")
}
