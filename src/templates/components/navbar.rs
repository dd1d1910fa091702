use crate::content::company::{TAGLINE, WHATSAPP_QUOTE_URI};
use crate::domain::nav::{NavState, NAV_LINKS};
use maud::{html, Markup};

pub fn navbar(nav: &NavState) -> Markup {
    html! {
        nav class="navbar" {
            div class="container navbar-inner" {
                a href="/" class="brand" {
                    (building_icon())
                    div {
                        span class="brand-name" { "Angkasa Jaya" }
                        span class="brand-tagline" { (TAGLINE) }
                    }
                }

                div class="nav-links" {
                    @for link in &NAV_LINKS {
                        a.nav-link.active[nav.is_active(link)] href=(link.path) { (link.name) }
                    }
                    a href=(WHATSAPP_QUOTE_URI) target="_blank" rel="noopener noreferrer" class="btn btn-gold" {
                        "Get a Quote"
                    }
                }

                // The mobile menu opens and closes without a round trip.
                details class="nav-mobile" {
                    summary aria-label="Toggle menu" { "☰" }
                    div class="nav-mobile-links" {
                        @for link in &NAV_LINKS {
                            a.nav-link.active[nav.is_active(link)] href=(link.path) { (link.name) }
                        }
                        a href=(WHATSAPP_QUOTE_URI) target="_blank" rel="noopener noreferrer" class="btn btn-gold" {
                            "Get a Quote"
                        }
                    }
                }
            }
        }
    }
}

pub fn building_icon() -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="32"
            height="32"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon icon-gold"
        {
            path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z" {}
            path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2" {}
            path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2" {}
            path d="M10 6h4" {}
            path d="M10 10h4" {}
            path d="M10 14h4" {}
            path d="M10 18h4" {}
        }
    }
}
