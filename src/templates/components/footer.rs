use crate::content::company::{COMPANY_NAME, EMAIL};
use crate::templates::components::navbar::building_icon;
use chrono::{Datelike, Utc};
use maud::{html, Markup};

const SERVICE_LINKS: [(&str, &str); 5] = [
    ("Property Sales", "/services/property-sales"),
    ("Property Rentals", "/services/rentals"),
    ("Property Management", "/services/property-management"),
    ("Investment Advisory", "/services/investment-consulting"),
    ("Legal Support", "/services/legal-support"),
];

pub fn footer() -> Markup {
    let year = Utc::now().year();

    html! {
        footer class="footer" {
            div class="container footer-grid" {
                div class="footer-about" {
                    div class="brand" {
                        (building_icon())
                        div {
                            span class="brand-name" { "Angkasa Jaya" }
                            span class="brand-tagline" { "Propertindo" }
                        }
                    }
                    p { "Indonesia's trusted property partner, providing exceptional real estate services since 2010." }
                    div class="social" {
                        a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram" { "Instagram" }
                        a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Facebook" { "Facebook" }
                        a href="https://linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" { "LinkedIn" }
                    }
                }

                div {
                    h3 { "Quick Links" }
                    ul {
                        li { a href="/" class="footer-link" { "Home" } }
                        li { a href="/services" class="footer-link" { "Services" } }
                        li { a href="/listings" class="footer-link" { "Property Listings" } }
                        li { a href="/about" class="footer-link" { "About Us" } }
                        li { a href="/contact" class="footer-link" { "Contact" } }
                    }
                }

                div {
                    h3 { "Our Services" }
                    ul {
                        @for (label, href) in SERVICE_LINKS {
                            li { a href=(href) class="footer-link" { (label) } }
                        }
                    }
                }

                div {
                    h3 { "Contact Us" }
                    ul class="footer-contact" {
                        li { "Jl. Sudirman No. 123, Jakarta Selatan, Indonesia" }
                        li { a href="tel:+6221555566666" { "+62 21 5555 6666" } }
                        li { a href=(format!("mailto:{EMAIL}")) { (EMAIL) } }
                    }
                }
            }

            hr;

            div class="container footer-bottom" {
                p { "© " (year) " " (COMPANY_NAME) ". All rights reserved." }
                div class="footer-legal" {
                    a href="/privacy" { "Privacy Policy" }
                    a href="/terms" { "Terms of Service" }
                    a href="/sitemap" { "Sitemap" }
                }
            }
        }
    }
}
