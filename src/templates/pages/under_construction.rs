use crate::domain::nav::NavState;
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn under_construction_page(nav: &NavState) -> Markup {
    site_layout(
        "Page Under Construction",
        nav,
        html! {
            section class="section placeholder" {
                div class="container center" {
                    h1 { "Page Under Construction" }
                    p { "We're working on this page. Please check back soon." }
                    a href="/" class="btn btn-navy" { "Back to Home" }
                }
            }
        },
    )
}
