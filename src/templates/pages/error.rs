use crate::domain::nav::NavState;
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    let nav = NavState::for_path("");
    site_layout(
        "Error",
        &nav,
        html! {
            section class="section placeholder" {
                div class="container center" {
                    h1 { "Error " (status) }
                    p class="error-message" { (message) }
                    a href="/" class="btn btn-navy" { "Back to Home" }
                }
            }
        },
    )
}
