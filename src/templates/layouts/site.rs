use crate::domain::nav::NavState;
use crate::templates::components::{footer, navbar};
use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, nav: &NavState, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Angkasa Jaya Propertindo - Indonesia's trusted property partner for sales, rentals, management and investment.";
                title { (title) " | Angkasa Jaya Propertindo" }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;600&family=Poppins:wght@500;600;700&display=swap";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="site" {
                (navbar(nav))
                main class="site-main" {
                    (content)
                }
                (footer())
            }
        }
    }
}
