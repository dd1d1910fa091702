use crate::content::company::{AWARDS, COMPANY_STATS, CORE_VALUES, DEVELOPER_PARTNERS, LEADERSHIP, TIMELINE};
use crate::domain::nav::NavState;
use crate::templates::components::sections::{
    call_to_action, feature_card, page_hero, section_heading, stat_counter,
};
use crate::templates::site_layout;
use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub fn about_page(nav: &NavState) -> Markup {
    site_layout(
        "About Us",
        nav,
        html! {
            (page_hero(
                "About Angkasa Jaya",
                "From our humble beginnings in Jember to becoming Indonesia's trusted property partner, discover the story behind our commitment to excellence.",
                HERO_IMAGE,
            ))

            section class="section" {
                div class="container intro" {
                    h2 { "Indonesia's Trusted Property Partner" }
                    p {
                        "Founded in 2010, Angkasa Jaya Propertindo has grown from a small local agency in East Java to one of Indonesia's leading property consultation firms, with a presence in 12 major cities across the archipelago."
                    }
                    p {
                        "Our journey has been defined by a commitment to excellence, integrity, and client satisfaction. We've helped thousands of clients find their ideal properties, make sound investments, and navigate Indonesia's complex property landscape."
                    }
                    div class="grid grid-4 stats" {
                        @for stat in &COMPANY_STATS {
                            (stat_counter(stat.value, stat.label))
                        }
                    }
                }
            }

            section class="section section-light" {
                div class="container" {
                    (section_heading(
                        "Our Story",
                        Some("From our humble beginnings in Jember to becoming a nationwide property leader, explore the key milestones that have shaped Angkasa Jaya Propertindo."),
                    ))
                    ol class="timeline" {
                        @for milestone in &TIMELINE {
                            li class="timeline-item" {
                                span class="timeline-year" { (milestone.year) }
                                h3 { (milestone.title) }
                                p { (milestone.description) }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    (section_heading(
                        "Our Core Values",
                        Some("These principles guide our approach to business and define the Angkasa Jaya experience for our clients and partners."),
                    ))
                    div class="grid grid-4" {
                        @for value in &CORE_VALUES {
                            (feature_card(value.title, value.description))
                        }
                    }
                }
            }

            section class="section section-light" {
                div class="container" {
                    (section_heading(
                        "Our Leadership Team",
                        Some("Meet the experienced professionals who lead Angkasa Jaya Propertindo with vision, expertise, and a commitment to excellence."),
                    ))
                    div class="grid grid-4" {
                        @for member in &LEADERSHIP {
                            div class="card team-member" {
                                h3 { (member.name) }
                                p class="team-position" { (member.position) }
                                p { (member.bio) }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    (section_heading(
                        "Our Developer Partners",
                        Some("We collaborate with Indonesia's leading property developers to bring exclusive opportunities to our clients across the archipelago."),
                    ))
                    ul class="grid grid-4 partners" {
                        @for partner in &DEVELOPER_PARTNERS {
                            li class="card partner" { (partner) }
                        }
                    }
                }
            }

            section class="section section-light" {
                div class="container" {
                    (section_heading(
                        "Our Achievements",
                        Some("Recognition of our commitment to excellence and innovation in Indonesia's property industry."),
                    ))
                    div class="grid grid-3" {
                        @for award in &AWARDS {
                            div class="card award" {
                                span class="award-year" { (award.year) }
                                h3 { (award.award) }
                                p { (award.organization) }
                            }
                        }
                    }
                }
            }

            (call_to_action(
                "Join Our Journey",
                "Whether you're looking for your dream property, seeking investment opportunities, or interested in career possibilities, we invite you to be part of the Angkasa Jaya story.",
                "Contact Us",
                "/contact",
            ))
        },
    )
}
