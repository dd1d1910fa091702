use crate::domain::filter::FilteredProperty;
use maud::{html, Markup};

/// One listing card. Cards fade in one after another by grid position.
pub fn property_card(item: &FilteredProperty) -> Markup {
    let property = &item.record;
    let delay = format!("animation-delay: {:.1}s", item.index as f64 * 0.1);

    html! {
        article class="card property-card" style=(delay) data-index=(item.index) {
            div class="property-media" {
                img src=(property.image) alt=(property.title) loading="lazy" width="400" height="224";
                @if property.is_hot_deal {
                    span class="badge badge-hot" { "Hot Deal" }
                }
                p class="property-price" { (property.price_label) }
            }
            div class="card-body" {
                h3 class="property-title" { (property.title) }
                p class="property-location" { (property.location_label) }
                hr;
                div class="property-facts" {
                    span { (property.bedrooms) " Beds" }
                    span { (property.bathrooms) " Baths" }
                    span { (property.area_label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::listings;

    #[test]
    fn hot_deals_get_a_badge() {
        let hot = FilteredProperty { index: 0, record: listings()[0] };
        let plain = FilteredProperty { index: 1, record: listings()[1] };

        assert!(property_card(&hot).into_string().contains("Hot Deal"));
        assert!(!property_card(&plain).into_string().contains("Hot Deal"));
    }

    #[test]
    fn delay_follows_position() {
        let card = FilteredProperty { index: 3, record: listings()[5] };
        let html = property_card(&card).into_string();

        assert!(html.contains("animation-delay: 0.3s"));
        assert!(html.contains("4 Beds"));
        assert!(html.contains("3 Baths"));
        assert!(html.contains("Rp 2.7 Billion"));
    }
}
