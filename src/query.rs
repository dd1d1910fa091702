// src/query.rs
//
// Listings page state lives in the query string:
// region, price, type, q and show.

use crate::domain::filter::{FilterCriteria, PriceBracket};
use crate::domain::reveal::RevealWindow;
use url::form_urlencoded;

pub fn parse_listings_query(query: &str) -> (FilterCriteria, RevealWindow) {
    let mut criteria = FilterCriteria::default();
    let mut reveal = RevealWindow::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "region" => criteria.region = value.into_owned(),
            "price" => criteria.price = PriceBracket::from_label(&value),
            "type" => criteria.property_type = value.into_owned(),
            "q" => criteria.search = value.into_owned(),
            "show" => match value.trim().parse::<usize>() {
                Ok(n) => reveal = RevealWindow::from_threshold(n),
                Err(_) => tracing::debug!(show = %value, "ignoring unreadable reveal threshold"),
            },
            _ => {}
        }
    }

    (criteria, reveal)
}

/// Query string for the given state. Empty criteria are left out; the
/// reveal threshold is always carried.
pub fn listings_query(criteria: &FilterCriteria, reveal: RevealWindow) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    if !criteria.region.is_empty() {
        out.append_pair("region", &criteria.region);
    }
    if let Some(price) = criteria.price {
        out.append_pair("price", price.label());
    }
    if !criteria.property_type.is_empty() {
        out.append_pair("type", &criteria.property_type);
    }
    if !criteria.search.is_empty() {
        out.append_pair("q", &criteria.search);
    }
    out.append_pair("show", &reveal.threshold().to_string());
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_mean_no_constraint() {
        let (criteria, reveal) = parse_listings_query("");
        assert!(criteria.is_empty());
        assert_eq!(reveal, RevealWindow::default());
    }

    #[test]
    fn reads_every_parameter() {
        let (criteria, reveal) =
            parse_listings_query("region=West+Java&price=Rp+1-3+Billion&type=House&q=bandung&show=12");

        assert_eq!(criteria.region, "West Java");
        assert_eq!(criteria.price, Some(PriceBracket::From1To3));
        assert_eq!(criteria.property_type, "House");
        assert_eq!(criteria.search, "bandung");
        assert_eq!(reveal.threshold(), 12);
    }

    #[test]
    fn unknown_price_and_bad_show_fall_back() {
        let (criteria, reveal) = parse_listings_query("price=cheap&show=lots");
        assert_eq!(criteria.price, None);
        assert_eq!(reveal.threshold(), 6);

        let (_, reveal) = parse_listings_query("show=2");
        assert_eq!(reveal.threshold(), 6);
    }

    #[test]
    fn query_carries_state_back() {
        let criteria = FilterCriteria {
            region: "Bali".into(),
            price: Some(PriceBracket::From5To10),
            property_type: String::new(),
            search: "villa & pool".into(),
        };
        let reveal = RevealWindow::default().next();

        let query = listings_query(&criteria, reveal);
        assert_eq!(
            query,
            "region=Bali&price=Rp+5-10+Billion&q=villa+%26+pool&show=12"
        );
        assert_eq!(parse_listings_query(&query), (criteria, reveal));
    }
}
