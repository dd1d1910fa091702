// src/domain/listing.rs

use crate::domain::filter::{filter_properties, FilterCriteria, FilteredProperty};
use crate::domain::property::PropertyRecord;
use crate::domain::reveal::RevealWindow;

/// State behind the listings page: the full source list, the visitor's
/// criteria, the derived filtered list and the reveal window.
///
/// The router builds one per request from the query string; the
/// in-place setters are what the tests drive.
///
/// Any criteria change refilters the full source. The reveal window is
/// left alone when criteria change, so a threshold raised by "Load More"
/// survives a narrower search.
#[derive(Debug, Clone)]
pub struct ListingsView<'a> {
    source: &'a [PropertyRecord],
    criteria: FilterCriteria,
    filtered: Vec<FilteredProperty>,
    reveal: RevealWindow,
}

impl<'a> ListingsView<'a> {
    #[cfg(test)]
    pub fn new(source: &'a [PropertyRecord]) -> Self {
        Self::with_state(source, FilterCriteria::default(), RevealWindow::default())
    }

    pub fn with_state(
        source: &'a [PropertyRecord],
        criteria: FilterCriteria,
        reveal: RevealWindow,
    ) -> Self {
        let mut view = Self {
            source,
            criteria,
            filtered: Vec::new(),
            reveal,
        };
        view.refilter();
        view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn reveal(&self) -> RevealWindow {
        self.reveal
    }

    #[cfg(test)]
    pub fn filtered(&self) -> &[FilteredProperty] {
        &self.filtered
    }

    pub fn visible(&self) -> &[FilteredProperty] {
        self.reveal.visible(&self.filtered)
    }

    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.reveal.has_more(self.filtered.len())
    }

    #[cfg(test)]
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.criteria.region = region.into();
        self.refilter();
    }

    #[cfg(test)]
    pub fn set_price(&mut self, price: Option<crate::domain::filter::PriceBracket>) {
        self.criteria.price = price;
        self.refilter();
    }

    #[cfg(test)]
    pub fn set_property_type(&mut self, property_type: impl Into<String>) {
        self.criteria.property_type = property_type.into();
        self.refilter();
    }

    #[cfg(test)]
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.refilter();
    }

    #[cfg(test)]
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.refilter();
    }

    #[cfg(test)]
    pub fn load_more(&mut self) {
        self.reveal.load_more();
    }

    fn refilter(&mut self) {
        self.filtered = filter_properties(self.source, &self.criteria);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::listings;
    use crate::domain::filter::PriceBracket;
    use crate::domain::property::PropertyRecord;

    fn many(n: usize) -> Vec<PropertyRecord> {
        let base = listings()[0];
        (0..n).map(|_| base).collect()
    }

    #[test]
    fn fresh_view_shows_everything() {
        let view = ListingsView::new(listings());
        assert_eq!(view.total(), 6);
        assert_eq!(view.visible().len(), 6);
        assert!(!view.has_more());
        assert!(view.criteria().is_empty());
    }

    #[test]
    fn each_setter_refilters_from_the_full_source() {
        let mut view = ListingsView::new(listings());

        view.set_region("Jakarta");
        assert_eq!(view.total(), 2);

        // Switching region widens again rather than narrowing the previous result.
        view.set_region("Bali");
        assert_eq!(view.total(), 3);

        view.set_price(Some(PriceBracket::From5To10));
        assert_eq!(view.total(), 3);

        view.set_property_type("Villa");
        assert_eq!(view.total(), 2);

        view.set_search("seminyak");
        assert_eq!(view.total(), 1);
        assert_eq!(view.visible()[0].record.title, "Modern Villa with Pool");
        assert_eq!(view.visible()[0].index, 0);
    }

    #[test]
    fn reset_restores_the_full_list() {
        let mut view = ListingsView::new(listings());
        view.set_region("Yogyakarta");
        assert!(view.is_empty());

        view.reset();
        assert!(view.criteria().is_empty());
        assert_eq!(view.filtered().len(), listings().len());
    }

    #[test]
    fn load_more_reveals_in_steps() {
        let source = many(14);
        let mut view = ListingsView::new(&source);
        assert_eq!(view.visible().len(), 6);
        assert!(view.has_more());

        view.load_more();
        assert_eq!(view.visible().len(), 12);

        view.load_more();
        assert_eq!(view.visible().len(), 14);
        assert!(!view.has_more());

        view.load_more();
        assert_eq!(view.visible().len(), 14);
    }

    #[test]
    fn changing_criteria_keeps_the_reveal_threshold() {
        let source = many(14);
        let mut view = ListingsView::new(&source);
        view.load_more();
        assert_eq!(view.reveal().threshold(), 12);

        view.set_search("no such place");
        assert_eq!(view.reveal().threshold(), 12);

        view.reset();
        assert_eq!(view.reveal().threshold(), 12);
        assert_eq!(view.visible().len(), 12);
    }
}
