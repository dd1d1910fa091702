// src/domain/filter.rs

use crate::domain::property::PropertyRecord;
use serde::Serialize;

/// Region choices offered by the listings page.
pub const REGIONS: [&str; 5] = ["Bali", "Jakarta", "West Java", "East Java", "Yogyakarta"];

/// Property type choices. These are matched against titles.
pub const PROPERTY_TYPES: [&str; 5] = ["Villa", "Apartment", "House", "Office", "Land"];

/// Price brackets, in billions of rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceBracket {
    Under1,
    From1To3,
    From3To5,
    From5To10,
    Above10,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 5] = [
        PriceBracket::Under1,
        PriceBracket::From1To3,
        PriceBracket::From3To5,
        PriceBracket::From5To10,
        PriceBracket::Above10,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceBracket::Under1 => "Under Rp 1 Billion",
            PriceBracket::From1To3 => "Rp 1-3 Billion",
            PriceBracket::From3To5 => "Rp 3-5 Billion",
            PriceBracket::From5To10 => "Rp 5-10 Billion",
            PriceBracket::Above10 => "Above Rp 10 Billion",
        }
    }

    /// Exact label match; anything else is not a bracket.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    /// Bounds: under 1, [1, 3], (3, 5], (5, 10], above 10.
    pub fn contains(self, billions: f64) -> bool {
        match self {
            PriceBracket::Under1 => billions < 1.0,
            PriceBracket::From1To3 => (1.0..=3.0).contains(&billions),
            PriceBracket::From3To5 => billions > 3.0 && billions <= 5.0,
            PriceBracket::From5To10 => billions > 5.0 && billions <= 10.0,
            PriceBracket::Above10 => billions > 10.0,
        }
    }

    /// An unreadable price label is in no bracket.
    pub fn admits(self, record: &PropertyRecord) -> bool {
        record.price_in_billions().is_some_and(|p| self.contains(p))
    }
}

/// What the visitor asked for. Empty strings and `None` mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub region: String,
    pub price: Option<PriceBracket>,
    pub property_type: String,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.applied_count() == 0
    }

    /// Number of active constraints, as shown in "Filters Applied: N".
    pub fn applied_count(&self) -> usize {
        [
            !self.region.is_empty(),
            self.price.is_some(),
            !self.property_type.is_empty(),
            !self.search.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Clears all four constraints at once.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A record matches when it satisfies every non-empty constraint.
    ///
    /// Region and type are case-sensitive substring checks against the
    /// location and title; search is a case-insensitive substring check
    /// against either of them.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if !self.region.is_empty() && !record.location_label.contains(self.region.as_str()) {
            return false;
        }

        if let Some(bracket) = self.price {
            if !bracket.admits(record) {
                return false;
            }
        }

        if !self.property_type.is_empty() && !record.title.contains(self.property_type.as_str()) {
            return false;
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = record.title.to_lowercase().contains(&needle);
            let in_location = record.location_label.to_lowercase().contains(&needle);
            if !in_title && !in_location {
                return false;
            }
        }

        true
    }
}

/// A matching record together with its position in the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilteredProperty {
    pub index: usize,
    #[serde(flatten)]
    pub record: PropertyRecord,
}

/// Always filters the full `source`, keeping source order.
pub fn filter_properties(source: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<FilteredProperty> {
    source
        .iter()
        .filter(|record| criteria.matches(record))
        .enumerate()
        .map(|(index, record)| FilteredProperty {
            index,
            record: *record,
        })
        .collect()
}
