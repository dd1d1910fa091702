// src/domain/catalog.rs

use crate::domain::property::PropertyRecord;

/// Every listing the site knows about, in display order.
pub const LISTINGS: [PropertyRecord; 6] = [
    PropertyRecord {
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        title: "Modern Villa with Pool",
        price_label: "Rp 5.2 Billion",
        location_label: "Seminyak, Bali",
        bedrooms: 4,
        bathrooms: 3,
        area_label: "350m²",
        is_hot_deal: true,
    },
    PropertyRecord {
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        title: "Luxury Apartment",
        price_label: "Rp 3.8 Billion",
        location_label: "Menteng, Jakarta",
        bedrooms: 3,
        bathrooms: 2,
        area_label: "180m²",
        is_hot_deal: false,
    },
    PropertyRecord {
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        title: "Beachfront Residence",
        price_label: "Rp 7.5 Billion",
        location_label: "Nusa Dua, Bali",
        bedrooms: 5,
        bathrooms: 4,
        area_label: "420m²",
        is_hot_deal: true,
    },
    PropertyRecord {
        image: "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        title: "Modern Office Space",
        price_label: "Rp 12 Billion",
        location_label: "SCBD, Jakarta",
        bedrooms: 0,
        bathrooms: 4,
        area_label: "750m²",
        is_hot_deal: false,
    },
    PropertyRecord {
        image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        title: "Luxury Hillside Villa",
        price_label: "Rp 8.9 Billion",
        location_label: "Ubud, Bali",
        bedrooms: 6,
        bathrooms: 5,
        area_label: "520m²",
        is_hot_deal: false,
    },
    PropertyRecord {
        image: "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        title: "Modern Family Home",
        price_label: "Rp 2.7 Billion",
        location_label: "Bandung, West Java",
        bedrooms: 4,
        bathrooms: 3,
        area_label: "280m²",
        is_hot_deal: true,
    },
];

/// The home page showcase: the first four listings.
pub fn featured() -> &'static [PropertyRecord] {
    &LISTINGS[..4]
}

pub fn listings() -> &'static [PropertyRecord] {
    &LISTINGS
}
