// src/content/regions.rs

pub struct RegionCount {
    pub name: &'static str,
    pub count: u32,
}

/// Listing counts shown on the home page archipelago overview.
pub const ARCHIPELAGO: [RegionCount; 8] = [
    RegionCount { name: "Java", count: 45 },
    RegionCount { name: "Sumatra", count: 32 },
    RegionCount { name: "Kalimantan", count: 18 },
    RegionCount { name: "Sulawesi", count: 24 },
    RegionCount { name: "Bali", count: 37 },
    RegionCount { name: "Papua", count: 9 },
    RegionCount { name: "Maluku", count: 7 },
    RegionCount { name: "Nusa Tenggara", count: 15 },
];

pub struct RegionTile {
    pub name: &'static str,
    pub count: u32,
    pub image: &'static str,
}

/// "Explore Properties by Region" tiles on the listings page.
pub const FEATURED_REGIONS: [RegionTile; 4] = [
    RegionTile {
        name: "Bali",
        count: 37,
        image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    },
    RegionTile {
        name: "Jakarta",
        count: 45,
        image: "https://images.unsplash.com/photo-1555899434-94d1368aa7af?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    },
    RegionTile {
        name: "Bandung",
        count: 23,
        image: "https://images.unsplash.com/photo-1584810359583-96fc3448beaa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    },
    RegionTile {
        name: "Yogyakarta",
        count: 18,
        image: "https://images.unsplash.com/photo-1584810359583-96fc3448beaa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    },
];
