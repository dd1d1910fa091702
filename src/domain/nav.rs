// src/domain/nav.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "Services", path: "/services" },
    NavLink { name: "Listings", path: "/listings" },
    NavLink { name: "About Us", path: "/about" },
    NavLink { name: "Contact", path: "/contact" },
];

/// Navigation bar state for one render. Built from the same request path
/// the router dispatched on, so the highlight always agrees with the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    active_path: String,
}

impl NavState {
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            active_path: path.into(),
        }
    }

    /// Exact match only; `/services/rentals` does not light up "Services".
    pub fn is_active(&self, link: &NavLink) -> bool {
        self.active_path == link.path
    }
}
