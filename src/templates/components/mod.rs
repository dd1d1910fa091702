pub mod card;
pub mod filters;
pub mod footer;
pub mod navbar;
pub mod sections;

pub use card::property_card;
pub use footer::footer;
pub use navbar::navbar;
