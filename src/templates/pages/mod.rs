pub mod about;
pub mod contact;
pub mod error;
pub mod home;
pub mod listings;
pub mod service_detail;
pub mod services;
pub mod under_construction;

pub use about::about_page;
pub use contact::{contact_page, contact_panel};
pub use error::error_page;
pub use home::home_page;
pub use listings::{listings_page, results_panel};
pub use service_detail::service_detail_page;
pub use services::services_page;
pub use under_construction::under_construction_page;
