pub mod catalog;
pub mod contact;
pub mod filter;
pub mod listing;
pub mod nav;
pub mod property;
pub mod reveal;
