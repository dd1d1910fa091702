//! Literal marketing copy. Nothing here changes at runtime.

pub mod company;
pub mod regions;
pub mod services;
