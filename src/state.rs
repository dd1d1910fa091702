// src/state.rs
use crate::config::SiteConfig;
use crate::domain::contact::{ContactDesk, SimulatedContactDesk};

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub config: SiteConfig,
    pub contact_desk: Box<dyn ContactDesk>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let desk = SimulatedContactDesk::new(config.contact_submit_delay);
        Self::with_desk(config, desk)
    }

    pub fn with_desk(config: SiteConfig, desk: impl ContactDesk + 'static) -> Self {
        Self {
            config,
            contact_desk: Box::new(desk),
        }
    }
}
