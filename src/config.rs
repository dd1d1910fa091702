// src/config.rs
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Size of the astra worker pool.
    pub max_workers: usize,
    /// Simulated latency of a contact form submission.
    pub contact_submit_delay: Duration,
    /// How long the "Message Sent" panel stays before the form returns.
    pub contact_reset_after: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            contact_submit_delay: Duration::from_millis(1500),
            contact_reset_after: Duration::from_millis(5000),
        }
    }
}

impl SiteConfig {
    /// Reads `SITE_ADDR`, `SITE_WORKERS`, `CONTACT_SUBMIT_DELAY_MS` and
    /// `CONTACT_RESET_AFTER_MS`, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = parse_var(&lookup, "SITE_ADDR")?.unwrap_or(defaults.addr);

        let max_workers = match parse_var::<usize, _>(&lookup, "SITE_WORKERS")? {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    name: "SITE_WORKERS",
                    value: "0".into(),
                    reason: "must be at least 1".into(),
                })
            }
            Some(n) => n,
            None => defaults.max_workers,
        };

        let contact_submit_delay = parse_var(&lookup, "CONTACT_SUBMIT_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.contact_submit_delay);

        let contact_reset_after = parse_var(&lookup, "CONTACT_RESET_AFTER_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.contact_reset_after);

        Ok(Self {
            addr,
            max_workers,
            contact_submit_delay,
            contact_reset_after,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::Invalid {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
