use crate::config::SiteConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Server};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod content;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "angkasa_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    tracing::info!(%addr, workers = config.max_workers, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(config);

    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                responses::error_to_response(err)
            }
        };

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
