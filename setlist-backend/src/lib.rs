pub mod config;
mod database;
mod display;
mod error;
pub mod membership;
pub mod migration;
mod orm;
pub mod route;
mod schema;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use config::Config;
pub use database::Database;
pub use error::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub fn build(config: &Config) -> Router {
    route::router().with_state(Database::new(&config.database)).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!("request", method = %request.method(), uri = %request.uri())
        }),
    )
}

pub fn init_tracing(config: &config::Log) -> Result<(), color_eyre::Report> {
    color_eyre::install()?;

    let layer = tracing_subscriber::fmt::layer().with_target(true);
    let layer = match (&config.format, config.time) {
        (config::log::Format::Plain, true) => layer.boxed(),
        (config::log::Format::Plain, false) => layer.without_time().boxed(),
        (config::log::Format::Json, true) => layer.json().boxed(),
        (config::log::Format::Json, false) => layer.json().without_time().boxed(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        [concat!(env!("CARGO_CRATE_NAME"), "=info"), "tower_http=info"].join(",").into()
    });

    tracing_subscriber::registry().with(layer).with(filter).try_init()?;
    Ok(())
}

#[cfg(test)]
mod test;
