pub mod config;
pub mod db;
pub mod models;
pub mod query; // reads: selection, projection, aggregation, search, analysis
pub mod transactions; // atomic writes

#[cfg(test)]
mod test_fixtures;

pub use db::{with_session, DatabaseError, Session};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over the default filter.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
    }
}
