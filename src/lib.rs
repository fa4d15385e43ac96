pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod jobs;
pub mod recommend;

pub use api::{ApiClient, MohittoApi};
pub use config::Config;
pub use error::{ApiError, AuthError, LoadError};

/// Initialize structured logging once at process start. Honors `RUST_LOG`,
/// defaulting to `warn` so screen output stays readable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
