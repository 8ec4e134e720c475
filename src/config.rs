//! Server settings read from the environment.

use std::env;

/// Settings for the API server process. Every field has a local-development
/// default so `cargo run` works with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Load the reference dataset on startup when the store is empty.
    pub seed_demo: bool,
}

impl AppConfig {
    /// Reads settings from the environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Self {
        AppConfig {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://gridiron.db".into()),
            bind_addr: env::var("GRIDIRON_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".into()),
            seed_demo: env::var("GRIDIRON_SEED_DEMO")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
