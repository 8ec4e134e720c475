//! Gridiron Central: read-only REST API over fantasy-football data.
//!
//! The crate is layered the same way requests flow: `store` holds the
//! relational tables, `service` translates filter/pagination parameters
//! into store queries, `handlers`/`routes` expose the service over HTTP,
//! and `docs` publishes the OpenAPI document.

pub mod config;
pub mod docs;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::app_router;
pub use schemas::{Counts, League, Performance, Player, Team, TeamBase};
pub use service::params::{
    LeagueListParams, PerformanceListParams, PlayerListParams, TeamListParams,
};
pub use state::AppState;
pub use store::{connect, connect_memory, ensure_tables};
