//! Typed client SDK for the Gridiron Central fantasy football API.
//!
//! Every call is one HTTP request against the read-only `/v0/` surface,
//! deserialized into the typed records in [`schemas`]. Transient failures
//! (network errors, HTTP 429 and 5xx) are retried with exponential backoff
//! and jitter inside a bounded elapsed-time budget; everything else
//! surfaces immediately as a [`ClientError`].

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod retry;
pub mod schemas;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use params::{LeagueListParams, PerformanceListParams, PlayerListParams, TeamListParams};
pub use retry::RetryPolicy;
pub use schemas::{Counts, HealthMessage, League, Performance, Player, Team, TeamBase};
