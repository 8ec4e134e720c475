//! HTTP handlers, grouped the way the API's documentation tags group them.

pub mod analytics;
pub mod bulk;
pub mod membership;
pub mod players;
pub mod scoring;
