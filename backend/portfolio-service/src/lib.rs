/// Portfolio Service Library
///
/// Backend for a personal portfolio site. Serves journal posts, career
/// timeline milestones, media gallery items and contact form submissions from
/// an in-memory store, with schema validation on every create.
///
/// # Modules
///
/// - `handlers`: Request dispatch plus the server and per-route function shapes
/// - `models`: Entity types and insert schemas
/// - `services`: Storage abstraction, in-memory store and seed content
/// - `middleware`: HTTP request metrics
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
/// - `openapi`: Generated API document
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
