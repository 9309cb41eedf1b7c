//! Shared fixtures for the HTTP integration tests.
//!
//! Apps are assembled the same way `main` assembles them, minus the tracing
//! subscriber, so both the server and the functions shape can be driven
//! through `actix_web::test`.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use portfolio_service::services::{Clock, MemStorage};
use std::sync::{Arc, Mutex};

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Clock that advances one second per reading
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

/// Store seeded with the demo content
pub fn seeded_storage() -> Arc<MemStorage> {
    Arc::new(MemStorage::new(Arc::new(SteppingClock::new())))
}

pub fn empty_storage() -> Arc<MemStorage> {
    Arc::new(MemStorage::unseeded(Arc::new(SteppingClock::new())))
}

/// Build a test service for `$mode` backed by `$storage` (any `Arc<impl Storage>`).
macro_rules! init_app {
    ($mode:expr, $storage:expr) => {{
        let mode: portfolio_service::config::ServeMode = $mode;
        let storage: std::sync::Arc<dyn portfolio_service::services::Storage> = $storage;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::from(storage))
                .wrap(actix_web::middleware::Condition::new(
                    mode == portfolio_service::config::ServeMode::Server,
                    portfolio_service::handlers::server::cors(crate::common::ALLOWED_ORIGIN),
                ))
                .wrap(portfolio_service::middleware::MetricsMiddleware)
                .configure(move |cfg| portfolio_service::handlers::configure(mode, cfg)),
        )
        .await
    }};
}
