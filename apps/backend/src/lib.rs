#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

pub use auth::{issue_token, verify_token, ClaimRequest, IdentityClaim};
pub use config::db::db_url;
pub use error::AppError;
pub use extractors::{CurrentIdentity, InventoryId, ValidatedJson};
pub use infra::db::{bootstrap_db, connect_db};
pub use middleware::{cors_middleware, AuthGate, RequestTrace, StructuredLogger, TraceSpan};
pub use repos::inventory::{InventoryRecord, NewInventoryRecord, RestockRequest};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
