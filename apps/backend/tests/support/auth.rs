//! Token helpers for tests.

use std::time::{Duration, SystemTime};

use inventory_backend::auth::{issue_token, ClaimRequest};
use inventory_backend::state::security_config::SecurityConfig;

pub fn token_for(email: &str, sec: &SecurityConfig) -> String {
    issue_token(&ClaimRequest::new(email), SystemTime::now(), sec)
        .expect("token should be issued")
}

/// Full `Authorization` header value.
pub fn bearer_header(email: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", token_for(email, sec))
}

/// A token issued two days ago, long past its 24h lifetime.
pub fn expired_token_for(email: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now()
        .checked_sub(Duration::from_secs(2 * 24 * 60 * 60))
        .expect("clock should allow going back two days");
    issue_token(&ClaimRequest::new(email), issued, sec).expect("token should be issued")
}
