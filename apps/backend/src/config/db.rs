use std::env;

use crate::error::AppError;

/// Resolve the database URL from the environment.
///
/// `DATABASE_URL` wins when set. Otherwise a PostgreSQL URL is assembled
/// from `DB_USER` / `DB_PASS` (required) and `DB_HOST`, `DB_PORT`,
/// `DB_NAME` (defaulted).
pub fn db_url() -> Result<String, AppError> {
    if let Some(url) = env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
    {
        return Ok(url);
    }

    let username = must_var("DB_USER")?;
    let password = must_var("DB_PASS")?;
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = env::var("DB_NAME").unwrap_or_else(|_| "inventory".to_string());

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
