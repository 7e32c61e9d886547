use crate::error::AppError;
use crate::infra::db::{bootstrap_db, connect_db};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for AppState (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_url: Option<String>,
    run_migrations: bool,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_url: None,
            run_migrations: false,
        }
    }

    pub fn with_db(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    /// Apply pending migrations right after connecting.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_url {
            Some(url) => {
                let conn = if self.run_migrations {
                    bootstrap_db(&url).await?
                } else {
                    connect_db(&url).await?
                };
                Ok(AppState::new(conn, self.security_config))
            }
            None => Ok(AppState::new_without_db(self.security_config)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
