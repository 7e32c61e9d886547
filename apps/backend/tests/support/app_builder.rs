use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use inventory_backend::infra::state::build_state;
use inventory_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use inventory_backend::routes;
use inventory_backend::state::app_state::AppState;
use inventory_backend::state::security_config::SecurityConfig;
use inventory_backend::AppError;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh state backed by its own migrated in-memory SQLite database.
pub async fn test_state() -> AppState {
    build_state()
        .with_db("sqlite::memory:")
        .with_migrations()
        .with_security(SecurityConfig::new(TEST_SECRET))
        .build()
        .await
        .expect("in-memory state should build")
}

type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig)>;

pub struct TestAppBuilder {
    state: AppState,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: None,
        }
    }

    /// Serve the same routes as `main.rs`.
    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure));
        self
    }

    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + 'static,
    {
        self.route_config = Some(Box::new(config_fn));
        self
    }

    pub async fn build(
        self,
    ) -> Result<impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>, AppError>
    {
        let data = web::Data::new(self.state);
        let route_config = self.route_config;

        let service = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| {
                    if let Some(config_fn) = &route_config {
                        config_fn(cfg);
                    }
                }),
        )
        .await;

        Ok(service)
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
