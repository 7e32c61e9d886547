use actix_web::{web, App, HttpServer};
use inventory_backend::config::db::db_url;
use inventory_backend::infra::state::build_state;
use inventory_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use inventory_backend::routes;
use inventory_backend::state::security_config::SecurityConfig;
use inventory_backend::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ PORT must be a valid port number");
            std::process::exit(1);
        });

    let secret = match std::env::var("ACCESS_TOKEN_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            eprintln!("❌ ACCESS_TOKEN_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(secret.as_bytes());

    let database_url = match db_url() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(database_url)
        .with_migrations()
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(%host, port, "inventory backend listening");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
