use actix_web::web;

pub mod health;
pub mod inventory;
pub mod products;
pub mod tokens;

/// Register every route. Used by `main.rs` and by the test app builder so
/// both serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(tokens::configure_routes)
        .configure(products::configure_routes)
        .configure(inventory::configure_routes);
}
