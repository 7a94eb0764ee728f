use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module at the server root.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::ingest::init_routes)
        .configure(http::scrape::init_routes)
        .configure(http::landing::init_routes);
}
