//! # Console Configuration Service
//!
//! Publishes the runtime settings the browser console reads at startup:
//! the REST API prefix, page size, search debounce and dropdown limit.
//!
//! The values come from `HostConfig` and are shared with the handler through
//! `web::Data`; nothing here changes after startup.

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use common::model::config::ConsoleConfig;

const API_PATH: &str = "/console";

/// Registers `GET /console/config.json`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config.json", get().to(process))
}

async fn process(config: web::Data<ConsoleConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
