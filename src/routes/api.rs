//! HTTP dispatch for the `/clients` resource.
//!
//! Every response carries `Access-Control-Allow-Origin: *` so browser callers
//! can reach the endpoint from any origin.

use actix_web::http::Method;
use actix_web::{HttpResponse, Responder, web};
use log::error;
use serde_json::json;

use crate::repository::DieselRepository;
use crate::services::clients;

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// `GET /clients` — the listing itself.
pub async fn list_clients(repo: web::Data<Option<DieselRepository>>) -> impl Responder {
    match clients::list_clients(repo.get_ref().as_ref()) {
        Ok(clients) => HttpResponse::Ok().insert_header(ALLOW_ORIGIN).json(clients),
        Err(e) => {
            error!("Failed to list clients: {e}");
            HttpResponse::InternalServerError()
                .insert_header(ALLOW_ORIGIN)
                .json(json!({"error": e.to_string()}))
        }
    }
}

/// `OPTIONS /clients` — CORS preflight, answered without touching the store.
pub async fn clients_preflight() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ALLOW_ORIGIN)
        .insert_header(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .finish()
}

/// Fallback for every method other than `GET` and `OPTIONS`.
pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed()
        .insert_header(ALLOW_ORIGIN)
        .json(json!({"error": "Method not allowed"}))
}

/// Mounts the `/clients` resource.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clients")
            .route(web::get().to(list_clients))
            .route(web::method(Method::OPTIONS).to(clients_preflight))
            .default_service(web::route().to(method_not_allowed)),
    );
}
