//! Simple liveness probe

use actix_web::{get, web, HttpResponse, Responder};

use crate::store::PlayerStore;

#[get("/healthz")]
pub async fn healthz(store: web::Data<PlayerStore>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "players": store.len() }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
