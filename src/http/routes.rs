use crate::{
    error::ApiError,
    http::{self, admin::AdminGate},
    store::PlayerStore,
};
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};

/// Mount every HTTP sub-module at the root.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::players::init_routes)
        .configure(http::admin::init_routes)
        .configure(http::health::init_routes);
}

/// Fallback for anything the routing table does not match.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// Fully wired application, minus middleware. Shared by the binary and tests.
pub fn app(
    store: web::Data<PlayerStore>,
    gate: web::Data<AdminGate>,
    max_body_bytes: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(store)
        .app_data(gate)
        .app_data(http::players::json_config(max_body_bytes))
        .configure(init_routes)
        .default_service(web::to(not_found))
}
