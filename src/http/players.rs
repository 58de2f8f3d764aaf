//! Player collection endpoints.

use actix_web::{
    error::JsonPayloadError,
    http::header,
    mime, web, HttpRequest, HttpResponse,
};
use serde::Serialize;

use crate::{error::ApiError, metrics, models::NewPlayer, store::PlayerStore};

fn json_response<T: Serialize>(value: &T) -> Result<HttpResponse, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// JSON extractor settings for `POST /players`.
///
/// Only the media type is compared; parameters such as `charset` are ignored.
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .content_type(|ct| ct.type_() == mime::APPLICATION && ct.subtype() == mime::JSON)
        .content_type_required(true)
        .error_handler(json_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::ContentType => ApiError::UnsupportedMediaType,
        JsonPayloadError::OverflowKnownLength { limit, .. } | JsonPayloadError::Overflow { limit } => {
            ApiError::PayloadTooLarge(limit)
        }
        JsonPayloadError::Deserialize(e) => ApiError::BadRequest(e.to_string()),
        other => ApiError::Internal(other.to_string()),
    }
    .into()
}

/// GET /players
pub async fn list_players(store: web::Data<PlayerStore>) -> Result<HttpResponse, ApiError> {
    // Copy out under the lock, serialize after it is released.
    let players = store.list();
    json_response(&players)
}

/// POST /players
pub async fn create_player(
    new: web::Json<NewPlayer>,
    store: web::Data<PlayerStore>,
) -> Result<HttpResponse, ApiError> {
    let id = store.create(new.into_inner());
    metrics::PLAYERS_CREATED.inc();
    log::info!("created player {id}");

    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("/players/{id}")))
        .finish())
}

/// GET /players/random
pub async fn random_player(store: web::Data<PlayerStore>) -> Result<HttpResponse, ApiError> {
    let id = store.random_id().ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/players/{id}")))
        .finish())
}

/// GET /players/{id}
pub async fn get_player(
    path: web::Path<String>,
    store: web::Data<PlayerStore>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let player = store.get(&id).ok_or(ApiError::NotFound)?;
    json_response(&player)
}

async fn collection_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET, POST"))
        .content_type("text/plain; charset=utf-8")
        .body("method not allowed")
}

async fn item_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET"))
        .content_type("text/plain; charset=utf-8")
        .body("method not allowed")
}

/// Exactly one path segment is accepted after `/players/`; deeper paths fall
/// through to the app-wide 404. `/players/random` is registered ahead of the
/// `{id}` template so it wins the match.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/players")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player))
            .default_service(web::to(collection_not_allowed)),
    )
    .service(
        web::resource("/players/random")
            .route(web::get().to(random_player))
            .default_service(web::to(item_not_allowed)),
    )
    .service(
        web::resource("/players/{id}")
            .route(web::get().to(get_player))
            .default_service(web::to(item_not_allowed)),
    );
}
