#![allow(dead_code)]

use actix_web::web;
use base64::{engine::general_purpose::STANDARD, Engine};
use roster_server::{http::admin::AdminGate, store::PlayerStore};

pub const ADMIN_PASSWORD: &str = "correct-horse";

pub fn store() -> web::Data<PlayerStore> {
    web::Data::new(PlayerStore::new())
}

pub fn gate() -> web::Data<AdminGate> {
    web::Data::new(AdminGate::new(ADMIN_PASSWORD))
}

pub const MAX_BODY_BYTES: usize = 1024;

pub fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}
