//! Password-gated admin page (HTTP Basic auth)

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine};
use futures_util::future::{ready, Ready};

use crate::error::ApiError;

const ADMIN_PAGE: &str = "<html><body><h1>Secret admin portal</h1></body></html>";

//////////////////////////////////////////////////
// ─────────  BasicCredentials extractor  ─────────
//////////////////////////////////////////////////

/// Username / password pair from `Authorization: Basic <base64>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse a raw `Authorization` header value.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, encoded) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(BasicCredentials {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}

impl FromRequest for BasicCredentials {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
        let creds = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(BasicCredentials::parse)
            .ok_or(ApiError::Unauthorized);

        ready(creds)
    }
}

//////////////////////////////////////////////////
// Gate
//////////////////////////////////////////////////

/// Holds the configured admin password for the lifetime of the process.
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub const USERNAME: &'static str = "admin";

    pub fn new(password: impl Into<String>) -> Self {
        AdminGate {
            password: password.into(),
        }
    }

    pub fn verify(&self, creds: &BasicCredentials) -> bool {
        let user_ok = constant_time_eq(creds.username.as_bytes(), Self::USERNAME.as_bytes());
        let pass_ok = constant_time_eq(creds.password.as_bytes(), self.password.as_bytes());
        user_ok & pass_ok
    }
}

// Length mismatch returns early; only the contents are compared in constant time.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

//////////////////////////////////////////////////
// ANY /admin
//////////////////////////////////////////////////
pub async fn admin_page(
    gate: web::Data<AdminGate>,
    creds: BasicCredentials,
) -> Result<HttpResponse, ApiError> {
    if !gate.verify(&creds) {
        log::warn!("admin login rejected for user {:?}", creds.username);
        return Err(ApiError::Unauthorized);
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(ADMIN_PAGE))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/admin").to(admin_page));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_valid_header() {
        let creds = BasicCredentials::parse(&header_for("admin:s3cret")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "s3cret");
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = BasicCredentials::parse(&header_for("admin:a:b")).unwrap();
        assert_eq!(creds.password, "a:b");
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(BasicCredentials::parse("Bearer abc").is_none());
        assert!(BasicCredentials::parse("Basic").is_none());
        assert!(BasicCredentials::parse("Basic !!!not-base64").is_none());
        assert!(BasicCredentials::parse(&header_for("no-colon")).is_none());
    }

    #[test]
    fn gate_requires_admin_user_and_password() {
        let gate = AdminGate::new("pw");
        let check = |u: &str, p: &str| {
            gate.verify(&BasicCredentials {
                username: u.into(),
                password: p.into(),
            })
        };
        assert!(check("admin", "pw"));
        assert!(!check("admin", "pw2"));
        assert!(!check("admin", ""));
        assert!(!check("root", "pw"));
        assert!(!check("Admin", "pw"));
    }
}
