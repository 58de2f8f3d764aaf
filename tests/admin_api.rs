//! `/admin` behind HTTP Basic auth.

mod common;

use actix_web::{
    http::{header, StatusCode},
    test,
};
use roster_server::http::routes;

#[actix_web::test]
async fn correct_credentials_show_portal() {
    let app = test::init_service(routes::app(
        common::store(),
        common::gate(),
        common::MAX_BODY_BYTES,
    ))
    .await;
    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header((
            header::AUTHORIZATION,
            common::basic_auth("admin", common::ADMIN_PASSWORD),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body)
        .unwrap()
        .contains("Secret admin portal"));
}

#[actix_web::test]
async fn any_method_reaches_the_gate() {
    let app = test::init_service(routes::app(
        common::store(),
        common::gate(),
        common::MAX_BODY_BYTES,
    ))
    .await;
    let req = test::TestRequest::post()
        .uri("/admin")
        .insert_header((
            header::AUTHORIZATION,
            common::basic_auth("admin", common::ADMIN_PASSWORD),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn bad_credentials_are_401() {
    let app = test::init_service(routes::app(
        common::store(),
        common::gate(),
        common::MAX_BODY_BYTES,
    ))
    .await;

    let cases = [
        Some(common::basic_auth("admin", "wrongpass")),
        Some(common::basic_auth("root", common::ADMIN_PASSWORD)),
        Some(common::basic_auth("admin", "")),
        Some("Bearer token".to_string()),
        Some("Basic %%%".to_string()),
        None,
    ];
    for auth in cases {
        let mut req = test::TestRequest::get().uri("/admin");
        if let Some(auth) = &auth {
            req = req.insert_header((header::AUTHORIZATION, auth.as_str()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "auth {auth:?}");
        assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
