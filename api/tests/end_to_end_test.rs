//! Register, log in and manage subscriptions through the HTTP surface

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_register_login_and_track_subscriptions() {
    let test_app = common::test_app();
    let app = init_app!(test_app);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "phone": "+15551230000", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "phone": "+15551230000", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert!(body["data"]["expires_at"].is_string());
    let bearer = format!("Bearer {}", token);

    let req = test::TestRequest::get()
        .uri("/api/v1/subscriptions")
        .insert_header(("Authorization", bearer.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["subscriptions"], json!([]));

    let req = test::TestRequest::post()
        .uri("/api/v1/subscriptions")
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(json!({ "name": "Netflix", "amount": 199 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Netflix");
    assert_eq!(body["data"]["amount"], json!(199));
    assert_eq!(body["data"]["status"], "active");

    let req = test::TestRequest::get()
        .uri("/api/v1/subscriptions")
        .insert_header(("Authorization", bearer.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
}

#[actix_web::test]
async fn test_subscriptions_require_bearer_token() {
    let test_app = common::test_app();
    let app = init_app!(test_app);

    let req = test::TestRequest::get().uri("/api/v1/subscriptions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/v1/subscriptions")
        .set_json(json!({ "name": "Netflix", "amount": 199 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
