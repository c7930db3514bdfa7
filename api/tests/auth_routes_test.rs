//! Route tests for the registration, activation and password reset endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use accounts_api::create_app;
use accounts_core::repositories::AccountRepository;
use accounts_core::services::{BcryptPasswordHasher, PasswordHasher};

use common::{activation_code, context, reset_code, MAX_PAYLOAD};

#[actix_web::test]
async fn test_register_activate_flow() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Jane", "email": "Jane@Example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["notificationDelivered"], true);

    let mail = ctx.mail.last_message_to("jane@example.com").unwrap();
    assert_eq!(mail.subject, "Activate your account at Mendover");

    let code = activation_code(&ctx.repository, "jane@example.com").await;
    assert!(mail.text.contains(&code));

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/activate")
        .set_json(json!({ "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Codes are single use
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/activate")
        .set_json(json!({ "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CODE");

    let account = ctx.repository.find_by_email("jane@example.com").await.unwrap().unwrap();
    assert!(account.is_active);
}

#[actix_web::test]
async fn test_register_duplicate_email_conflict() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({ "email": "dup@example.com", "password": "secret1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
        if expected == StatusCode::CONFLICT {
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "EMAIL_EXISTS");
        }
    }
    assert_eq!(ctx.repository.len().await, 1);
}

#[actix_web::test]
async fn test_register_validation_error() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": "not-an-email", "password": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["fields"]["email"].is_array());
    assert!(body["details"]["fields"]["password"].is_array());
    assert!(ctx.repository.is_empty().await);
}

#[actix_web::test]
async fn test_malformed_json_is_validation_error() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_register_survives_mail_failure() {
    let ctx = context();
    ctx.mail.set_simulate_failure(true);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": "nomail@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["notificationDelivered"], false);
    assert_eq!(ctx.repository.len().await, 1);
}

#[actix_web::test]
async fn test_resend_activation_replaces_code() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": "re@example.com", "password": "secret1" }))
        .to_request();
    test::call_service(&app, req).await;
    let first = activation_code(&ctx.repository, "re@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-activation")
        .set_json(json!({ "email": "re@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.mail.get_message_count(), 2);

    let second = activation_code(&ctx.repository, "re@example.com").await;
    assert_ne!(first, second);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/activate")
        .set_json(json!({ "code": first }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/activate")
        .set_json(json!({ "code": second }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Already active now
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-activation")
        .set_json(json!({ "email": "re@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_ALREADY_ACTIVE");
}

#[actix_web::test]
async fn test_resend_activation_unknown_email() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-activation")
        .insert_header(("Accept-Language", "vi"))
        .set_json(json!({ "email": "ghost@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_NOT_FOUND");
    assert_eq!(body["message"], "Tài khoản không tồn tại");
}

#[actix_web::test]
async fn test_password_reset_flow() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": "reset@example.com", "password": "secret1" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(json!({ "email": "reset@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "reset@example.com");

    let mail = ctx.mail.last_message_to("reset@example.com").unwrap();
    assert_eq!(mail.subject, "Change your password account at Mendover");
    let code = reset_code(&ctx.repository, "reset@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/reset-password")
        .set_json(json!({
            "email": "reset@example.com",
            "code": code,
            "password": "newpass1",
            "confirmPassword": "newpass2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "PASSWORD_MISMATCH");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/reset-password")
        .set_json(json!({
            "email": "reset@example.com",
            "code": code,
            "password": "newpass1",
            "confirmPassword": "newpass1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["success"], true);

    let account = ctx.repository.find_by_email("reset@example.com").await.unwrap().unwrap();
    assert!(BcryptPasswordHasher::with_cost(4).verify("newpass1", &account.password).await);
    assert!(account.reset_code.is_none());

    // Replaying the consumed code fails
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/reset-password")
        .set_json(json!({
            "email": "reset@example.com",
            "code": code,
            "password": "another1",
            "confirmPassword": "another1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CODE");
}

#[actix_web::test]
async fn test_forgot_password_mail_failure() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": "down@example.com", "password": "secret1" }))
        .to_request();
    test::call_service(&app, req).await;

    ctx.mail.set_simulate_failure(true);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(json!({ "email": "down@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOTIFICATION_FAILURE");
}
