//! End-to-end tests for the signup / confirm / login / identity flow.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use ch_api::app::create_app;

use common::TestContext;

#[actix_web::test]
async fn signup_returns_created_account_without_password() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "ann@example.com",
            "username": "ann",
            "password": "s3cret-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "ann@example.com");
    assert_eq!(body["verified"], false);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn duplicate_signup_is_conflict() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({
                "email": "ann@example.com",
                "username": "ann",
                "password": "s3cret-password",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn signup_with_invalid_email_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "not-an-email",
            "username": "ann",
            "password": "s3cret-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_requires_verified_email() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;

    // Sign up but do not confirm.
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "ann@example.com",
            "username": "ann",
            "password": "s3cret-password",
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form([("username", "ann@example.com"), ("password", "s3cret-password")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email not verified");
}

#[actix_web::test]
async fn confirm_then_login_issues_bearer_tokens() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "ann@example.com",
            "username": "ann",
            "password": "s3cret-password",
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    // Confirm through the verification link.
    let token = ctx.auth.issue_email_token("ann@example.com").unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/confirm/{token}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Login with the username this time (no `@` dispatch path).
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form([("username", "ann"), ("password", "s3cret-password")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert!(body["access_token"].as_str().unwrap().len() > 20);
    assert!(body["refresh_token"].as_str().unwrap().len() > 20);
}

#[actix_web::test]
async fn confirm_rejects_garbage_and_wrong_scope_tokens() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;
    ctx.seed_verified_user("ann@example.com", "ann", "s3cret-password")
        .await;

    // Broken link.
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/confirm/garbage")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    // Access token in the confirmation slot.
    let access = ctx.access_token_for("ann@example.com");
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/confirm/{access}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn me_requires_valid_access_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;
    ctx.seed_verified_user("ann@example.com", "ann", "s3cret-password")
        .await;

    // Missing token.
    let req = test::TestRequest::get().uri("/api/v1/users/me").to_request();
    let resp = test::try_call_service(&app, req).await;
    assert_eq!(
        resp.err().map(|e| e.as_response_error().status_code()),
        Some(StatusCode::UNAUTHORIZED)
    );

    // Valid token.
    let token = ctx.access_token_for("ann@example.com");
    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "ann@example.com");
}

#[actix_web::test]
async fn refresh_token_is_not_accepted_as_bearer() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;
    ctx.seed_verified_user("ann@example.com", "ann", "s3cret-password")
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form([("username", "ann@example.com"), ("password", "s3cret-password")])
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let refresh = body["refresh_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(("Authorization", format!("Bearer {refresh}")))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    assert_eq!(
        resp.err().map(|e| e.as_response_error().status_code()),
        Some(StatusCode::UNAUTHORIZED)
    );
}

#[actix_web::test]
async fn me_is_rate_limited() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(
        ctx.state.clone(),
        ctx.identity.clone(),
        ctx.rate_limit.clone(),
    ))
    .await;
    ctx.seed_verified_user("ann@example.com", "ann", "s3cret-password")
        .await;
    let token = ctx.access_token_for("ann@example.com");

    // Default window allows 5 requests; the 6th gets 429.
    for _ in 0..5 {
        let req = test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    assert_eq!(
        resp.err().map(|e| e.as_response_error().status_code()),
        Some(StatusCode::TOO_MANY_REQUESTS)
    );
}
