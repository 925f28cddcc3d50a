use crate::common::{anonymous_context, authenticated_context};
use marketplace_client::prelude::*;
use mockito::Matcher;
use serde_json::{Value, json};

#[tokio::test]
async fn login_stores_token_for_later_requests() {
    let mut ctx = anonymous_context().await;
    let login = ctx
        .server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "email": "founder@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_body(r#"{"access_token": "jwt-1", "token_type": "bearer", "user_id": "u-1"}"#)
        .expect(1)
        .create_async()
        .await;
    let profile = ctx
        .server
        .mock("GET", "/api/profiles/me")
        .match_header("authorization", "Bearer jwt-1")
        .with_status(200)
        .with_body(r#"{"id": "u-1", "email": "founder@example.com"}"#)
        .expect(1)
        .create_async()
        .await;

    let service = AuthServiceImpl::new(ctx.client.clone());
    let response = service.login("founder@example.com", "hunter2").await.unwrap();
    let me = service.get_current_user().await.unwrap();

    login.assert_async().await;
    profile.assert_async().await;
    assert_eq!(response.access_token, "jwt-1");
    assert_eq!(response.token_type.as_deref(), Some("bearer"));
    assert_eq!(response.extra.get("user_id"), Some(&json!("u-1")));
    assert_eq!(ctx.session().read().unwrap().as_deref(), Some("jwt-1"));
    assert_eq!(me["id"], "u-1");
}

#[tokio::test]
async fn failed_login_keeps_previous_state() {
    let mut ctx = anonymous_context().await;
    ctx.server
        .mock("POST", "/api/auth/login")
        .with_status(400)
        .with_body(r#"{"detail": "Incorrect email or password"}"#)
        .create_async()
        .await;

    let service = AuthServiceImpl::new(ctx.client.clone());
    let err = service.login("a@b.c", "wrong").await.unwrap_err();

    assert_eq!(err.detail(), Some("Incorrect email or password"));
    assert_eq!(ctx.session().read().unwrap(), None);
    assert_eq!(ctx.logout_count(), 0);
}

#[tokio::test]
async fn logout_clears_token_and_broadcasts() {
    let ctx = authenticated_context("jwt-1").await;
    let user = CurrentUser::new(ctx.client.events());
    user.set(json!({"id": "u-1"}));

    let service = AuthServiceImpl::new(ctx.client.clone());
    service.logout().await.unwrap();

    assert_eq!(ctx.session().read().unwrap(), None);
    assert_eq!(ctx.logout_count(), 1);
    assert!(!user.is_authenticated());
}

#[tokio::test]
async fn expired_token_clears_current_user() {
    let mut ctx = authenticated_context("stale").await;
    ctx.server
        .mock("GET", "/api/profiles/me")
        .with_status(401)
        .create_async()
        .await;
    let user = CurrentUser::new(ctx.client.events());
    user.set(json!({"id": "u-1", "verification_level": 3}));
    assert_eq!(user.verification_level(), 3);

    let service = AuthServiceImpl::new(ctx.client.clone());
    assert!(service.get_current_user().await.is_err());

    assert!(user.get().is_none());
    assert_eq!(user.verification_level(), 0);
}

#[tokio::test]
async fn profile_endpoints() {
    let mut ctx = authenticated_context("jwt").await;
    let update = ctx
        .server
        .mock("PUT", "/api/profiles/me")
        .match_body(Matcher::Json(json!({"full_name": "Ada"})))
        .with_status(200)
        .with_body(r#"{"full_name": "Ada"}"#)
        .create_async()
        .await;
    let onboarding = ctx
        .server
        .mock("PUT", "/api/profiles/me/complete-onboarding")
        .with_status(200)
        .with_body(r#"{"onboarding_completed": true}"#)
        .create_async()
        .await;
    let register = ctx
        .server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::PartialJson(json!({"email": "new@example.com"})))
        .with_status(201)
        .with_body(r#"{"id": "u-2"}"#)
        .create_async()
        .await;
    let check = ctx
        .server
        .mock("POST", "/api/auth/check-email")
        .match_body(Matcher::Json(json!({"email": "new@example.com"})))
        .with_status(200)
        .with_body(r#"{"exists": false}"#)
        .create_async()
        .await;

    let service = AuthServiceImpl::new(ctx.client.clone());
    service.update_profile(&json!({"full_name": "Ada"})).await.unwrap();
    let done = service.complete_onboarding().await.unwrap();
    service
        .register(&json!({"email": "new@example.com", "password": "pw"}))
        .await
        .unwrap();
    let exists: Value = service.check_email_exists("new@example.com").await.unwrap();

    update.assert_async().await;
    onboarding.assert_async().await;
    register.assert_async().await;
    check.assert_async().await;
    assert_eq!(done["onboarding_completed"], true);
    assert_eq!(exists, json!({"exists": false}));
}
