use crate::common::{anonymous_context, authenticated_context};
use marketplace_client::prelude::*;
use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn listings_come_from_primary_when_it_succeeds() {
    let mut ctx = anonymous_context().await;
    let primary = ctx
        .server
        .mock("GET", "/api/listings")
        .with_status(200)
        .with_body(r#"[{"id": "l-1"}]"#)
        .expect(1)
        .create_async()
        .await;
    let featured = ctx
        .server
        .mock("GET", "/api/listings/featured")
        .expect(0)
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    let listings = service.get_listings(&ListingFilter::new()).await.unwrap();

    primary.assert_async().await;
    featured.assert_async().await;
    assert_eq!(listings, json!([{"id": "l-1"}]));
}

#[tokio::test]
async fn listings_fall_back_to_featured() {
    let mut ctx = anonymous_context().await;
    let primary = ctx
        .server
        .mock("GET", "/api/listings")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let featured = ctx
        .server
        .mock("GET", "/api/listings/featured")
        .with_status(200)
        .with_body(r#"[{"id": "featured-1"}]"#)
        .expect(1)
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    let listings = service.get_listings(&ListingFilter::new()).await.unwrap();

    primary.assert_async().await;
    featured.assert_async().await;
    assert_eq!(listings, json!([{"id": "featured-1"}]));
}

#[tokio::test]
async fn listings_surface_primary_error_when_both_fail() {
    let mut ctx = anonymous_context().await;
    ctx.server
        .mock("GET", "/api/listings")
        .with_status(503)
        .with_body(r#"{"detail": "listings offline"}"#)
        .create_async()
        .await;
    ctx.server
        .mock("GET", "/api/listings/featured")
        .with_status(500)
        .with_body(r#"{"detail": "featured offline"}"#)
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    let err = service.get_listings(&ListingFilter::new()).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(err.detail(), Some("listings offline"));
}

#[tokio::test]
async fn listings_filter_is_sent_as_query() {
    let mut ctx = anonymous_context().await;
    let mock = ctx
        .server
        .mock("GET", "/api/listings")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "active".into()),
            Matcher::UrlEncoded("location".into(), "Austin".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    let filter = ListingFilter::new().with_status("active").with_location("Austin");
    service.get_listings(&filter).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn get_listing_is_repeatable() {
    let mut ctx = anonymous_context().await;
    let mock = ctx
        .server
        .mock("GET", "/api/listings/l-42")
        .with_status(200)
        .with_body(r#"{"id": "l-42", "title": "Coffee shop"}"#)
        .expect(2)
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    let first = service.get_listing("l-42").await.unwrap();
    let second = service.get_listing("l-42").await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn listing_mutations_hit_their_endpoints() {
    let mut ctx = authenticated_context("seller").await;
    let create = ctx
        .server
        .mock("POST", "/api/listings")
        .match_body(Matcher::Json(json!({"title": "Bakery"})))
        .with_status(201)
        .with_body(r#"{"id": "l-1"}"#)
        .create_async()
        .await;
    let update = ctx
        .server
        .mock("PUT", "/api/listings/l-1")
        .match_body(Matcher::Json(json!({"asking_price": 250000})))
        .with_status(200)
        .with_body(r#"{"id": "l-1"}"#)
        .create_async()
        .await;
    let publish = ctx
        .server
        .mock("PUT", "/api/listings/l-1/publish")
        .with_status(200)
        .with_body(r#"{"status": "active"}"#)
        .create_async()
        .await;
    let delete = ctx
        .server
        .mock("DELETE", "/api/listings/l-1")
        .with_status(204)
        .create_async()
        .await;
    let seller = ctx
        .server
        .mock("GET", "/api/listings/seller/u-9")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    service.create_listing(&json!({"title": "Bakery"})).await.unwrap();
    service
        .update_listing("l-1", &json!({"asking_price": 250000}))
        .await
        .unwrap();
    assert_eq!(
        service.publish_listing("l-1").await.unwrap(),
        json!({"status": "active"})
    );
    assert_eq!(service.delete_listing("l-1").await.unwrap(), Value::Null);
    service.get_seller_listings("u-9").await.unwrap();

    create.assert_async().await;
    update.assert_async().await;
    publish.assert_async().await;
    delete.assert_async().await;
    seller.assert_async().await;
}

#[tokio::test]
async fn blank_listing_id_is_rejected_locally() {
    let mut ctx = anonymous_context().await;
    let mock = ctx
        .server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = ListingServiceImpl::new(ctx.client.clone());
    let err = service.get_listing("  ").await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::InvalidInput(_)));
}
