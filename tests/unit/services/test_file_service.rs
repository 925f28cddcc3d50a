use crate::common::{anonymous_context, authenticated_context, client_for};
use marketplace_client::prelude::*;
use mockito::Matcher;
use serde_json::json;
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn upload_document_returns_backend_body() {
    let mut ctx = authenticated_context("tok").await;
    let mock = ctx
        .server
        .mock("POST", "/api/files/upload")
        .match_header("authorization", "Bearer tok")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="folder""#.to_string()),
            Matcher::Regex("listings".to_string()),
            Matcher::Regex(r#"name="public""#.to_string()),
            Matcher::Regex("true".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"path": "listings/photo.png", "url": "https://cdn/photo.png"}"#)
        .create_async()
        .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let service = FileServiceImpl::new(ctx.client.clone());
    let stored = service
        .upload_document(
            UploadFile::new("photo.png", vec![1u8; 32]).with_mime_type("image/png"),
            "listings",
            true,
            Some(Arc::new(move |p| sink.lock().unwrap().push(p))),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(stored["path"], "listings/photo.png");
    assert_eq!(seen.lock().unwrap().last(), Some(&100));
}

#[tokio::test]
async fn upload_document_uses_backend_detail() {
    let mut ctx = authenticated_context("tok").await;
    ctx.server
        .mock("POST", "/api/files/upload")
        .with_status(413)
        .with_body(r#"{"detail": "File too large"}"#)
        .create_async()
        .await;

    let service = FileServiceImpl::new(ctx.client.clone());
    let err = service
        .upload_document(UploadFile::new("big.bin", vec![0u8; 8]), "deals", false, None)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "File too large");
}

#[tokio::test]
async fn upload_document_without_detail_uses_default_message() {
    let mut ctx = authenticated_context("tok").await;
    ctx.server
        .mock("POST", "/api/files/upload")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let service = FileServiceImpl::new(ctx.client.clone());
    let err = service
        .upload_document(UploadFile::new("a.pdf", "x"), "deals", false, None)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Document upload failed");
}

#[tokio::test]
async fn unreachable_backend_uses_default_message() {
    let (client, _) = client_for("http://127.0.0.1:1", None);
    let service = FileServiceImpl::new(client);

    let err = service.list_documents("deals", None).await.unwrap_err();

    assert!(matches!(&err, AppError::Domain(message) if message == "Failed to list documents"));
}

#[tokio::test]
async fn document_url_uses_default_bucket() {
    let mut ctx = anonymous_context().await;
    let mock = ctx
        .server
        .mock("GET", "/api/files/url")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("path".into(), "deals/nda.pdf".into()),
            Matcher::UrlEncoded("bucket".into(), "marketplace-files".into()),
            Matcher::UrlEncoded("public".into(), "false".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"url": "https://storage/signed/nda.pdf"}"#)
        .create_async()
        .await;

    let service = FileServiceImpl::new(ctx.client.clone());
    let url = service
        .get_document_url("deals/nda.pdf", None, false)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(url, "https://storage/signed/nda.pdf");
}

#[tokio::test]
async fn document_url_error_messages() {
    let mut ctx = anonymous_context().await;
    ctx.server
        .mock("GET", "/api/files/url")
        .match_query(Matcher::UrlEncoded("path".into(), "missing.pdf".into()))
        .with_status(404)
        .with_body(r#"{"detail": "File not found"}"#)
        .create_async()
        .await;
    ctx.server
        .mock("GET", "/api/files/url")
        .match_query(Matcher::UrlEncoded("path".into(), "broken.pdf".into()))
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let service = FileServiceImpl::new(ctx.client.clone());
    let missing = service
        .get_document_url("missing.pdf", None, true)
        .await
        .unwrap_err();
    let broken = service
        .get_document_url("broken.pdf", None, true)
        .await
        .unwrap_err();

    assert_eq!(missing.to_string(), "File not found");
    assert_eq!(broken.to_string(), "Failed to get document URL");
}

#[tokio::test]
async fn delete_and_list_honour_explicit_bucket() {
    let mut ctx = authenticated_context("tok").await;
    let delete = ctx
        .server
        .mock("DELETE", "/api/files/delete")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("path".into(), "profile/avatar.png".into()),
            Matcher::UrlEncoded("bucket".into(), "avatars".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"deleted": true}"#)
        .create_async()
        .await;
    let list = ctx
        .server
        .mock("GET", "/api/files/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("folder".into(), "profile".into()),
            Matcher::UrlEncoded("bucket".into(), "avatars".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"name": "avatar.png"}]"#)
        .create_async()
        .await;

    let service = FileServiceImpl::new(ctx.client.clone());
    let deleted = service
        .delete_document("profile/avatar.png", Some("avatars"))
        .await
        .unwrap();
    let listed = service.list_documents("profile", Some("avatars")).await.unwrap();

    delete.assert_async().await;
    list.assert_async().await;
    assert_eq!(deleted, json!({"deleted": true}));
    assert_eq!(listed, json!([{"name": "avatar.png"}]));
}

#[tokio::test]
async fn delete_document_failure_without_detail() {
    let mut ctx = authenticated_context("tok").await;
    ctx.server
        .mock("DELETE", "/api/files/delete")
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let service = FileServiceImpl::new(ctx.client.clone());
    let err = service.delete_document("x.pdf", None).await.unwrap_err();

    assert_eq!(err.to_string(), "Document deletion failed");
}
