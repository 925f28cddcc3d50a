use marketplace_client::error::AppError;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_app_error_display_http() {
    let error = AppError::from_response(StatusCode::BAD_REQUEST, json!({}));
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_domain_is_bare_message() {
    let error = AppError::Domain("File too large".to_string());
    assert_eq!(error.to_string(), "File too large");
}

#[test]
fn test_app_error_display_store() {
    let error = AppError::Store("lock poisoned".to_string());
    assert_eq!(error.to_string(), "session store error: lock poisoned");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("listing id must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: listing id must not be empty");
}

#[test]
fn test_app_error_detail_extraction() {
    let error = AppError::from_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"detail": "Amount must be positive"}),
    );
    assert_eq!(error.detail(), Some("Amount must be positive"));
    assert_eq!(error.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert!(!error.is_unauthorized());
}

#[test]
fn test_app_error_non_string_detail_is_ignored() {
    let error = AppError::from_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"detail": [{"loc": ["body", "amount"], "msg": "field required"}]}),
    );
    assert_eq!(error.detail(), None);
}

#[test]
fn test_app_error_unauthorized() {
    let error = AppError::from_response(StatusCode::UNAUTHORIZED, serde_json::Value::Null);
    assert!(error.is_unauthorized());
    assert!(!AppError::Domain("x".into()).is_unauthorized());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
