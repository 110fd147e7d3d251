mod common;

use axum::http::StatusCode;
use til_random::domain::entities::EntryRef;
use til_random::domain::repositories::{EntryRepository, LookupError};
use til_random::infrastructure::persistence::DatasetteEntryRepository;
use til_random::infrastructure::persistence::datasette_entry_repository::RANDOM_ENTRY_SQL;

#[tokio::test]
async fn test_random_entry_returns_first_row() {
    let stub = common::spawn_data_api(
        StatusCode::OK,
        r#"[{"topic": "python", "slug": "dataclasses"}]"#,
    )
    .await;

    let entry = stub.repository().random_entry().await.unwrap();

    assert_eq!(entry, Some(EntryRef::new("python", "dataclasses")));
}

#[tokio::test]
async fn test_random_entry_sends_query() {
    let stub = common::spawn_data_api(StatusCode::OK, "[]").await;

    stub.repository().random_entry().await.unwrap();

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["sql"], RANDOM_ENTRY_SQL);
    assert_eq!(requests[0]["_shape"], "array");
}

#[tokio::test]
async fn test_random_entry_takes_only_first_row() {
    let stub = common::spawn_data_api(
        StatusCode::OK,
        r#"[{"topic": "rust", "slug": "lifetimes"}, {"topic": "go", "slug": "channels"}]"#,
    )
    .await;

    let entry = stub.repository().random_entry().await.unwrap().unwrap();

    assert_eq!(entry.path(), "/rust/lifetimes");
}

#[tokio::test]
async fn test_empty_array_is_no_entry() {
    let stub = common::spawn_data_api(StatusCode::OK, "[]").await;

    let entry = stub.repository().random_entry().await.unwrap();

    assert!(entry.is_none());
}

#[tokio::test]
async fn test_object_body_is_decode_error() {
    let stub = common::spawn_data_api(
        StatusCode::OK,
        r#"{"topic": "python", "slug": "dataclasses"}"#,
    )
    .await;

    let result = stub.repository().random_entry().await;

    assert!(matches!(result, Err(LookupError::Decode(_))));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let stub = common::spawn_data_api(StatusCode::OK, "<html>oops</html>").await;

    let result = stub.repository().random_entry().await;

    assert!(matches!(result, Err(LookupError::Decode(_))));
}

#[tokio::test]
async fn test_row_missing_slug_is_decode_error() {
    let stub = common::spawn_data_api(StatusCode::OK, r#"[{"topic": "python"}]"#).await;

    let result = stub.repository().random_entry().await;

    assert!(matches!(result, Err(LookupError::Decode(_))));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let stub = common::spawn_data_api(
        StatusCode::BAD_REQUEST,
        r#"{"ok": false, "error": "no such table: til"}"#,
    )
    .await;

    let result = stub.repository().random_entry().await;

    assert!(matches!(result, Err(LookupError::Status(400))));
}

#[tokio::test]
async fn test_unreachable_api_is_request_error() {
    let base_url = common::unreachable_base_url().await;
    let repository = DatasetteEntryRepository::new(&base_url, "til").unwrap();

    let result = repository.random_entry().await;

    assert!(matches!(result, Err(LookupError::Request(_))));
}

#[tokio::test]
async fn test_health_check() {
    let stub = common::spawn_data_api(StatusCode::OK, "[]").await;
    assert!(stub.repository().health_check().await);

    let base_url = common::unreachable_base_url().await;
    let repository = DatasetteEntryRepository::new(&base_url, "til").unwrap();
    assert!(!repository.health_check().await);
}
