#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Query,
    http::{StatusCode, header},
    routing::get,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use til_random::domain::entities::EntryRef;
use til_random::domain::repositories::EntryRepository;
use til_random::infrastructure::persistence::{DatasetteEntryRepository, InMemoryEntryRepository};
use til_random::state::AppState;

/// A local stand-in for the Datasette JSON API.
pub struct DataApiStub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl DataApiStub {
    pub fn repository(&self) -> DatasetteEntryRepository {
        DatasetteEntryRepository::new(&self.base_url, "til").unwrap()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Serves `body` with `status` on `/til.json` and a healthy `/-/versions.json`.
pub async fn spawn_data_api(status: StatusCode, body: &'static str) -> DataApiStub {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new()
        .route(
            "/til.json",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let recorded = recorded.clone();
                async move {
                    recorded.lock().unwrap().push(params);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        )
        .route(
            "/-/versions.json",
            get(|| async { Json(json!({ "datasette": { "version": "0.65" } })) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    DataApiStub {
        base_url: format!("http://{addr}/"),
        requests,
    }
}

/// Returns a base URL on a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/")
}

pub fn create_test_state(repository: Arc<dyn EntryRepository>) -> AppState {
    AppState::new(repository)
}

pub fn create_in_memory_state(entries: &[(&str, &str)]) -> AppState {
    let entries = entries
        .iter()
        .map(|(topic, slug)| EntryRef::new(*topic, *slug))
        .collect();

    create_test_state(Arc::new(InMemoryEntryRepository::new(entries)))
}
