//! Common test utilities.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use itemd::server::{self, AppState};
use itemd::service::ItemService;
use itemd::store::CollectionStore;
use itemd::store::file::FileCollectionStore;

/// A router backed by a store file inside its own temp directory.
pub struct TestApp {
    pub router: Router,
    pub store_path: PathBuf,
    pub public_dir: PathBuf,
    _tmp: TempDir,
}

/// Create a test app with an empty collection.
pub async fn test_app() -> TestApp {
    let tmp = TempDir::new().unwrap();
    let store_path = tmp.path().join("data").join("items.json");
    let public_dir = tmp.path().join("public");
    std::fs::create_dir(&public_dir).unwrap();

    let store = FileCollectionStore::new(&store_path);
    store.ensure().await.unwrap();

    let state = AppState {
        items: ItemService::new(Arc::new(store)),
        public_dir: public_dir.clone(),
    };

    TestApp {
        router: server::build_app(state, 30),
        store_path,
        public_dir,
        _tmp: tmp,
    }
}

impl TestApp {
    /// Send a request and decode the body as JSON (`Null` when empty).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::put(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Current contents of the backing file.
    pub fn stored(&self) -> String {
        std::fs::read_to_string(&self.store_path).unwrap()
    }
}
