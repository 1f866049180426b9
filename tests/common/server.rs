//! Mock catalog lifecycle management
//!
//! Spawns an axum server that plays the part of an EventCatalog instance,
//! serving fixture documents by path. Each test gets an isolated server on
//! an ephemeral port.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::default_documents;

#[derive(Clone)]
struct MockState {
    documents: Arc<HashMap<String, String>>,
    hits: Arc<AtomicUsize>,
}

/// A mock EventCatalog serving fixture documents over HTTP.
///
/// The server task is aborted when this is dropped.
pub struct MockCatalog {
    /// Base URL for the catalog (e.g., "http://127.0.0.1:12345")
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockCatalog {
    /// Spawn a mock catalog serving the default fixture documents.
    pub async fn spawn_default() -> Self {
        Self::spawn(default_documents()).await
    }

    /// Spawn a mock catalog serving the given documents, keyed by path.
    /// Unknown paths return 404.
    pub async fn spawn(documents: HashMap<String, String>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            documents: Arc::new(documents),
            hits: hits.clone(),
        };
        let app = Router::new().fallback(serve_document).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock catalog server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
            handle,
        }
    }

    /// Total number of requests the mock has served.
    pub fn request_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_document(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.documents.get(uri.path()) {
        Some(body) => (StatusCode::OK, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
