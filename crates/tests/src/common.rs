use axum::{
    body::Bytes,
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use client::{ApiClient, KeyValueStore, MemoryStore, SharedStore};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::MutexGuard;

/// Global mutex keeping tests that share process-wide state sequential.
static TEST_MUTEX: std::sync::LazyLock<tokio::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| tokio::sync::Mutex::new(()));

/// One request as the mock API saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Value,
}

impl Recorded {
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key).then(|| v.to_string())
        })
    }
}

#[derive(Default)]
struct MockInner {
    routes: HashMap<(String, String), (u16, Value)>,
    requests: Vec<Recorded>,
}

/// Programmable stand-in for the REST API.
///
/// Every request is recorded; responses are looked up by method and path.
/// Unregistered routes answer 404.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<MockInner>>,
}

impl MockApi {
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Recorded requests matching `method` and `path`, in arrival order.
    pub fn calls(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn handle(
    axum::extract::State(api): axum::extract::State<MockApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().unwrap_or_default().to_string(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };

    let mut inner = api.inner.lock().unwrap();
    let reply = inner
        .routes
        .get(&(recorded.method.clone(), recorded.path.clone()))
        .cloned();
    inner.requests.push(recorded);
    drop(inner);

    match reply {
        Some((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap();
            if body.is_null() {
                status.into_response()
            } else {
                (status, Json(body)).into_response()
            }
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))).into_response(),
    }
}

/// A running mock server plus a client pointed at it.
pub struct TestContext {
    pub api: MockApi,
    pub client: ApiClient,
    pub store: Arc<MemoryStore>,
    _guard: MutexGuard<'static, ()>,
}

/// Start a mock API on an ephemeral port and build a client with empty storage.
pub async fn test_app() -> TestContext {
    test_app_with_store(MemoryStore::new()).await
}

/// Same as [`test_app`], seeding storage first (e.g. with a live session).
pub async fn test_app_with_store(store: MemoryStore) -> TestContext {
    let guard = TEST_MUTEX.lock().await;

    let api = MockApi::default();
    let router = Router::new().fallback(handle).with_state(api.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let store = Arc::new(store);
    let shared: SharedStore = store.clone();
    let client = ApiClient::new(&format!("http://{addr}"), shared);

    TestContext {
        api,
        client,
        store,
        _guard: guard,
    }
}

/// Storage holding a signed-in session for `role`.
pub fn signed_in_store(role: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.set("token", "test-token");
    store.set("role", role);
    store.set("user", "Test User");
    store.set("userId", "u-1");
    store
}

pub fn user_json(id: &str, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": role,
        "isActive": true
    })
}

pub fn project_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "in_progress",
        "priority": "high",
        "progress": 40,
        "owner": { "name": "Owner One" },
        "teamMembers": []
    })
}
