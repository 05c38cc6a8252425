use crate::session::Session;
use crate::storage::SharedStore;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use shared_types::{extract_message, AppConfig, AppError, AppErrorKind};
use std::sync::Arc;

/// Lowercased message fragments that mark a 401 as a dead credential.
const TOKEN_FAILURE_HINTS: [&str; 3] = ["token", "unauthorized", "expired"];

/// Decide whether a failed response must tear down the local session.
///
/// Only 401s qualify, and only when they come from the auth endpoints or
/// the server blames the credential itself. Permission-style 401s and all
/// 403s leave the session alone.
pub fn should_force_logout(status: u16, path: &str, message: Option<&str>) -> bool {
    if status != 401 {
        return false;
    }
    if path.contains("/auth/") {
        return true;
    }
    message
        .map(str::to_lowercase)
        .is_some_and(|m| TOKEN_FAILURE_HINTS.iter().any(|hint| m.contains(hint)))
}

/// Thin REST client over the ProjectHub API.
///
/// Cheap to clone; clones share the HTTP connection pool and the store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    store: SharedStore,
}

impl ApiClient {
    pub fn new(base_url: &str, store: SharedStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            store,
        }
    }

    pub fn from_config(config: &AppConfig, store: SharedStore) -> Self {
        Self::new(config.base_url(), store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, AppError> {
        self.execute(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str) -> Result<Value, AppError> {
        self.execute(Method::POST, path, &[], None).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let body = encode(body)?;
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    pub async fn patch(&self, path: &str) -> Result<Value, AppError> {
        self.execute(Method::PATCH, path, &[], None).await
    }

    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let body = encode(body)?;
        self.execute(Method::PATCH, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        // Read per request so a login or logout takes effect immediately.
        if let Some(token) = Session::token(self.store.as_ref()) {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(%method, path, "api request");
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api request failed to send");
            AppError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        let payload = parse_body(&text);

        if (200..300).contains(&status) {
            return Ok(payload);
        }

        let mut err = AppError::from_status(status, &payload);
        tracing::debug!(%method, path, status, message = %err.message, "api error response");
        if should_force_logout(status, path, extract_message(&payload).as_deref()) {
            tracing::warn!(path, "credential rejected, clearing local session");
            self.store.clear();
            err.kind = AppErrorKind::SessionExpired;
        }
        Err(err)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, AppError> {
    serde_json::to_value(body).map_err(|e| AppError::decode(format!("failed to encode request: {e}")))
}

/// Empty bodies become `null`; non-JSON bodies are kept as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
