//! `localStorage`-backed session storage.
//!
//! Reads are served from an in-memory mirror populated once at startup;
//! writes update the mirror and are pushed to the browser.

use std::collections::HashMap;

use client::{KeyValueStore, MemoryStore, SESSION_KEYS};
use dioxus::prelude::*;

const SNAPSHOT_JS: &str = r#"
    var out = {};
    try {
        for (var i = 0; i < localStorage.length; i++) {
            var key = localStorage.key(i);
            out[key] = localStorage.getItem(key);
        }
    } catch (e) {}
    return out;
"#;

/// Read every persisted entry. An unavailable storage reads as empty.
pub async fn read_snapshot() -> Vec<(String, String)> {
    match document::eval(SNAPSHOT_JS).join::<HashMap<String, String>>().await {
        Ok(entries) => entries
            .into_iter()
            .filter(|(key, _)| SESSION_KEYS.contains(&key.as_str()))
            .collect(),
        Err(e) => {
            tracing::warn!(error = ?e, "could not read browser storage");
            Vec::new()
        }
    }
}

#[derive(Debug, Default)]
pub struct BrowserStore {
    mirror: MemoryStore,
}

impl BrowserStore {
    pub fn hydrate(entries: Vec<(String, String)>) -> Self {
        Self {
            mirror: MemoryStore::with_entries(entries),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.mirror.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.mirror.set(key, value);
        run(format!(
            "try {{ localStorage.setItem({}, {}); }} catch (e) {{}}",
            js_string(key),
            js_string(value)
        ));
    }

    fn remove(&self, key: &str) {
        self.mirror.remove(key);
        run(format!(
            "try {{ localStorage.removeItem({}); }} catch (e) {{}}",
            js_string(key)
        ));
    }

    fn clear(&self) {
        self.mirror.clear();
        run("try { localStorage.clear(); } catch (e) {}".to_string());
    }
}

fn run(script: String) {
    let _ = document::eval(&script);
}

/// Quote `raw` as a JavaScript string literal.
fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}
