//! Canonical list + pagination shape for the backend's inconsistent list payloads.
//!
//! Endpoints answer with a bare array, a keyed collection (`{users: [...]}`),
//! a `data` envelope, or something else that happens to contain an array.
//! [`normalize`] decodes all of them with a fixed precedence and never fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page size used when neither the server nor the caller provides one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Which record collection a list endpoint returns, and the name of its
/// collection-specific total counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub key: &'static str,
    pub total_key: &'static str,
}

impl Collection {
    pub const USERS: Collection = Collection {
        key: "users",
        total_key: "totalUsers",
    };
    pub const PROJECTS: Collection = Collection {
        key: "projects",
        total_key: "totalProjects",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// The page to fetch for a navigation request, or `None` when the
    /// request is out of range or already the current page.
    pub fn target(&self, new_page: u32) -> Option<u32> {
        (new_page >= 1 && new_page <= self.total_pages && new_page != self.current_page)
            .then_some(new_page)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Normalized list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

/// Payload variants in precedence order.
enum Shape<'a> {
    Bare(&'a [Value]),
    Keyed {
        items: &'a [Value],
        meta: Option<&'a Map<String, Value>>,
    },
    FirstArray(&'a [Value]),
    Unrecognized,
}

fn classify<'a>(payload: &'a Value, collection: Collection) -> Shape<'a> {
    let obj = match payload {
        Value::Array(items) => return Shape::Bare(items),
        Value::Object(obj) => obj,
        _ => return Shape::Unrecognized,
    };

    if let Some(Value::Array(items)) = obj.get(collection.key) {
        return Shape::Keyed {
            items,
            meta: obj.get("pagination").and_then(Value::as_object),
        };
    }

    if let Some(Value::Array(items)) = obj.get("data") {
        let meta = obj
            .get("pagination")
            .and_then(Value::as_object)
            .or_else(|| obj.get("meta").and_then(Value::as_object));
        return Shape::Keyed { items, meta };
    }

    obj.values()
        .find_map(Value::as_array)
        .map_or(Shape::Unrecognized, |items| Shape::FirstArray(items))
}

/// A strictly positive number under `key`. Zero, negatives and
/// non-numeric values count as absent.
fn positive(meta: Option<&Map<String, Value>>, key: &str) -> Option<u64> {
    let value = meta?.get(key)?;
    let n = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 1.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    (n > 0).then_some(n)
}

fn clamp_u32(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn pages_for(count: u64, limit: u32) -> u32 {
    clamp_u32(count.div_ceil(u64::from(limit.max(1)))).max(1)
}

/// Decode a list payload into raw JSON records.
pub fn normalize_values(
    payload: &Value,
    collection: Collection,
    requested_page: u32,
    requested_limit: u32,
) -> ListResponse<Value> {
    let page = requested_page.max(1);
    let limit = if requested_limit == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        requested_limit
    };

    match classify(payload, collection) {
        Shape::Bare(items) => ListResponse {
            pagination: Pagination {
                current_page: page,
                total_pages: pages_for(items.len() as u64, limit),
                total_count: items.len() as u64,
                limit,
            },
            items: items.to_vec(),
        },
        Shape::Keyed { items, meta } => {
            let limit = positive(meta, "limit").map_or(limit, clamp_u32);
            let total_count = positive(meta, collection.total_key)
                .or_else(|| positive(meta, "total"))
                .unwrap_or(items.len() as u64);
            let current_page = positive(meta, "currentPage")
                .or_else(|| positive(meta, "page"))
                .map_or(page, clamp_u32);
            let total_pages = positive(meta, "totalPages")
                .or_else(|| positive(meta, "pages"))
                .map_or_else(|| pages_for(total_count, limit), clamp_u32);
            ListResponse {
                items: items.to_vec(),
                pagination: Pagination {
                    current_page,
                    total_pages,
                    total_count,
                    limit,
                },
            }
        }
        Shape::FirstArray(items) => ListResponse {
            pagination: Pagination {
                current_page: page,
                total_pages: 1,
                total_count: items.len() as u64,
                limit,
            },
            items: items.to_vec(),
        },
        Shape::Unrecognized => ListResponse {
            items: Vec::new(),
            pagination: Pagination {
                current_page: page,
                total_pages: 1,
                total_count: 0,
                limit,
            },
        },
    }
}

/// Decode a list payload into typed records.
///
/// Records that do not match `T` are dropped with a warning; pagination is
/// left as reported by the server.
pub fn normalize<T: DeserializeOwned>(
    payload: &Value,
    collection: Collection,
    requested_page: u32,
    requested_limit: u32,
) -> ListResponse<T> {
    let raw = normalize_values(payload, collection, requested_page, requested_limit);
    let items = raw
        .items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(collection = collection.key, error = %e, "skipping malformed record");
                None
            }
        })
        .collect();
    ListResponse {
        items,
        pagination: raw.pagination,
    }
}

/// Total number of records a list payload reports.
///
/// Same precedence as [`normalize`], with a top-level `total` as the last
/// resort for payloads that carry no list at all.
pub fn count_records(payload: &Value, collection: Collection) -> u64 {
    match classify(payload, collection) {
        Shape::Unrecognized => positive(payload.as_object(), "total").unwrap_or(0),
        _ => normalize_values(payload, collection, 1, DEFAULT_PAGE_SIZE)
            .pagination
            .total_count,
    }
}
