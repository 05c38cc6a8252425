use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Generic fallback shown when neither the server nor the caller supplies a message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of errors seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced an HTTP response.
    Network,
    BadRequest,
    ValidationError,
    Unauthorized,
    /// A 401 that tore down the local session.
    SessionExpired,
    Forbidden,
    NotFound,
    Conflict,
    ServerError,
    /// The response arrived but its body could not be decoded.
    DecodeError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::SessionExpired => write!(f, "SessionExpired"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::DecodeError => write!(f, "DecodeError"),
        }
    }
}

/// Structured error produced by the API client and the form validators.
///
/// `message` is empty when the server gave nothing usable; callers then
/// pick a per-action fallback through [`AppError::display_or`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            field_errors: BTreeMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: BTreeMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            status: None,
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::SessionExpired, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::ServerError, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::DecodeError, message)
    }

    /// Build an error from a non-success HTTP status and its (possibly empty) JSON body.
    pub fn from_status(status: u16, body: &Value) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            _ => AppErrorKind::ServerError,
        };
        let mut err = Self::with_kind(kind, extract_message(body).unwrap_or_default());
        err.status = Some(status);
        err
    }

    pub fn is_session_expired(&self) -> bool {
        self.kind == AppErrorKind::SessionExpired
    }

    /// The server-provided message, or `fallback` when there is none.
    ///
    /// Network and decode failures never carry a server message worth
    /// showing, so they always use the fallback.
    pub fn display_or(&self, fallback: &str) -> String {
        match self.kind {
            AppErrorKind::Network | AppErrorKind::DecodeError => fallback.to_string(),
            _ if self.message.trim().is_empty() => fallback.to_string(),
            _ => self.message.clone(),
        }
    }

    /// Same as [`AppError::display_or`] with the generic fallback.
    pub fn friendly_message(&self) -> String {
        self.display_or(GENERIC_ERROR_MESSAGE)
    }

    pub fn status_code_u16(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

/// Pull a display message out of a server error body.
///
/// The backend sends `message` either as a string or as a list of strings;
/// lists are joined with `", "`. Anything else yields `None`.
pub fn extract_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(parts) => {
            let joined = parts
                .iter()
                .filter_map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}
