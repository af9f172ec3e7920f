//! Typed failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every screen renders these as messages; nothing in the crate panics on a
//! failed request. Authorization failures (401/403) are mapped in exactly one
//! place (`parse_error_body`) so the demote-on-rejection policy cannot drift
//! between call sites.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// One invalid field reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Failure modes observable from the client.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The credential exchange was rejected. Carries the backend's own
    /// message when one was present in the response body.
    #[error("{}", .0.as_deref().unwrap_or("Invalid username or password."))]
    InvalidCredentials(Option<String>),
    /// An authenticated call was rejected; the session is no longer valid.
    #[error("Your session has expired. Please sign in again.")]
    Unauthenticated,
    /// The backend rejected the submission with per-field messages.
    #[error("{}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
    /// Any other non-success status.
    #[error("Request failed ({0}).")]
    Http(u16),
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// True when the bearer token was rejected and the session should be
    /// demoted.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// Join per-field messages into one user-visible line.
fn join_field_errors(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return "Submission was rejected.".to_owned();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a non-success response to an [`ApiError`].
///
/// 401/403 become [`ApiError::Unauthenticated`]; a 400 with a JSON object
/// body becomes [`ApiError::Validation`] with one entry per field message
/// (the backend sends either `{"field": ["msg", ...]}` maps or a single
/// `{"detail": "msg"}`); everything else keeps its status code.
pub fn parse_error_body(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthenticated;
    }
    if status == 400 {
        if let Some(errors) = field_errors_from_body(body) {
            return ApiError::Validation(errors);
        }
    }
    ApiError::Http(status)
}

/// Map a rejected credential exchange to [`ApiError::InvalidCredentials`],
/// keeping the backend's `detail` message verbatim when present.
pub fn parse_login_error(status: u16, body: &str) -> ApiError {
    if status == 400 || status == 401 {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned));
        return ApiError::InvalidCredentials(detail);
    }
    parse_error_body(status, body)
}

fn field_errors_from_body(body: &str) -> Option<Vec<FieldError>> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let map = value.as_object()?;
    let mut errors = Vec::new();
    for (field, messages) in map {
        match messages {
            serde_json::Value::String(message) => errors.push(FieldError {
                field: field.clone(),
                message: message.clone(),
            }),
            serde_json::Value::Array(items) => {
                for item in items {
                    if let Some(message) = item.as_str() {
                        errors.push(FieldError {
                            field: field.clone(),
                            message: message.to_owned(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    if errors.is_empty() { None } else { Some(errors) }
}
