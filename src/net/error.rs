//! API error taxonomy.
//!
//! The backend reports failures as `{ "message": "..." }` or, for
//! validation, `{ "errors": { "field": ["...", ...] } }`. Both carry text
//! meant for the user and are surfaced verbatim; everything else collapses
//! into a generic retryable failure. 401 is not an error the caller is
//! expected to render — `net::http` tears the session down before the
//! caller sees it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

use crate::net::types::FieldErrors;
use crate::util::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Server-provided human-readable message.
    #[error("{0}")]
    Message(String),

    /// Field-keyed validation messages.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The token was rejected; the session has already been cleared.
    #[error("authentication required")]
    Unauthorized,

    /// Transport failure, timeout, or a status with no usable body.
    #[error("network error: {0}")]
    Network(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

impl ApiError {
    /// Classify a non-2xx response. The server message wins over
    /// validation details when both are present, matching how the forms
    /// have always displayed them.
    pub fn from_response(status: u16, body: &str) -> ApiError {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
                return ApiError::Message(message);
            }
            if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
                return ApiError::Validation(errors);
            }
        }
        ApiError::Network(format!("HTTP {status}"))
    }

    /// Text to put in front of the user: server wording verbatim when
    /// available, otherwise the app's generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Message(message) => message.clone(),
            ApiError::Validation(errors) => errors
                .values()
                .flatten()
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
            ApiError::Unauthorized => {
                "Votre session a expiré. Veuillez vous reconnecter.".to_owned()
            }
            ApiError::Network(_) | ApiError::Storage(_) => {
                "Une erreur est survenue. Veuillez réessayer plus tard.".to_owned()
            }
        }
    }
}
