use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the panel API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP status (DNS, connect, timeout,
    /// body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The panel answered with a non-2xx status and a body that is not its
    /// error envelope.
    #[error("HTTP status {status}: {}", String::from_utf8_lossy(.body))]
    HttpStatus { status: StatusCode, body: Vec<u8> },

    /// The panel answered with a non-2xx status and a decodable error
    /// envelope. `code` and `detail` come from the first listed error.
    #[error("Panel error {code} ({status}): {detail}")]
    Panel {
        status: StatusCode,
        code: String,
        detail: String,
        errors: Vec<PanelErrorObject>,
    },

    /// Error serializing a request payload or deserializing a response body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for panel API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The HTTP status the panel answered with, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::HttpStatus { status, .. } | ApiError::Panel { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the panel reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The machine-readable code from the panel's error envelope.
    pub fn panel_code(&self) -> Option<&str> {
        match self {
            ApiError::Panel { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// One entry of the panel's `errors` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelErrorObject {
    /// Machine-readable error code, e.g. `ValidationException`.
    pub code: String,
    /// Human-readable description.
    pub detail: String,
    /// HTTP status as echoed by the panel (a string on the wire).
    #[serde(default)]
    pub status: Option<String>,
    /// Extra context, such as the offending rule for validation errors.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<PanelErrorObject>,
}

/// Classifies a non-2xx response.
///
/// A body carrying the panel's `{"errors": [...]}` envelope with at least one
/// entry becomes [`ApiError::Panel`]. Everything else (plain text, HTML,
/// empty body, an envelope with no entries) falls back to
/// [`ApiError::HttpStatus`] with the raw body, so nothing is dropped.
pub fn decode_error(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => {
            let first = &envelope.errors[0];
            ApiError::Panel {
                status,
                code: first.code.clone(),
                detail: first.detail.clone(),
                errors: envelope.errors,
            }
        }
        _ => ApiError::HttpStatus {
            status,
            body: body.to_vec(),
        },
    }
}
