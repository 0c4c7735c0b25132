//
//  instaapi
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every feature area of the client:
//! the uniform error type, the result alias every operation returns, and the
//! small status envelope most REST endpoints reply with.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ApiResult`] - `Result<T, ApiError>`, the uniform result wrapper
//! - [`ResponseKind`] - Classification of unexpected responses
//! - [`StatusResponse`] - The `{"status": "ok", "message": ...}` envelope
//! - GraphQL helpers (re-exported from the `graph` submodule)
//!
//! # Example
//!
//! ```rust
//! use instaapi::api::common::{ApiError, ApiResult};
//!
//! fn handle(result: ApiResult<bool>) {
//!     match result {
//!         Ok(done) => println!("done: {}", done),
//!         Err(ApiError::AuthRequired) => println!("Import a session first"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod de;
mod graph;

pub(crate) use de::*;
pub use graph::*;

/// Uniform result wrapper returned by every API operation.
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified error type for all API operations.
///
/// Every failure an operation can hit ends up here: the session check, the
/// transport, the HTTP status check, the payload status check, and the
/// conversion of the raw response into a public model.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `AuthRequired` | Session is not authenticated |
/// | `UnexpectedResponse` | Non-2xx HTTP status or non-"ok" payload status |
/// | `Failed` | Platform answered but refused the operation |
/// | `InvalidArgument` | Caller input rejected before sending |
/// | `Malformed` | Response decoded but lacks required data |
/// | `Network` | Transport failure |
/// | `Decode` | Response body is not the expected JSON |
/// | `InvalidUri` | Endpoint URI could not be built |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The session is not authenticated or carries no logged-in user.
    #[error("User is not authenticated")]
    AuthRequired,

    /// The platform returned a non-success HTTP status or a payload whose
    /// `status` field is not `"ok"`.
    #[error("Unexpected response ({status}): {message}")]
    UnexpectedResponse {
        /// HTTP status of the response.
        status: StatusCode,
        /// Classification derived from the payload and status.
        kind: ResponseKind,
        /// Human readable message extracted from the payload.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The platform understood the request but refused it.
    #[error("{0}")]
    Failed(String),

    /// Caller input was rejected before any request was made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The response decoded but is missing data the model requires.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Transport-level failure (connection, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An endpoint URI could not be constructed.
    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),
}

impl ApiError {
    /// Builds an [`ApiError::UnexpectedResponse`] from a status and raw body.
    ///
    /// The body is parsed as the platform's error envelope:
    ///
    /// ```json
    /// {"status": "fail", "message": "login_required", "error_type": "..."}
    /// ```
    ///
    /// The message is taken from `message`, then `feedback_message`, then
    /// `error_title`. If none is present (or the body is not JSON) a generic
    /// message naming the status is used.
    pub fn unexpected(status: StatusCode, body: &str) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).unwrap_or_default();

        let kind = ResponseKind::classify(status, &envelope);
        let message = envelope
            .message
            .clone()
            .or_else(|| envelope.feedback_message.clone())
            .or_else(|| envelope.error_title.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Unexpected status code {}", status.as_u16()));

        Self::UnexpectedResponse {
            status,
            kind,
            message,
            body: body.to_string(),
        }
    }

    /// Returns the [`ResponseKind`] for unexpected responses, if any.
    pub fn kind(&self) -> Option<ResponseKind> {
        match self {
            Self::UnexpectedResponse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` when the failure means the session must be re-imported.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthRequired)
            || matches!(
                self.kind(),
                Some(ResponseKind::LoginRequired | ResponseKind::ChallengeRequired)
            )
    }
}

/// Classification of an unexpected response.
///
/// Derived from the payload's `error_type` / `message` first and the HTTP
/// status second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// The session was rejected; log in again.
    LoginRequired,
    /// The platform wants a checkpoint/challenge completed.
    ChallengeRequired,
    /// Action blocked by the platform ("feedback required").
    FeedbackRequired,
    /// Too many requests.
    RateLimited,
    /// Resource does not exist.
    NotFound,
    /// The request was rejected as invalid.
    BadRequest,
    /// 5xx from the platform.
    ServerError,
    /// Anything else.
    Unknown,
}

impl ResponseKind {
    fn classify(status: StatusCode, envelope: &ErrorEnvelope) -> Self {
        let markers = [envelope.error_type.as_deref(), envelope.message.as_deref()];
        for marker in markers.into_iter().flatten() {
            match marker {
                "login_required" => return Self::LoginRequired,
                "checkpoint_required" | "challenge_required" | "checkpoint_challenge_required" => {
                    return Self::ChallengeRequired
                }
                "feedback_required" => return Self::FeedbackRequired,
                "rate_limit_error" => return Self::RateLimited,
                _ => {}
            }
        }
        if envelope.spam {
            return Self::FeedbackRequired;
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::BAD_REQUEST => Self::BadRequest,
            s if s.is_server_error() => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

/// The platform's error body. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error_title: Option<String>,
    #[serde(default)]
    feedback_message: Option<String>,
    #[serde(default)]
    spam: bool,
}

/// The status envelope returned by most REST endpoints.
///
/// ```json
/// {"status": "ok"}
/// {"status": "fail", "message": "Something went wrong"}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `"ok"` on success, `"fail"` otherwise. Absent on some endpoints.
    #[serde(default)]
    pub status: Option<String>,

    /// Optional message, usually present on failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    /// Returns `true` when `status` is present and equals `"ok"`
    /// (case-insensitive).
    pub fn is_ok(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("ok"))
    }
}
