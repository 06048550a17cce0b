//! # API crate — shared types and server handlers for the registration portal
//!
//! This crate is the backbone of the fullstack workspace. The web frontend and
//! the server both depend on it: the payload types, option lists, and
//! validation rules live here once so the client mirrors exactly what the
//! server enforces, and everything that must never reach the wasm bundle sits
//! behind the `server` feature.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | partly `server` | Request/response payloads and the stored `Registration` document |
//! | [`options`] | — | The fixed branch and college lists offered by the form |
//! | [`validate`] | — | Field patterns and the ordered client-side form check |
//! | [`db`] | `server` | MongoDB configuration and connection |
//! | [`error`] | `server` | HTTP error taxonomy mapped to JSON error responses |
//! | [`routes`] | `server` | The axum router for `/api/register` and `/api/test-connection` |
//!
//! ## Client entry point
//!
//! [`submit_registration`] posts the form to [`REGISTER_PATH`] and maps the
//! response into either the success payload or a displayable error. It is
//! compiled twice: a real `fetch`-backed implementation for the browser and a
//! stub for native builds, where the form never runs.

use thiserror::Error;

pub mod models;
pub mod options;
pub mod validate;

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod routes;

pub use models::{ErrorBody, RegisterRequest, RegisterSuccess, TestConnectionBody};

/// Route of the registration endpoint, shared by the router and the client.
pub const REGISTER_PATH: &str = "/api/register";

/// Route of the connectivity-check endpoint.
pub const TEST_CONNECTION_PATH: &str = "/api/test-connection";

/// Message shown when an error response carries no readable `error` field.
pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong";

/// Why a submission attempt did not produce a registered user.
///
/// The form displays `to_string()` of whichever variant it gets, so the
/// `Display` text is exactly the message the end user reads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The server answered with an error body (400/405/409/500).
    #[error("{0}")]
    Server(String),
    /// The request never completed (network failure, unreadable response).
    #[error("{0}")]
    Network(String),
    /// Submission only works from the browser build.
    #[error("submitting is only supported in the browser")]
    Unsupported,
}

/// Submit the registration form as JSON to the server.
///
/// On a non-success status the body's `error` field becomes the message,
/// falling back to [`GENERIC_SUBMIT_ERROR`] when the body is unreadable.
#[cfg(target_arch = "wasm32")]
pub async fn submit_registration(form: &RegisterRequest) -> Result<RegisterSuccess, SubmitError> {
    use gloo_net::http::Request;

    let response = Request::post(REGISTER_PATH)
        .json(form)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<RegisterSuccess>()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))
    } else {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| GENERIC_SUBMIT_ERROR.to_string());
        Err(SubmitError::Server(message))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn submit_registration(_form: &RegisterRequest) -> Result<RegisterSuccess, SubmitError> {
    Err(SubmitError::Unsupported)
}
