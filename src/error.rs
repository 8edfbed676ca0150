//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to convert errors to HTTP responses with JSON error bodies.
//!
//! Error mappings:
//! - `RefNotFound`, `PathNotFound`, `RepoNotFound` → 404
//! - `InvalidPath` → 404 for traversal failures, 400 for "not a file"
//! - `InvalidRef`, `InvalidRange` → 400
//! - `Git`, `Io`, `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Why a path could not be resolved to the object the caller needed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("traversal unexpectedly encountered a non-tree at {segment:?}")]
    NonTree { segment: String },

    #[error("no such object {segment:?}")]
    NoSuchObject { segment: String },

    #[error("{path:?} resolved to a non-blob object")]
    NotAFile { path: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Ref not found: {0}")]
    RefNotFound(String),

    #[error("Invalid ref: {0}")]
    InvalidRef(String),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RepoNotFound(_) | AppError::RefNotFound(_) | AppError::PathNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::InvalidPath(PathError::NotAFile { .. }) => StatusCode::BAD_REQUEST,
            AppError::InvalidPath(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRef(_) | AppError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            AppError::Git(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
