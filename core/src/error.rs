//! Error types for the store, the validator and the API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant on both sides of the wire because
//! callers frequently distinguish "the todo does not exist" from every other
//! failure. Validation failures carry the offending field name so the server
//! can report it and the client can reject input before any I/O.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations that address a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
}

/// A create request violated a presence or length rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404 for a todo id.
    #[error("todo not found")]
    NotFound,

    /// The payload failed validation locally; no request was built.
    #[error("invalid {}: {}", .0.field, .0.message)]
    Invalid(ValidationError),

    /// The server refused the request with an `{"error": ...}` body.
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// A non-success status whose body was not an error document.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Invalid(err)
    }
}
