//! Domain core for the todo service.
//!
//! # Overview
//! Everything here is synchronous and free of network I/O:
//! - `store`: the in-memory record store behind a reader-writer lock.
//! - `validate`: presence and length checks for create requests.
//! - `client`: builds `HttpRequest` values and parses `HttpResponse` values
//!   for the HTTP API (host-does-IO pattern).
//!
//! The server crate wraps `TodoStore` in an `Arc` and exposes it over HTTP;
//! the same `Todo` type is the wire shape on both sides.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod validate;

pub use client::TodoClient;
pub use error::{ClientError, StoreError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
pub use validate::validate;
