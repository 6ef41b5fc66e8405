//! Stateless request builder and response parser for the `/api/todos` API.
//!
//! # Design
//! Each CRUD operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Create requests are validated before anything is built, so a bad title
//! never costs a round-trip.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: TodoId) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        input.validate()?;
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_todo(
        &self,
        id: TodoId,
        input: &UpdateTodo,
    ) -> Result<HttpRequest, ClientError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(id), body))
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        expect_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        expect_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        expect_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        expect_json(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value).map_err(|e| ClientError::Serialization(e.to_string()))
}

fn expect_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ClientError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ClientError::NotFound);
    }
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => Err(ClientError::Rejected {
            status: response.status,
            message: body.error,
        }),
        Err(_) => Err(ClientError::Http {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}
