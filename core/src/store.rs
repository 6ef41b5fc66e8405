//! In-memory record store.
//!
//! # Design
//! The records and the next-id counter sit behind one `RwLock`. Reads
//! (`list`, `get`, `len`) share the lock; writes (`create`, `update`,
//! `delete`) hold it exclusively, so a reader never sees a half-applied
//! mutation. Callers always receive clones, never references into the map.
//!
//! The store is an ordinary value: construct one at startup and hand it to
//! the server behind an `Arc`. Tests build a fresh one per case.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::StoreError;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

#[derive(Debug)]
struct Records {
    todos: BTreeMap<TodoId, Todo>,
    next_id: TodoId,
}

/// Concurrency-safe CRUD storage for todo records.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Records>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every record, in ascending id order.
    pub fn list(&self) -> Vec<Todo> {
        self.read().todos.values().cloned().collect()
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        self.read()
            .todos
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Stores a new record. The input is expected to have been validated.
    pub fn create(&self, input: CreateTodo) -> Todo {
        let mut records = self.write();
        let id = records.next_id;
        records.next_id += 1;

        let now = Utc::now();
        let todo = Todo {
            id,
            title: input.title,
            description: input.description,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        records.todos.insert(id, todo.clone());
        tracing::debug!(id, "allocated todo id");
        todo
    }

    /// Applies the fields present in `input` and refreshes `updated_at`.
    ///
    /// Values are not revalidated: an empty or over-long title is stored as
    /// given.
    pub fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo, StoreError> {
        let mut records = self.write();
        let todo = records.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if let Some(title) = input.title {
            todo.title = title;
        }
        if let Some(description) = input.description {
            todo.description = description;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        todo.updated_at = stamp_after(todo.updated_at);
        Ok(todo.clone())
    }

    pub fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.write()
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every critical section leaves the map consistent, so a panic elsewhere
    // while holding the guard does not invalidate the data.
    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Current time, bumped past `previous` when the clock has not advanced.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}
