//! HTTP adapter for the todo store.
//!
//! # Overview
//! `/api/todos` maps onto `TodoStore` operations; every other path is served
//! from the static directory that holds the browser client. The store is
//! created by the caller and shared with handlers as router state.

use std::path::Path;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use todo_core::TodoStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;

pub use config::Config;
pub use error::ApiError;

pub type SharedStore = Arc<TodoStore>;

fn api_routes(store: SharedStore) -> Router {
    // `/todos/` addresses the collection too.
    let collection = get(handlers::list_todos)
        .post(handlers::create_todo)
        .options(handlers::options_ok)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route("/todos", collection.clone())
        .route("/todos/", collection)
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .options(handlers::options_ok)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .with_state(store)
}

fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);
    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// The API alone, without static file serving.
pub fn router(store: SharedStore) -> Router {
    with_layers(Router::new().nest("/api", api_routes(store)))
}

/// The API plus the static client served from `static_dir`.
pub fn app(store: SharedStore, static_dir: &Path) -> Router {
    with_layers(
        Router::new()
            .nest("/api", api_routes(store))
            .fallback_service(ServeDir::new(static_dir)),
    )
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Serve a fresh, empty store until Ctrl+C.
pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    let store: SharedStore = Arc::new(TodoStore::new());
    axum::serve(listener, app(store, &config.static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, draining connections");
}
