//! # Expense Tracker Backend
//!
//! Contains all non-UI logic for the expense tracker.
//!
//! ## Architecture
//!
//! ```text
//! Expense form (web frontend)
//!     ↓
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (Expense record, ExpenseService)
//!     ↓
//! Storage Layer (in-memory keyed collection)
//! ```
//!
//! Expenses only live in process memory; restarting the server clears them.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::ExpenseService;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> AppState {
    info!("Setting up in-memory expense store");
    let expense_service = ExpenseService::in_memory();

    AppState { expense_service }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    // CORS setup to allow the expense form to make requests
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(io::health_check))
        .route("/categories", get(io::list_categories))
        .route("/expenses", get(io::list_expenses).post(io::create_expense))
        .route("/expenses/validate", post(io::validate_expense))
        .route(
            "/expenses/:id",
            get(io::get_expense)
                .put(io::update_expense)
                .delete(io::delete_expense),
        );

    let mut router = Router::new().nest("/api", api_routes);
    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {:?}", static_dir);
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    Ok(router.layer(cors).with_state(app_state))
}
