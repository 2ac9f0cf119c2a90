//! # REST API for Service Metadata
//!
//! Health check and the fixed category list used to populate the form's
//! category selector.

use axum::response::Json;
use shared::{CategoryListResponse, ExpenseCategory, HealthResponse};
use tracing::debug;

/// Health check
pub async fn health_check() -> Json<HealthResponse> {
    debug!("GET /api/health");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// List every expense category in display order
pub async fn list_categories() -> Json<CategoryListResponse> {
    debug!("GET /api/categories");
    Json(CategoryListResponse {
        categories: ExpenseCategory::ALL.to_vec(),
    })
}
