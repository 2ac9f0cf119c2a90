//! # REST API for Expense Management
//!
//! Endpoints for creating, listing, retrieving, updating, and deleting
//! expenses, plus a dry-run validation endpoint for the expense form.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{CreateExpenseRequest, DeleteExpenseResponse, UpdateExpenseRequest};
use tracing::{error, info, warn};

use crate::domain::ExpenseServiceError;
use crate::io::rest::mappers::expense_mapper::ExpenseMapper;
use crate::AppState;

/// Translate a service failure into an HTTP response
fn error_response(e: ExpenseServiceError, action: &str) -> Response {
    match e {
        ExpenseServiceError::Validation(validation) => {
            warn!("Rejected expense while trying to {}: {}", action, validation);
            (
                StatusCode::BAD_REQUEST,
                Json(ExpenseMapper::to_field_error_dto(&validation)),
            )
                .into_response()
        }
        ExpenseServiceError::Storage(storage) => {
            error!("Failed to {}: {:?}", action, storage);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to {}", action),
            )
                .into_response()
        }
    }
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    let (command, parse_errors) = ExpenseMapper::to_create_command(request);
    if !parse_errors.is_empty() {
        let errors = ExpenseMapper::merge_parse_errors(
            state.expense_service.validate_expense(&command),
            parse_errors,
        );
        if let Some(first) = errors.into_iter().next() {
            return error_response(first.into(), "create expense");
        }
    }

    match state.expense_service.add_expense(command).await {
        Ok(expense) => (
            StatusCode::CREATED,
            Json(ExpenseMapper::to_expense_response_dto(
                &expense,
                "Expense created successfully",
            )),
        )
            .into_response(),
        Err(e) => error_response(e, "create expense"),
    }
}

/// List all expenses
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    match state.expense_service.list_expenses().await {
        Ok(expenses) => (
            StatusCode::OK,
            Json(ExpenseMapper::to_expense_list_dto(&expenses)),
        )
            .into_response(),
        Err(e) => error_response(e, "list expenses"),
    }
}

/// Get an expense by ID
pub async fn get_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/expenses/{}", expense_id);

    match state.expense_service.get_expense(&expense_id).await {
        Ok(Some(expense)) => (StatusCode::OK, Json(ExpenseMapper::to_dto(&expense))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Expense not found").into_response(),
        Err(e) => error_response(e, "get expense"),
    }
}

/// Update an expense
pub async fn update_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
    Json(request): Json<UpdateExpenseRequest>,
) -> impl IntoResponse {
    info!("PUT /api/expenses/{} - request: {:?}", expense_id, request);

    let (command, parse_errors) = ExpenseMapper::to_update_command(request);
    if !parse_errors.is_empty() {
        let errors = ExpenseMapper::merge_parse_errors(
            state.expense_service.validate_changes(&command),
            parse_errors,
        );
        if let Some(first) = errors.into_iter().next() {
            return error_response(first.into(), "update expense");
        }
    }

    match state.expense_service.update_expense(&expense_id, command).await {
        Ok(Some(expense)) => (
            StatusCode::OK,
            Json(ExpenseMapper::to_expense_response_dto(
                &expense,
                "Expense updated successfully",
            )),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Expense not found").into_response(),
        Err(e) => error_response(e, "update expense"),
    }
}

/// Delete an expense
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", expense_id);

    match state.expense_service.delete_expense(&expense_id).await {
        Ok(deleted) => {
            let status = if deleted {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            (status, Json(DeleteExpenseResponse { deleted })).into_response()
        }
        Err(e) => error_response(e, "delete expense"),
    }
}

/// Validate an expense form without saving it, reporting every field error
pub async fn validate_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses/validate - request: {:?}", request);

    let (command, parse_errors) = ExpenseMapper::to_create_command(request);
    let errors = ExpenseMapper::merge_parse_errors(
        state.expense_service.validate_expense(&command),
        parse_errors,
    );

    (
        StatusCode::OK,
        Json(ExpenseMapper::to_validation_response_dto(&errors)),
    )
}
