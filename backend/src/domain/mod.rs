//! # Domain Module
//!
//! Business logic for the expense tracker, independent of the HTTP layer and
//! of how expenses are stored.
//!
//! ## Module Organization
//!
//! - **models**: The validated `Expense` record and its validation errors
//! - **commands**: Internal command types the REST layer maps DTOs into
//! - **expense_service**: Create, list, get, update and delete operations
//!
//! ## Business Rules
//!
//! - Vendors must be non-empty after trimming
//! - Amounts must be greater than zero
//! - Every expense has a date and one of the fixed categories
//! - Updates are all-or-nothing and always move `updated_at` past `created_at`

pub mod commands;
pub mod expense_service;
pub mod models;

pub use expense_service::*;
