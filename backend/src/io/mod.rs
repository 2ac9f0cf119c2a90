//! # IO Module
//!
//! Interface layer between the expense form and the domain logic.
//!
//! ## Supported Operations
//!
//! - **GET /api/health**: Liveness check
//! - **GET /api/categories**: The fixed list of expense categories
//! - **GET /api/expenses**: List expenses in insertion order
//! - **POST /api/expenses**: Create an expense
//! - **POST /api/expenses/validate**: Report every field error without saving
//! - **GET /api/expenses/:id**: Fetch one expense
//! - **PUT /api/expenses/:id**: Partially update an expense
//! - **DELETE /api/expenses/:id**: Delete an expense

pub mod rest;

pub use rest::expense_apis::*;
pub use rest::system_apis::*;
