//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the expense tracker.
//! This layer handles:
//! - JSON request/response serialization and deserialization
//! - Mapping form strings into domain commands
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! Handlers hold no business logic; every rule lives in the domain layer.

pub mod expense_apis;
pub mod mappers;
pub mod system_apis;
