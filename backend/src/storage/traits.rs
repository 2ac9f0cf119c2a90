//! # Storage Traits
//!
//! Storage abstraction used by the domain layer. The in-memory repository is
//! the only backend today; the async signatures leave room for a remote one.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::expense::Expense;

/// Trait defining the interface for expense storage operations
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Store a new expense keyed by its ID
    async fn store_expense(&self, expense: &Expense) -> Result<()>;

    /// Retrieve a specific expense by ID
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>>;

    /// List all expenses in insertion order
    async fn list_expenses(&self) -> Result<Vec<Expense>>;

    /// Replace an existing expense
    /// Returns false, without inserting anything, if the ID is not stored
    async fn update_expense(&self, expense: &Expense) -> Result<bool>;

    /// Delete a single expense
    /// Returns true if the expense was found and deleted, false otherwise
    async fn delete_expense(&self, expense_id: &str) -> Result<bool>;
}
