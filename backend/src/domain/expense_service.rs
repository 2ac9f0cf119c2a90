use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::expenses::{CreateExpenseCommand, UpdateExpenseCommand};
use crate::domain::models::expense::{
    Expense, ExpenseChanges, ExpenseParams, ExpenseValidationError,
};
use crate::storage::{ExpenseStorage, InMemoryExpenseRepository};

#[derive(Debug, thiserror::Error)]
pub enum ExpenseServiceError {
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type ExpenseResult<T> = std::result::Result<T, ExpenseServiceError>;

/// Service for managing expenses; the single source of truth for which
/// expenses exist
#[derive(Clone)]
pub struct ExpenseService {
    storage: Arc<dyn ExpenseStorage>,
}

impl ExpenseService {
    /// Create a new ExpenseService
    pub fn new(storage: Arc<dyn ExpenseStorage>) -> Self {
        Self { storage }
    }

    /// Create a service backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryExpenseRepository::new()))
    }

    /// Add a new expense
    pub async fn add_expense(&self, command: CreateExpenseCommand) -> ExpenseResult<Expense> {
        info!("Adding expense: vendor={}, amount={:?}", command.vendor, command.amount);

        let expense = Expense::new(ExpenseParams::from(command))?;
        self.storage.store_expense(&expense).await?;

        info!("Added expense with ID: {}", expense.id());
        Ok(expense)
    }

    /// List all expenses in insertion order
    pub async fn list_expenses(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.storage.list_expenses().await?;
        info!("Found {} expenses", expenses.len());
        Ok(expenses)
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> ExpenseResult<Option<Expense>> {
        info!("Getting expense: {}", expense_id);

        let expense = self.storage.get_expense(expense_id).await?;
        if expense.is_none() {
            warn!("Expense not found: {}", expense_id);
        }

        Ok(expense)
    }

    /// Update an existing expense
    ///
    /// Returns `None` if no expense has this ID; nothing is created in that case.
    pub async fn update_expense(
        &self,
        expense_id: &str,
        command: UpdateExpenseCommand,
    ) -> ExpenseResult<Option<Expense>> {
        info!("Updating expense: {}", expense_id);

        let Some(mut expense) = self.storage.get_expense(expense_id).await? else {
            warn!("Expense not found for update: {}", expense_id);
            return Ok(None);
        };

        expense.update(command.into())?;

        if !self.storage.update_expense(&expense).await? {
            warn!("Expense {} was removed before the update was stored", expense_id);
            return Ok(None);
        }

        info!("Updated expense: {}", expense_id);
        Ok(Some(expense))
    }

    /// Delete an expense, returning whether one was removed
    pub async fn delete_expense(&self, expense_id: &str) -> ExpenseResult<bool> {
        info!("Deleting expense: {}", expense_id);

        let deleted = self.storage.delete_expense(expense_id).await?;
        if deleted {
            info!("Deleted expense: {}", expense_id);
        } else {
            warn!("Expense not found for delete: {}", expense_id);
        }

        Ok(deleted)
    }

    /// Check a creation command against every invariant without storing it
    pub fn validate_expense(&self, command: &CreateExpenseCommand) -> Vec<ExpenseValidationError> {
        ExpenseParams::from(command.clone()).violations()
    }

    /// Check the fields an update command provides without touching any record
    pub fn validate_changes(&self, command: &UpdateExpenseCommand) -> Vec<ExpenseValidationError> {
        ExpenseChanges::from(command.clone()).violations()
    }
}
