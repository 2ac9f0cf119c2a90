//! # In-Memory Expense Repository
//!
//! Holds every expense in an insertion-ordered map owned by the repository.
//! Callers only ever receive clones, so nothing outside the map keeps a
//! record alive after it is deleted. Contents are lost when the process exits.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::traits::ExpenseStorage;
use crate::domain::models::expense::Expense;

#[derive(Debug, Default)]
pub struct InMemoryExpenseRepository {
    expenses: RwLock<IndexMap<String, Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<String, Expense>>> {
        self.expenses
            .read()
            .map_err(|_| anyhow!("Expense store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<String, Expense>>> {
        self.expenses
            .write()
            .map_err(|_| anyhow!("Expense store lock poisoned"))
    }
}

#[async_trait]
impl ExpenseStorage for InMemoryExpenseRepository {
    async fn store_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses = self.write()?;
        expenses.insert(expense.id().to_string(), expense.clone());
        debug!("Stored expense {} ({} total)", expense.id(), expenses.len());
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>> {
        Ok(self.read()?.get(expense_id).cloned())
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update_expense(&self, expense: &Expense) -> Result<bool> {
        let mut expenses = self.write()?;
        match expenses.get_mut(expense.id()) {
            Some(existing) => {
                *existing = expense.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        // shift_remove keeps the remaining expenses in insertion order
        let removed = self.write()?.shift_remove(expense_id).is_some();
        debug!("Delete expense {}: removed={}", expense_id, removed);
        Ok(removed)
    }
}
