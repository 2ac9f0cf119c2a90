//! # Storage Module
//!
//! Persistence boundary for the expense tracker. Expenses are held in process
//! memory only; see [`memory::InMemoryExpenseRepository`].

pub mod memory;
pub mod traits;

pub use memory::InMemoryExpenseRepository;
pub use traits::ExpenseStorage;
