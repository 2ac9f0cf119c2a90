// backend/src/domain/commands.rs

//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod expenses {
    use chrono::NaiveDate;
    use shared::ExpenseCategory;

    use crate::domain::models::expense::{ExpenseChanges, ExpenseParams};

    /// Input for creating a new expense. Identity and timestamps are always
    /// generated by the store.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CreateExpenseCommand {
        pub date: Option<NaiveDate>,
        pub amount: Option<f64>,
        pub vendor: String,
        pub category: Option<ExpenseCategory>,
        pub notes: Option<String>,
    }

    impl From<CreateExpenseCommand> for ExpenseParams {
        fn from(command: CreateExpenseCommand) -> Self {
            ExpenseParams {
                date: command.date,
                amount: command.amount,
                vendor: command.vendor,
                category: command.category,
                notes: command.notes,
                ..Default::default()
            }
        }
    }

    /// Input for updating an expense; `None` fields are left unchanged.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UpdateExpenseCommand {
        pub date: Option<NaiveDate>,
        pub amount: Option<f64>,
        pub vendor: Option<String>,
        pub category: Option<ExpenseCategory>,
        pub notes: Option<String>,
    }

    impl From<UpdateExpenseCommand> for ExpenseChanges {
        fn from(command: UpdateExpenseCommand) -> Self {
            ExpenseChanges {
                date: command.date,
                amount: command.amount,
                vendor: command.vendor,
                category: command.category,
                notes: command.notes,
            }
        }
    }
}
