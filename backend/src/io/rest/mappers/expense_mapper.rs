//! backend/src/io/rest/mappers/expense_mapper.rs

use chrono::{NaiveDate, SecondsFormat};
use shared::{
    Expense as SharedExpense, ExpenseCategory, ExpenseListResponse, ExpenseResponse,
    ExpenseValidationResponse, FieldError,
};

use crate::domain::commands::expenses::{CreateExpenseCommand, UpdateExpenseCommand};
use crate::domain::models::expense::{Expense as DomainExpense, ExpenseValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Mapper to convert between shared expense DTOs and domain expense types.
pub struct ExpenseMapper;

impl ExpenseMapper {
    /// Converts a domain Expense to a shared Expense DTO.
    pub fn to_dto(domain: &DomainExpense) -> SharedExpense {
        SharedExpense {
            id: domain.id().to_string(),
            date: domain.date().format(DATE_FORMAT).to_string(),
            amount: domain.amount(),
            vendor: domain.vendor().to_string(),
            category: domain.category(),
            notes: domain.notes().map(str::to_string),
            created_at: domain.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: domain.updated_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_expense_response_dto(domain: &DomainExpense, message: &str) -> ExpenseResponse {
        ExpenseResponse {
            expense: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_expense_list_dto(domain_expenses: &[DomainExpense]) -> ExpenseListResponse {
        ExpenseListResponse {
            expenses: domain_expenses.iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_field_error_dto(error: &ExpenseValidationError) -> FieldError {
        FieldError {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }

    pub fn to_validation_response_dto(errors: &[ExpenseValidationError]) -> ExpenseValidationResponse {
        ExpenseValidationResponse {
            is_valid: errors.is_empty(),
            errors: errors.iter().map(Self::to_field_error_dto).collect(),
        }
    }

    /// Converts a create request into a domain command.
    ///
    /// Never fails: unparsable date or category strings are left empty in the
    /// command and their parse errors returned alongside. Missing values are
    /// left for the domain to reject.
    pub fn to_create_command(
        request: shared::CreateExpenseRequest,
    ) -> (CreateExpenseCommand, Vec<ExpenseValidationError>) {
        let mut parse_errors = Vec::new();
        let date = Self::parse_date(request.date.as_deref()).unwrap_or_else(|e| {
            parse_errors.push(e);
            None
        });
        let category = Self::parse_category(request.category.as_deref()).unwrap_or_else(|e| {
            parse_errors.push(e);
            None
        });

        let command = CreateExpenseCommand {
            date,
            amount: request.amount,
            vendor: request.vendor,
            category,
            notes: request.notes,
        };
        (command, parse_errors)
    }

    /// Converts an update request into a domain command, returning parse
    /// errors alongside like [`Self::to_create_command`].
    pub fn to_update_command(
        request: shared::UpdateExpenseRequest,
    ) -> (UpdateExpenseCommand, Vec<ExpenseValidationError>) {
        let mut parse_errors = Vec::new();
        let date = Self::parse_date(request.date.as_deref()).unwrap_or_else(|e| {
            parse_errors.push(e);
            None
        });
        let category = Self::parse_category(request.category.as_deref()).unwrap_or_else(|e| {
            parse_errors.push(e);
            None
        });

        let command = UpdateExpenseCommand {
            date,
            amount: request.amount,
            vendor: request.vendor,
            category,
            notes: request.notes,
        };
        (command, parse_errors)
    }

    /// Fold parse errors into domain violations, ordered by field.
    ///
    /// An unparsable field shows up to the domain as missing, so its parse
    /// error replaces the "missing" error for that field.
    pub fn merge_parse_errors(
        mut errors: Vec<ExpenseValidationError>,
        parse_errors: Vec<ExpenseValidationError>,
    ) -> Vec<ExpenseValidationError> {
        for parse_error in parse_errors {
            match errors.iter_mut().find(|e| e.field() == parse_error.field()) {
                Some(slot) => *slot = parse_error,
                None => errors.push(parse_error),
            }
        }
        errors.sort_by_key(|e| e.field());
        errors
    }

    fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ExpenseValidationError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(|_| ExpenseValidationError::InvalidDate(s.to_string())),
            None => Ok(None),
        }
    }

    fn parse_category(raw: Option<&str>) -> Result<Option<ExpenseCategory>, ExpenseValidationError> {
        match raw.filter(|s| !s.trim().is_empty()) {
            Some(s) => s
                .parse::<ExpenseCategory>()
                .map(Some)
                .map_err(|e| ExpenseValidationError::UnknownCategory(e.0)),
            None => Ok(None),
        }
    }
}
