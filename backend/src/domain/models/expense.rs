//! Domain model for a single business expense.
//!
//! An [`Expense`] can only be obtained through [`Expense::new`] and only be
//! changed through [`Expense::update`], so every record at rest satisfies:
//!
//! - the vendor is non-empty after trimming
//! - the amount is a finite value greater than zero
//! - date and category are present
//! - `updated_at >= created_at`, and strictly greater after any update

use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Utc};
use shared::ExpenseCategory;
use std::fmt;
use uuid::Uuid;

/// The expense field a validation failure refers to, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExpenseField {
    Vendor,
    Amount,
    Date,
    Category,
    UpdatedAt,
}

impl ExpenseField {
    /// Field name as used by the expense form
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseField::Vendor => "vendor",
            ExpenseField::Amount => "amount",
            ExpenseField::Date => "date",
            ExpenseField::Category => "category",
            ExpenseField::UpdatedAt => "updatedAt",
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Vendor name is required")]
    EmptyVendor,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Date is required")]
    MissingDate,
    #[error("Date must be in YYYY-MM-DD format: {0}")]
    InvalidDate(String),
    #[error("Category is required")]
    MissingCategory,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Updated timestamp cannot precede created timestamp")]
    TimestampsOutOfOrder,
}

impl ExpenseValidationError {
    pub fn field(&self) -> ExpenseField {
        match self {
            ExpenseValidationError::EmptyVendor => ExpenseField::Vendor,
            ExpenseValidationError::MissingAmount | ExpenseValidationError::NonPositiveAmount => {
                ExpenseField::Amount
            }
            ExpenseValidationError::MissingDate | ExpenseValidationError::InvalidDate(_) => {
                ExpenseField::Date
            }
            ExpenseValidationError::MissingCategory | ExpenseValidationError::UnknownCategory(_) => {
                ExpenseField::Category
            }
            ExpenseValidationError::TimestampsOutOfOrder => ExpenseField::UpdatedAt,
        }
    }
}

/// Everything needed to construct an [`Expense`].
///
/// `id`, `created_at` and `updated_at` are only supplied when rebuilding an
/// existing record; new records get generated values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseParams {
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub vendor: String,
    pub category: Option<ExpenseCategory>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ExpenseParams {
    /// Every invariant these params violate, in the order [`Expense::new`]
    /// checks them
    pub fn violations(&self) -> Vec<ExpenseValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = validate_vendor(&self.vendor) {
            errors.push(e);
        }
        if let Err(e) = validate_amount(self.amount) {
            errors.push(e);
        }
        if self.date.is_none() {
            errors.push(ExpenseValidationError::MissingDate);
        }
        if self.category.is_none() {
            errors.push(ExpenseValidationError::MissingCategory);
        }
        if let Some(updated_at) = self.updated_at {
            // A missing created_at defaults to now, as in Expense::new
            let created_at = self
                .created_at
                .map(|ts| ts.trunc_subsecs(3))
                .unwrap_or_else(current_timestamp);
            if updated_at.trunc_subsecs(3) < created_at {
                errors.push(ExpenseValidationError::TimestampsOutOfOrder);
            }
        }

        errors
    }
}

/// A partial set of field changes for [`Expense::update`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseChanges {
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub vendor: Option<String>,
    pub category: Option<ExpenseCategory>,
    /// `Some("")` clears the notes
    pub notes: Option<String>,
}

impl ExpenseChanges {
    /// Every invariant the provided fields violate, in field order
    pub fn violations(&self) -> Vec<ExpenseValidationError> {
        let mut errors = Vec::new();

        if let Some(Err(e)) = self.vendor.as_deref().map(validate_vendor) {
            errors.push(e);
        }
        if let Some(Err(e)) = self.amount.map(|amount| validate_amount(Some(amount))) {
            errors.push(e);
        }

        errors
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: String,
    date: NaiveDate,
    amount: f64,
    vendor: String,
    category: ExpenseCategory,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Validate `params` and build a record from them.
    ///
    /// Fails on the first violated invariant, checked in the order vendor,
    /// amount, date, category, timestamps.
    pub fn new(params: ExpenseParams) -> Result<Self, ExpenseValidationError> {
        let vendor = validate_vendor(&params.vendor)?;
        let amount = validate_amount(params.amount)?;
        let date = params.date.ok_or(ExpenseValidationError::MissingDate)?;
        let category = params
            .category
            .ok_or(ExpenseValidationError::MissingCategory)?;

        let now = current_timestamp();
        let created_at = params
            .created_at
            .map(|ts| ts.trunc_subsecs(3))
            .unwrap_or(now);
        let updated_at = params
            .updated_at
            .map(|ts| ts.trunc_subsecs(3))
            .unwrap_or_else(|| now.max(created_at));
        if updated_at < created_at {
            return Err(ExpenseValidationError::TimestampsOutOfOrder);
        }

        let id = params
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(Self::generate_id);

        Ok(Self {
            id,
            date,
            amount,
            vendor,
            category,
            notes: params.notes.and_then(normalize_notes),
            created_at,
            updated_at,
        })
    }

    /// Generate a fresh random expense ID
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Apply `changes` and advance `updated_at`.
    ///
    /// All provided fields are validated before any of them is applied, so a
    /// failed update leaves the record untouched.
    pub fn update(&mut self, changes: ExpenseChanges) -> Result<(), ExpenseValidationError> {
        self.update_at(changes, current_timestamp())
    }

    pub(crate) fn update_at(
        &mut self,
        changes: ExpenseChanges,
        now: DateTime<Utc>,
    ) -> Result<(), ExpenseValidationError> {
        let vendor = changes.vendor.as_deref().map(validate_vendor).transpose()?;
        let amount = match changes.amount {
            Some(amount) => Some(validate_amount(Some(amount))?),
            None => None,
        };

        if let Some(vendor) = vendor {
            self.vendor = vendor;
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(notes) = changes.notes {
            self.notes = normalize_notes(notes);
        }

        // Strictly after creation, and never earlier than the previous update
        let earliest = self
            .created_at
            .checked_add_signed(Duration::milliseconds(1))
            .unwrap_or(self.created_at);
        self.updated_at = now.trunc_subsecs(3).max(earliest).max(self.updated_at);

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn validate_vendor(vendor: &str) -> Result<String, ExpenseValidationError> {
    let trimmed = vendor.trim();
    if trimmed.is_empty() {
        return Err(ExpenseValidationError::EmptyVendor);
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Option<f64>) -> Result<f64, ExpenseValidationError> {
    let amount = amount.ok_or(ExpenseValidationError::MissingAmount)?;
    // NaN fails the comparison
    if !(amount > 0.0 && amount.is_finite()) {
        return Err(ExpenseValidationError::NonPositiveAmount);
    }
    Ok(amount)
}

fn normalize_notes(notes: String) -> Option<String> {
    if notes.trim().is_empty() {
        None
    } else {
        Some(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_params() -> ExpenseParams {
        ExpenseParams {
            date: Some(date(2023, 1, 1)),
            amount: Some(100.50),
            vendor: "Office Supplies Inc.".to_string(),
            category: Some(ExpenseCategory::OfficeSupplies),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_valid_expense() {
        let expense = Expense::new(valid_params()).expect("valid params should construct");

        assert!(!expense.id().is_empty());
        assert_eq!(expense.date(), date(2023, 1, 1));
        assert_eq!(expense.amount(), 100.50);
        assert_eq!(expense.vendor(), "Office Supplies Inc.");
        assert_eq!(expense.category(), ExpenseCategory::OfficeSupplies);
        assert_eq!(expense.notes(), None);
        assert_eq!(expense.created_at(), expense.updated_at());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let first = Expense::new(valid_params()).unwrap();
        let second = Expense::new(valid_params()).unwrap();
        assert_ne!(first.id(), second.id());
        assert!(Uuid::parse_str(first.id()).is_ok());
    }

    #[test]
    fn test_vendor_is_trimmed() {
        let params = ExpenseParams {
            vendor: "  Acme Corp \t".to_string(),
            ..valid_params()
        };
        let expense = Expense::new(params).unwrap();
        assert_eq!(expense.vendor(), "Acme Corp");
    }

    #[test]
    fn test_empty_vendor_rejected() {
        for vendor in ["", "   ", "\n\t"] {
            let params = ExpenseParams {
                vendor: vendor.to_string(),
                ..valid_params()
            };
            let err = Expense::new(params).unwrap_err();
            assert_eq!(err, ExpenseValidationError::EmptyVendor);
            assert_eq!(err.field(), ExpenseField::Vendor);
            assert_eq!(err.to_string(), "Vendor name is required");
        }
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = ExpenseParams {
                amount: Some(amount),
                ..valid_params()
            };
            let err = Expense::new(params).unwrap_err();
            assert_eq!(err, ExpenseValidationError::NonPositiveAmount);
            assert_eq!(err.field(), ExpenseField::Amount);
        }

        let params = ExpenseParams {
            amount: None,
            ..valid_params()
        };
        assert_eq!(
            Expense::new(params).unwrap_err(),
            ExpenseValidationError::MissingAmount
        );
    }

    #[test]
    fn test_missing_date_and_category_rejected() {
        let params = ExpenseParams {
            date: None,
            ..valid_params()
        };
        assert_eq!(
            Expense::new(params).unwrap_err(),
            ExpenseValidationError::MissingDate
        );

        let params = ExpenseParams {
            category: None,
            ..valid_params()
        };
        let err = Expense::new(params).unwrap_err();
        assert_eq!(err, ExpenseValidationError::MissingCategory);
        assert_eq!(err.field().as_str(), "category");
    }

    #[test]
    fn test_first_violation_wins() {
        // Empty vendor and zero amount: vendor is checked first
        let params = ExpenseParams {
            vendor: String::new(),
            amount: Some(0.0),
            date: None,
            category: None,
            ..Default::default()
        };
        assert_eq!(
            Expense::new(params.clone()).unwrap_err(),
            ExpenseValidationError::EmptyVendor
        );
        assert_eq!(
            params.violations(),
            vec![
                ExpenseValidationError::EmptyVendor,
                ExpenseValidationError::NonPositiveAmount,
                ExpenseValidationError::MissingDate,
                ExpenseValidationError::MissingCategory,
            ]
        );
    }

    #[test]
    fn test_reconstruct_with_supplied_identity() {
        let created_at = DateTime::parse_from_rfc3339("2023-01-01T10:00:00.000Z")
            .unwrap()
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339("2023-01-02T10:00:00.000Z")
            .unwrap()
            .with_timezone(&Utc);
        let params = ExpenseParams {
            id: Some("expense-1".to_string()),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            notes: Some("Printer paper".to_string()),
            ..valid_params()
        };

        let expense = Expense::new(params).unwrap();
        assert_eq!(expense.id(), "expense-1");
        assert_eq!(expense.created_at(), created_at);
        assert_eq!(expense.updated_at(), updated_at);
        assert_eq!(expense.notes(), Some("Printer paper"));
    }

    #[test]
    fn test_reconstruct_rejects_reversed_timestamps() {
        let created_at = Utc::now();
        let params = ExpenseParams {
            created_at: Some(created_at),
            updated_at: Some(created_at - Duration::seconds(5)),
            ..valid_params()
        };
        let err = Expense::new(params).unwrap_err();
        assert_eq!(err, ExpenseValidationError::TimestampsOutOfOrder);
        assert_eq!(err.field(), ExpenseField::UpdatedAt);
    }

    #[test]
    fn test_violations_default_created_at_like_new() {
        let params = ExpenseParams {
            updated_at: Some(Utc::now() - Duration::hours(1)),
            ..valid_params()
        };
        assert_eq!(
            params.violations(),
            vec![ExpenseValidationError::TimestampsOutOfOrder]
        );
        assert_eq!(
            Expense::new(params).unwrap_err(),
            ExpenseValidationError::TimestampsOutOfOrder
        );

        let params = ExpenseParams {
            updated_at: Some(Utc::now() + Duration::hours(1)),
            ..valid_params()
        };
        assert!(params.violations().is_empty());
        assert!(Expense::new(params).is_ok());
    }

    #[test]
    fn test_empty_supplied_id_is_replaced() {
        let params = ExpenseParams {
            id: Some(String::new()),
            ..valid_params()
        };
        assert!(!Expense::new(params).unwrap().id().is_empty());
    }

    #[test]
    fn test_blank_notes_stored_as_none() {
        let params = ExpenseParams {
            notes: Some("   ".to_string()),
            ..valid_params()
        };
        assert_eq!(Expense::new(params).unwrap().notes(), None);
    }

    #[test]
    fn test_update_all_fields() {
        let mut expense = Expense::new(valid_params()).unwrap();

        expense
            .update(ExpenseChanges {
                date: Some(date(2023, 2, 1)),
                amount: Some(200.0),
                vendor: Some("Updated Vendor".to_string()),
                category: Some(ExpenseCategory::Travel),
                notes: Some("Flight".to_string()),
            })
            .unwrap();

        assert_eq!(expense.date(), date(2023, 2, 1));
        assert_eq!(expense.amount(), 200.0);
        assert_eq!(expense.vendor(), "Updated Vendor");
        assert_eq!(expense.category(), ExpenseCategory::Travel);
        assert_eq!(expense.notes(), Some("Flight"));
        assert!(expense.updated_at() > expense.created_at());
    }

    #[test]
    fn test_update_in_same_tick_is_strictly_later() {
        let mut expense = Expense::new(valid_params()).unwrap();
        let created_at = expense.created_at();

        expense
            .update_at(
                ExpenseChanges {
                    amount: Some(5.0),
                    ..Default::default()
                },
                created_at,
            )
            .unwrap();
        assert_eq!(expense.updated_at(), created_at + Duration::milliseconds(1));

        // A clock running behind never moves updated_at backwards
        let previous = expense.updated_at();
        expense
            .update_at(ExpenseChanges::default(), created_at - Duration::seconds(10))
            .unwrap();
        assert!(expense.updated_at() >= previous);
        assert!(expense.updated_at() > created_at);
    }

    #[test]
    fn test_update_at_max_timestamp_does_not_overflow() {
        let max = DateTime::<Utc>::MAX_UTC.trunc_subsecs(3);
        let mut expense = Expense::new(ExpenseParams {
            created_at: Some(max),
            updated_at: Some(max),
            ..valid_params()
        })
        .unwrap();

        expense
            .update_at(
                ExpenseChanges {
                    amount: Some(7.0),
                    ..Default::default()
                },
                Utc::now(),
            )
            .unwrap();
        assert_eq!(expense.amount(), 7.0);
        assert_eq!(expense.updated_at(), max);
    }

    #[test]
    fn test_change_violations_only_cover_provided_fields() {
        assert!(ExpenseChanges::default().violations().is_empty());

        let changes = ExpenseChanges {
            vendor: Some(" ".to_string()),
            amount: Some(0.0),
            category: Some(ExpenseCategory::Meals),
            ..Default::default()
        };
        assert_eq!(
            changes.violations(),
            vec![
                ExpenseValidationError::EmptyVendor,
                ExpenseValidationError::NonPositiveAmount,
            ]
        );
    }

    #[test]
    fn test_update_amount_only_leaves_other_fields() {
        let mut expense = Expense::new(ExpenseParams {
            notes: Some("Toner".to_string()),
            ..valid_params()
        })
        .unwrap();
        let before = expense.clone();

        expense
            .update(ExpenseChanges {
                amount: Some(150.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(expense.amount(), 150.0);
        assert_eq!(expense.id(), before.id());
        assert_eq!(expense.vendor(), before.vendor());
        assert_eq!(expense.date(), before.date());
        assert_eq!(expense.category(), before.category());
        assert_eq!(expense.notes(), before.notes());
        assert_eq!(expense.created_at(), before.created_at());
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut expense = Expense::new(valid_params()).unwrap();
        let before = expense.clone();

        // The vendor is valid but the amount is not; neither may be applied
        let err = expense
            .update(ExpenseChanges {
                vendor: Some("New Vendor".to_string()),
                amount: Some(-10.0),
                category: Some(ExpenseCategory::Meals),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, ExpenseValidationError::NonPositiveAmount);
        assert_eq!(expense, before);

        let err = expense
            .update(ExpenseChanges {
                vendor: Some("  ".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.field(), ExpenseField::Vendor);
        assert_eq!(expense, before);
    }

    #[test]
    fn test_update_can_clear_notes() {
        let mut expense = Expense::new(ExpenseParams {
            notes: Some("Temporary".to_string()),
            ..valid_params()
        })
        .unwrap();

        expense
            .update(ExpenseChanges {
                notes: Some(String::new()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(expense.notes(), None);
    }
}
