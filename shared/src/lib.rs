use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business expense categories offered by the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Meals")]
    Meals,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Rent")]
    Rent,
    #[serde(rename = "Software")]
    Software,
    #[serde(rename = "Hardware")]
    Hardware,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Other")]
    Other,
}

impl ExpenseCategory {
    /// Every category, in the order the form lists them
    pub const ALL: [ExpenseCategory; 10] = [
        ExpenseCategory::OfficeSupplies,
        ExpenseCategory::Travel,
        ExpenseCategory::Meals,
        ExpenseCategory::Utilities,
        ExpenseCategory::Rent,
        ExpenseCategory::Software,
        ExpenseCategory::Hardware,
        ExpenseCategory::ProfessionalServices,
        ExpenseCategory::Marketing,
        ExpenseCategory::Other,
    ];

    /// Display label, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::OfficeSupplies => "Office Supplies",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Meals => "Meals",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Software => "Software",
            ExpenseCategory::Hardware => "Hardware",
            ExpenseCategory::ProfessionalServices => "Professional Services",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown expense category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

/// An expense as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub amount: f64,
    pub vendor: String,
    pub category: ExpenseCategory,
    pub notes: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

/// Request for creating a new expense from the expense form
///
/// Date and category arrive as the raw form strings; an empty string is
/// treated the same as a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateExpenseRequest {
    pub date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    pub amount: Option<f64>,
    pub vendor: String,
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Request for updating an existing expense; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateExpenseRequest {
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Response after creating or updating an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub expense: Expense,
    pub success_message: String,
}

/// Response containing every stored expense, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    pub deleted: bool,
}

/// A single field-level validation failure for inline form display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result of validating an expense form without saving it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseValidationResponse {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<ExpenseCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
