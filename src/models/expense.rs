//! Budget tracker expense model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingCategory,
    NonPositiveAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Expense category is required"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: String,
    pub amount: Money,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create an expense. A blank name falls back to the category.
    pub fn new(category: impl Into<String>, amount: Money, name: Option<String>) -> Self {
        let category = category.into();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| category.clone());
        Self {
            id: ExpenseId::new(),
            category,
            amount,
            name,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_defaults_to_category() {
        let expense = Expense::new("Food", Money::from_units(40), None);
        assert_eq!(expense.name, "Food");

        let expense = Expense::new("Food", Money::from_units(40), Some("   ".into()));
        assert_eq!(expense.name, "Food");

        let expense = Expense::new("Food", Money::from_units(40), Some("Groceries".into()));
        assert_eq!(expense.name, "Groceries");
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Expense::new("", Money::from_units(1), None).validate(),
            Err(ExpenseValidationError::MissingCategory)
        );
        assert_eq!(
            Expense::new("Rent", Money::zero(), None).validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );
        assert!(Expense::new("Rent", Money::from_units(300), None).validate().is_ok());
    }
}
