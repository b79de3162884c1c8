//! Loan record model
//!
//! One entry per tracked loan. Each record also carries the monthly income
//! the student had when the loan was recorded; the dashboard reads the income
//! of the first record as the student's income.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::LoanId;
use super::money::Money;

/// Validation errors for loan records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanValidationError {
    EmptyTitle,
    NegativeAmount,
    NegativeIncome,
}

impl std::fmt::Display for LoanValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Loan title cannot be empty"),
            Self::NegativeAmount => write!(f, "Loan amount cannot be negative"),
            Self::NegativeIncome => write!(f, "Monthly income cannot be negative"),
        }
    }
}

impl std::error::Error for LoanValidationError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,
    pub title: String,
    pub category: String,
    pub monthly_income: Money,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LoanRecord {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        monthly_income: Money,
        amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: LoanId::new(),
            title: title.into(),
            category: category.into(),
            monthly_income,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an inline edit; untouched fields keep their values
    pub fn apply(&mut self, update: &LoanUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(income) = update.monthly_income {
            self.monthly_income = income;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), LoanValidationError> {
        if self.title.trim().is_empty() {
            return Err(LoanValidationError::EmptyTitle);
        }
        if self.amount.is_negative() {
            return Err(LoanValidationError::NegativeAmount);
        }
        if self.monthly_income.is_negative() {
            return Err(LoanValidationError::NegativeIncome);
        }
        Ok(())
    }
}

/// Partial update used by inline editing
#[derive(Debug, Clone, Default)]
pub struct LoanUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub monthly_income: Option<Money>,
    pub amount: Option<Money>,
}

impl LoanUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.monthly_income.is_none()
            && self.amount.is_none()
    }
}

/// Records a fresh install starts with
pub fn starter_loans() -> Vec<LoanRecord> {
    vec![
        LoanRecord::new(
            "Fall Semester Tuition 2024",
            "Education",
            Money::from_units(800),
            Money::from_units(2500),
        ),
        LoanRecord::new(
            "Laptop & Equipment",
            "Supplies",
            Money::from_units(800),
            Money::from_units(1500),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loan() {
        let loan = LoanRecord::new("Tuition", "Education", Money::from_units(800), Money::from_units(2500));
        assert_eq!(loan.title, "Tuition");
        assert_eq!(loan.amount.cents(), 250000);
        assert!(loan.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut loan = LoanRecord::new("  ", "Education", Money::zero(), Money::zero());
        assert_eq!(loan.validate(), Err(LoanValidationError::EmptyTitle));

        loan.title = "Books".into();
        loan.amount = Money::from_cents(-1);
        assert_eq!(loan.validate(), Err(LoanValidationError::NegativeAmount));

        loan.amount = Money::zero();
        loan.monthly_income = Money::from_cents(-1);
        assert_eq!(loan.validate(), Err(LoanValidationError::NegativeIncome));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut loan = LoanRecord::new("Tuition", "Education", Money::from_units(800), Money::from_units(2500));
        let update = LoanUpdate {
            amount: Some(Money::from_units(3000)),
            ..Default::default()
        };
        loan.apply(&update);

        assert_eq!(loan.title, "Tuition");
        assert_eq!(loan.monthly_income, Money::from_units(800));
        assert_eq!(loan.amount, Money::from_units(3000));
        assert!(loan.updated_at >= loan.created_at);
    }

    #[test]
    fn test_starter_loans() {
        let loans = starter_loans();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].category, "Education");
        assert_eq!(loans[1].amount, Money::from_units(1500));
    }
}
