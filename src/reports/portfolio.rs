//! Portfolio statistics
//!
//! The dashboard aggregate over the loan collection. Income is read from the
//! first record only.

use serde::Serialize;

use crate::error::EduEasyResult;
use crate::models::{Currency, LoanRecord};
use crate::storage::Storage;

/// Derived dashboard figures, in the display currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialStats {
    pub total_loans_count: usize,
    /// Monthly income of the first record
    pub total_income: f64,
    pub total_debt: f64,
    pub average_loan_size: f64,
    /// Total debt over annualized income
    pub debt_to_income_ratio: f64,
}

impl FinancialStats {
    pub fn empty() -> Self {
        Self {
            total_loans_count: 0,
            total_income: 0.0,
            total_debt: 0.0,
            average_loan_size: 0.0,
            debt_to_income_ratio: 0.0,
        }
    }

    /// Aggregate the collection, converting with `currency`
    pub fn compute(loans: &[LoanRecord], currency: Currency) -> Self {
        let Some(first) = loans.first() else {
            return Self::empty();
        };

        let count = loans.len();
        let total_income = currency.convert(first.monthly_income);
        let total_debt = currency.convert(loans.iter().map(|loan| loan.amount).sum());

        let annual_income = total_income * 12.0;
        let denominator = if annual_income == 0.0 { 1.0 } else { annual_income };

        Self {
            total_loans_count: count,
            total_income,
            total_debt,
            average_loan_size: total_debt / count as f64,
            debt_to_income_ratio: total_debt / denominator,
        }
    }

    /// Debt-to-income as a percentage
    pub fn debt_to_income_percent(&self) -> f64 {
        self.debt_to_income_ratio * 100.0
    }
}

/// Number of loans per category, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

pub fn category_breakdown(loans: &[LoanRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for loan in loans {
        match counts.iter_mut().find(|c| c.category == loan.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: loan.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// One bar of the income vs. loan chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanBar {
    pub title: String,
    pub income: f64,
    pub loan: f64,
}

/// Dashboard report: headline stats plus chart series
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    pub currency: Currency,
    pub stats: FinancialStats,
    pub categories: Vec<CategoryCount>,
    pub bars: Vec<LoanBar>,
}

impl PortfolioReport {
    pub fn from_loans(loans: &[LoanRecord], currency: Currency) -> Self {
        Self {
            currency,
            stats: FinancialStats::compute(loans, currency),
            categories: category_breakdown(loans),
            bars: loans
                .iter()
                .map(|loan| LoanBar {
                    title: loan.title.clone(),
                    income: currency.convert(loan.monthly_income),
                    loan: currency.convert(loan.amount),
                })
                .collect(),
        }
    }

    pub fn generate(storage: &Storage, currency: Currency) -> EduEasyResult<Self> {
        let loans = storage.loans.get_all()?;
        Ok(Self::from_loans(&loans, currency))
    }
}
