//! Daily analysis
//!
//! For each loan: what a day of income looks like after that loan's monthly
//! payment, under the configured rate and term.

use serde::Serialize;
use tracing::debug;

use crate::error::EduEasyResult;
use crate::models::{Currency, LoanId, LoanRecord};
use crate::services::amortization::{DailyBreakdown, LoanTerms};
use crate::storage::Storage;

#[derive(Debug, Clone, Serialize)]
pub struct DailyLoanAnalysis {
    pub loan_id: LoanId,
    pub title: String,
    pub category: String,
    pub monthly_payment: f64,
    pub breakdown: DailyBreakdown,
}

impl DailyLoanAnalysis {
    pub fn is_high_debt(&self) -> bool {
        self.breakdown.is_high_debt()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub currency: Currency,
    pub terms: LoanTerms,
    pub loans: Vec<DailyLoanAnalysis>,
}

impl DailyReport {
    pub fn from_loans(loans: &[LoanRecord], terms: LoanTerms, currency: Currency) -> Self {
        let loans = loans
            .iter()
            .map(|loan| {
                let principal = currency.convert(loan.amount);
                let monthly_payment = terms.monthly_payment(principal);
                let breakdown =
                    DailyBreakdown::new(currency.convert(loan.monthly_income), monthly_payment);
                debug!(id = %loan.id, monthly_payment, "daily analysis");

                DailyLoanAnalysis {
                    loan_id: loan.id,
                    title: loan.title.clone(),
                    category: loan.category.clone(),
                    monthly_payment,
                    breakdown,
                }
            })
            .collect();

        Self {
            currency,
            terms,
            loans,
        }
    }

    pub fn generate(storage: &Storage, terms: LoanTerms, currency: Currency) -> EduEasyResult<Self> {
        let loans = storage.loans.get_all()?;
        Ok(Self::from_loans(&loans, terms, currency))
    }

    pub fn high_debt_count(&self) -> usize {
        self.loans.iter().filter(|l| l.is_high_debt()).count()
    }
}
