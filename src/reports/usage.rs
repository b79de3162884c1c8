//! Usage statistics since install

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::EduEasyResult;
use crate::models::{Currency, LoanRecord};
use crate::services::amortization::{LoanTerms, DAYS_PER_MONTH};
use crate::storage::Storage;

#[derive(Debug, Clone, Serialize)]
pub struct UsageStats {
    pub installed_at: DateTime<Utc>,
    /// Whole days since install, at least 1
    pub days_since_install: i64,
    pub total_earned: f64,
    pub total_lost: f64,
}

/// Whole days elapsed, never less than one
pub fn days_since(installed_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - installed_at).num_days().max(1)
}

impl UsageStats {
    pub fn compute(
        loans: &[LoanRecord],
        terms: LoanTerms,
        currency: Currency,
        installed_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let days = days_since(installed_at, now);

        let daily_income: f64 = loans
            .iter()
            .map(|loan| loan.monthly_income.to_major() / DAYS_PER_MONTH)
            .sum();
        let daily_cost: f64 = loans
            .iter()
            .map(|loan| terms.monthly_payment(loan.amount.to_major()) / DAYS_PER_MONTH)
            .sum();

        Self {
            installed_at,
            days_since_install: days,
            total_earned: daily_income * days as f64 * currency.rate(),
            total_lost: daily_cost * days as f64 * currency.rate(),
        }
    }

    pub fn generate(
        storage: &Storage,
        terms: LoanTerms,
        currency: Currency,
        installed_at: DateTime<Utc>,
    ) -> EduEasyResult<Self> {
        let loans = storage.loans.get_all()?;
        Ok(Self::compute(&loans, terms, currency, installed_at, Utc::now()))
    }
}
