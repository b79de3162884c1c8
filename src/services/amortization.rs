//! Loan amortization
//!
//! The one place the fixed monthly payment is computed. The daily analysis,
//! the usage statistics and the standalone calculator all call into here.

use serde::Serialize;

/// Days per month used for every daily figure
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Below this share of daily income left after loan costs a loan is flagged
pub const HIGH_DEBT_THRESHOLD_PERCENT: f64 = 30.0;

/// Fixed monthly payment that amortizes `principal` over `term_months`
/// equal payments at `annual_rate_percent` nominal, compounded monthly.
///
/// A non-positive principal costs nothing and a non-positive rate is repaid
/// straight-line. `term_months` must be positive.
pub fn monthly_payment_for_months(principal: f64, annual_rate_percent: f64, term_months: f64) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    if annual_rate_percent <= 0.0 {
        return principal / term_months;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(term_months);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Fixed monthly payment for a term given in years
///
/// # Examples
/// ```
/// use edueasy::services::amortization::monthly_payment;
/// assert_eq!(monthly_payment(1200.0, 0.0, 1.0), 100.0);
/// assert_eq!(monthly_payment(0.0, 5.5, 10.0), 0.0);
/// ```
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    monthly_payment_for_months(principal, annual_rate_percent, term_years * 12.0)
}

/// Rate and term applied to every tracked loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl LoanTerms {
    pub fn new(annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            annual_rate_percent,
            term_years,
        }
    }

    pub fn monthly_payment(&self, principal: f64) -> f64 {
        monthly_payment(principal, self.annual_rate_percent, self.term_years)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.term_years.is_finite() || self.term_years <= 0.0 {
            return Err(format!("Loan term must be positive, got {}", self.term_years));
        }
        if !self.annual_rate_percent.is_finite() {
            return Err("Interest rate must be a finite number".to_string());
        }
        Ok(())
    }
}

/// Result of the standalone calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentQuote {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl PaymentQuote {
    /// Quote a loan whose term is given in months
    pub fn for_months(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        let monthly = monthly_payment_for_months(principal, annual_rate_percent, f64::from(term_months));
        let total_paid = monthly * f64::from(term_months);
        Self {
            principal,
            annual_rate_percent,
            term_months,
            monthly_payment: monthly,
            total_paid,
            total_interest: total_paid - principal,
        }
    }
}

/// How one month's income and loan payment look per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBreakdown {
    pub daily_income: f64,
    pub daily_cost: f64,
    pub daily_remaining: f64,
    /// `None` when there is no income to take a share of
    pub percent_remaining: Option<f64>,
}

impl DailyBreakdown {
    pub fn new(monthly_income: f64, monthly_payment: f64) -> Self {
        let daily_income = monthly_income / DAYS_PER_MONTH;
        let daily_cost = monthly_payment / DAYS_PER_MONTH;
        let daily_remaining = daily_income - daily_cost;
        let percent_remaining = if daily_income == 0.0 {
            None
        } else {
            Some(daily_remaining / daily_income * 100.0)
        };

        Self {
            daily_income,
            daily_cost,
            daily_remaining,
            percent_remaining,
        }
    }

    /// Less than 30% of daily income is left, or there is a cost with no income
    pub fn is_high_debt(&self) -> bool {
        match self.percent_remaining {
            Some(percent) => percent < HIGH_DEBT_THRESHOLD_PERCENT,
            None => self.daily_cost > 0.0,
        }
    }

    /// Width of the remaining-income bar, clamped to `[0, 100]`
    pub fn bar_percent(&self) -> f64 {
        self.percent_remaining.unwrap_or(0.0).clamp(0.0, 100.0)
    }
}
