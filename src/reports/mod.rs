//! Reports for EduEasy
//!
//! Derived figures recomputed from the stored collections on every request:
//!
//! - Portfolio: the dashboard totals, debt-to-income ratio and chart series
//! - Daily: per-loan daily income vs. loan cost
//! - Usage: money earned and lost to loans since install
//! - Budget: expense totals and savings-goal progress

pub mod budget;
pub mod daily;
pub mod portfolio;
pub mod usage;

pub use budget::{BudgetSummary, CategoryTotal, GoalProgress};
pub use daily::{DailyLoanAnalysis, DailyReport};
pub use portfolio::{category_breakdown, CategoryCount, FinancialStats, PortfolioReport};
pub use usage::UsageStats;
