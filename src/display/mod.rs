//! Display formatting for terminal output
//!
//! Plain-text tables and detail views. Amounts are converted to the active
//! display currency before printing.

pub mod budget;
pub mod format;
pub mod learn;
pub mod loan;
pub mod report;

pub use budget::{format_budget_summary, format_expense_list, format_goal_list};
pub use learn::{format_badges, format_question, format_quiz_list, format_quiz_result};
pub use loan::{format_loan_details, format_loan_list};
pub use report::{format_daily, format_portfolio, format_quote, format_usage};
