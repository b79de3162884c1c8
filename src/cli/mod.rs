//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod advisor;
pub mod budget;
pub mod calc;
pub mod history;
pub mod learn;
pub mod loan;
pub mod report;
pub mod settings;

pub use advisor::{handle_advise_command, handle_chat_command};
pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcArgs};
pub use history::handle_history_command;
pub use learn::{handle_learn_command, LearnCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};

use crate::error::{EduEasyError, EduEasyResult};
use crate::models::Money;

/// Parse a user-typed amount such as `2500`, `2,500.00` or `$2500`
pub(crate) fn parse_amount(input: &str, field: &str) -> EduEasyResult<Money> {
    Money::parse(input).map_err(|e| {
        EduEasyError::Validation(format!(
            "Invalid {}: '{}'. Use a format like '2500' or '2500.00' ({})",
            field, input, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2,500.50", "amount").unwrap(), Money::from_cents(250050));

        let err = parse_amount("lots", "income").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid income"));
    }
}
