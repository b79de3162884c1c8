//! Settings CLI commands

use clap::Subcommand;
use tracing::info;

use crate::audit::{AuditEntry, ChangeSet, FieldChange, Subject};
use crate::config::Settings;
use crate::error::{EduEasyError, EduEasyResult};
use crate::models::{Currency, Language};
use crate::services::LoanTerms;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Set the display currency (USD, AZN)
    Currency { currency: String },
    /// Set the advisor language
    Language { language: String },
    /// Set the annual interest rate in percent
    Rate {
        #[arg(allow_negative_numbers = true)]
        rate: f64,
    },
    /// Set the repayment term in years
    Term { years: f64 },
    /// List the available advisor languages
    Languages,
}

pub fn handle_settings_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> EduEasyResult<()> {
    let before = settings.clone();

    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(settings));
            return Ok(());
        }
        SettingsCommands::Languages => {
            for language in Language::ALL {
                let direction = if language.is_right_to_left() { "  (right-to-left)" } else { "" };
                println!("  {}{}", language, direction);
            }
            return Ok(());
        }
        SettingsCommands::Currency { currency } => {
            settings.currency = currency.parse::<Currency>().map_err(EduEasyError::Validation)?;
        }
        SettingsCommands::Language { language } => {
            settings.language = language.parse::<Language>().map_err(EduEasyError::Validation)?;
        }
        SettingsCommands::Rate { rate } => {
            LoanTerms::new(rate, settings.loan_term_years)
                .validate()
                .map_err(EduEasyError::Validation)?;
            settings.interest_rate = rate;
        }
        SettingsCommands::Term { years } => {
            LoanTerms::new(settings.interest_rate, years)
                .validate()
                .map_err(EduEasyError::Validation)?;
            settings.loan_term_years = years;
        }
    }

    settings.save(storage.paths())?;
    let changes = describe_changes(&before, settings);
    if !changes.is_empty() {
        storage.record(AuditEntry::edited(Subject::Settings, "settings", "Settings", changes))?;
    }
    info!("settings updated");

    print!("{}", format_settings(settings));
    Ok(())
}

fn describe_changes(before: &Settings, after: &Settings) -> Vec<FieldChange> {
    let mut changes = ChangeSet::new();
    changes
        .text("currency", before.currency, after.currency)
        .text("language", before.language, after.language)
        .text("interest_rate", before.interest_rate, after.interest_rate)
        .text("loan_term_years", before.loan_term_years, after.loan_term_years);
    changes.into_changes()
}

pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency:      {}\n", settings.currency));
    output.push_str(&format!("  Language:      {}\n", settings.language));
    output.push_str(&format!("  Interest Rate: {}%\n", settings.interest_rate));
    output.push_str(&format!("  Loan Term:     {} years\n", settings.loan_term_years));
    output.push_str(&format!("  Advisor Model: {}\n", settings.advisor.model));
    output.push_str(&format!(
        "  API Key:       {} (${})\n",
        if settings.advisor.api_key().is_some() { "set" } else { "missing" },
        settings.advisor.api_key_env
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_changes() {
        let before = Settings::default();
        let mut after = before.clone();
        assert!(describe_changes(&before, &after).is_empty());

        after.currency = Currency::Azn;
        after.interest_rate = 4.0;
        let rendered: Vec<String> = describe_changes(&before, &after)
            .iter()
            .map(|change| change.render(Currency::Usd))
            .collect();
        assert_eq!(rendered, ["currency: USD -> AZN", "interest_rate: 5.5 -> 4"]);
    }

    #[test]
    fn test_format_settings() {
        let output = format_settings(&Settings::default());
        assert!(output.contains("Currency:      USD"));
        assert!(output.contains("Language:      English"));
        assert!(output.contains("Interest Rate: 5.5%"));
        assert!(output.contains("Loan Term:     10 years"));
    }
}
