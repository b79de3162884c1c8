//! Report CLI commands

use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_daily, format_portfolio, format_usage};
use crate::error::{EduEasyError, EduEasyResult};
use crate::reports::{DailyReport, PortfolioReport, UsageStats};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Dashboard totals and debt-to-income ratio
    #[command(alias = "stats")]
    Dashboard,
    /// Daily income vs. loan cost per loan
    Daily,
    /// What you have earned and paid since install
    Usage,
}

pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    installed_at: DateTime<Utc>,
    cmd: ReportCommands,
) -> EduEasyResult<()> {
    let currency = settings.currency;
    let terms = settings.loan_terms();
    terms.validate().map_err(EduEasyError::Config)?;

    match cmd {
        ReportCommands::Dashboard => {
            let report = PortfolioReport::generate(storage, currency)?;
            print!("{}", format_portfolio(&report));
        }
        ReportCommands::Daily => {
            let report = DailyReport::generate(storage, terms, currency)?;
            print!("{}", format_daily(&report));
        }
        ReportCommands::Usage => {
            let stats = UsageStats::generate(storage, terms, currency, installed_at)?;
            print!("{}", format_usage(&stats, currency));
        }
    }

    Ok(())
}
