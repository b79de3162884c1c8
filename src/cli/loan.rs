//! Loan CLI commands
//!
//! Implements CLI commands for the loan collection and the application wizard.

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::loan::{format_loan_details, format_loan_list};
use crate::error::EduEasyResult;
use crate::models::LoanUpdate;
use crate::services::{Consents, LoanApplication, LoanService};
use crate::storage::Storage;

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Add a loan
    Add {
        /// Loan title
        title: String,
        /// Amount borrowed (e.g., "2500" or "2500.00")
        amount: String,
        /// Category (e.g., Education, Supplies)
        #[arg(short, long, default_value = "Education")]
        category: String,
        /// Monthly income
        #[arg(short, long, default_value = "0")]
        income: String,
    },
    /// List all loans
    List,
    /// Show loan details
    Show {
        /// Loan ID (full or short)
        loan: String,
    },
    /// Edit a loan in place
    Edit {
        /// Loan ID (full or short)
        loan: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New monthly income
        #[arg(short, long)]
        income: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
    },
    /// Delete a loan
    #[command(alias = "rm")]
    Remove {
        /// Loan ID (full or short)
        loan: String,
    },
    /// Apply for a new student loan
    Apply {
        /// Full name of the applicant
        #[arg(long)]
        name: String,
        /// University or college
        #[arg(long)]
        institution: String,
        /// Field of study
        #[arg(long)]
        specialty: String,
        /// Requested amount
        #[arg(long)]
        amount: String,
        /// Loan product
        #[arg(long, default_value = "Standard STL")]
        loan_type: String,
        /// Accept the loan agreement
        #[arg(long)]
        accept_agreement: bool,
        /// Consent to personal data processing
        #[arg(long)]
        accept_data_processing: bool,
        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,
    },
}

/// Handle a loan command
pub fn handle_loan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LoanCommands,
) -> EduEasyResult<()> {
    let service = LoanService::new(storage);
    let currency = settings.currency;

    match cmd {
        LoanCommands::Add {
            title,
            amount,
            category,
            income,
        } => {
            let amount = parse_amount(&amount, "amount")?;
            let income = parse_amount(&income, "income")?;
            let loan = service.add(&title, &category, income, amount)?;

            println!("Added loan: {}", loan.title);
            println!("  ID: {}", loan.id);
        }

        LoanCommands::List => {
            let loans = service.list()?;
            print!("{}", format_loan_list(&loans, currency));
        }

        LoanCommands::Show { loan } => {
            let found = service.get(&loan)?;
            print!("{}", format_loan_details(&found, currency));
        }

        LoanCommands::Edit {
            loan,
            title,
            category,
            income,
            amount,
        } => {
            let update = LoanUpdate {
                title,
                category,
                monthly_income: income
                    .as_deref()
                    .map(|v| parse_amount(v, "income"))
                    .transpose()?,
                amount: amount
                    .as_deref()
                    .map(|v| parse_amount(v, "amount"))
                    .transpose()?,
            };

            if update.is_empty() {
                println!("No changes specified. Use --title, --category, --income or --amount.");
                return Ok(());
            }

            let updated = service.update(&loan, update)?;
            println!("Updated loan: {}", updated.title);
        }

        LoanCommands::Remove { loan } => {
            let removed = service.delete(&loan)?;
            println!("Deleted loan: {}", removed.title);
        }

        LoanCommands::Apply {
            name,
            institution,
            specialty,
            amount,
            loan_type,
            accept_agreement,
            accept_data_processing,
            accept_terms,
        } => {
            let application = LoanApplication {
                applicant_name: name,
                institution,
                specialty,
                loan_type,
                requested_amount: amount,
                consents: Consents {
                    agreement: accept_agreement,
                    data_processing: accept_data_processing,
                    terms: accept_terms,
                },
            };

            let outcome = application.submit()?;
            println!(
                "Application for {} at {} accepted.",
                application.applicant_name, application.institution
            );
            println!("Generated documents:");
            for document in &outcome.documents {
                println!("  [x] {}", document);
            }

            let loan = service.insert(outcome.loan)?;
            println!();
            println!("Added loan: {}", loan.title);
            println!("  ID: {}", loan.id);
        }
    }

    Ok(())
}
