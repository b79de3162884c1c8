//! Loan display formatting
//!
//! Formats loan records for terminal output in table and detail views.

use super::format::{column_width, truncate};
use crate::models::{Currency, LoanRecord, Money};

const MAX_TITLE_WIDTH: usize = 40;

/// Format loans as a table, amounts in the display currency
pub fn format_loan_list(loans: &[LoanRecord], currency: Currency) -> String {
    if loans.is_empty() {
        return "No loans found.".to_string();
    }

    let titles: Vec<String> = loans
        .iter()
        .map(|l| truncate(&l.title, MAX_TITLE_WIDTH))
        .collect();
    let title_width = column_width("Title", titles.iter().map(String::as_str));
    let category_width = column_width("Category", loans.iter().map(|l| l.category.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<title_width$}  {:<category_width$}  {:>12}  {:>12}\n",
        "ID",
        "Title",
        "Category",
        "Income/mo",
        "Amount",
        title_width = title_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<title_width$}  {:-<category_width$}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        category_width = category_width,
    ));

    for (loan, title) in loans.iter().zip(&titles) {
        output.push_str(&format!(
            "{:<13}  {:<title_width$}  {:<category_width$}  {:>12}  {:>12}\n",
            loan.id.to_string(),
            title,
            loan.category,
            money(loan.monthly_income, currency),
            money(loan.amount, currency),
            title_width = title_width,
            category_width = category_width,
        ));
    }

    let total: Money = loans.iter().map(|l| l.amount).sum();
    output.push_str(&format!(
        "{:<13}  {:<title_width$}  {:<category_width$}  {:>12}  {:>12}\n",
        "TOTAL",
        "",
        "",
        "",
        money(total, currency),
        title_width = title_width,
        category_width = category_width,
    ));

    output
}

/// Format a single loan's details
pub fn format_loan_details(loan: &LoanRecord, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Loan: {}\n", loan.title));
    output.push_str(&format!("  ID:             {}\n", loan.id));
    output.push_str(&format!("  Category:       {}\n", loan.category));
    output.push_str(&format!(
        "  Monthly Income: {}\n",
        money(loan.monthly_income, currency)
    ));
    output.push_str(&format!("  Amount:         {}\n", money(loan.amount, currency)));
    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        loan.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        loan.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

fn money(amount: Money, currency: Currency) -> String {
    currency.format(currency.convert(amount))
}
