//! Report formatting for terminal output

use super::format::{format_bar, format_percentage, separator, truncate};
use crate::models::Currency;
use crate::reports::{DailyReport, PortfolioReport, UsageStats};
use crate::services::amortization::PaymentQuote;

const BAR_WIDTH: usize = 20;

/// Dashboard: headline figures, category counts and income vs. loan bars
pub fn format_portfolio(report: &PortfolioReport) -> String {
    let currency = report.currency;
    let stats = &report.stats;

    let mut output = String::new();
    output.push_str("Dashboard\n");
    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!("  Total Loans:       {}\n", stats.total_loans_count));
    output.push_str(&format!(
        "  Monthly Income:    {}\n",
        currency.format(stats.total_income)
    ));
    output.push_str(&format!(
        "  Total Debt:        {}\n",
        currency.format(stats.total_debt)
    ));
    output.push_str(&format!(
        "  Average Loan:      {}\n",
        currency.format(stats.average_loan_size)
    ));
    output.push_str(&format!(
        "  Debt-to-Income:    {}\n",
        format_percentage(stats.debt_to_income_percent())
    ));

    if !report.categories.is_empty() {
        output.push_str("\nBy Category\n");
        for entry in &report.categories {
            output.push_str(&format!("  {:<20} {}\n", entry.category, entry.count));
        }
    }

    if !report.bars.is_empty() {
        let max = report
            .bars
            .iter()
            .map(|b| b.income.max(b.loan))
            .fold(0.0_f64, f64::max);

        output.push_str("\nIncome vs. Loan\n");
        for bar in &report.bars {
            output.push_str(&format!("  {}\n", truncate(&bar.title, 40)));
            output.push_str(&format!(
                "    income {} {}\n",
                format_bar(bar.income, max, BAR_WIDTH),
                currency.format(bar.income)
            ));
            output.push_str(&format!(
                "    loan   {} {}\n",
                format_bar(bar.loan, max, BAR_WIDTH),
                currency.format(bar.loan)
            ));
        }
    }

    output
}

/// Per-loan daily income, cost and what is left
pub fn format_daily(report: &DailyReport) -> String {
    let currency = report.currency;

    let mut output = String::new();
    output.push_str(&format!(
        "Daily Analysis ({}% over {} years)\n",
        report.terms.annual_rate_percent, report.terms.term_years
    ));
    output.push_str(&separator(50));
    output.push('\n');

    if report.loans.is_empty() {
        output.push_str("No loans found.\n");
        return output;
    }

    for analysis in &report.loans {
        let b = &analysis.breakdown;
        let remaining = match b.percent_remaining {
            Some(pct) => format_percentage(pct),
            None => "n/a".to_string(),
        };

        output.push_str(&format!("{} ({})\n", analysis.title, analysis.category));
        output.push_str(&format!(
            "  Monthly Payment:  {}\n",
            currency.format(analysis.monthly_payment)
        ));
        output.push_str(&format!("  Daily Income:     {}\n", currency.format(b.daily_income)));
        output.push_str(&format!("  Daily Loan Cost:  {}\n", currency.format(b.daily_cost)));
        output.push_str(&format!(
            "  Daily Remaining:  {}\n",
            currency.format(b.daily_remaining)
        ));
        output.push_str(&format!(
            "  Remaining Share:  {} {}\n",
            format_bar(b.bar_percent(), 100.0, BAR_WIDTH),
            remaining
        ));
        if analysis.is_high_debt() {
            output.push_str("  Status:           HIGH DEBT\n");
        } else {
            output.push_str("  Status:           OK\n");
        }
        output.push('\n');
    }

    output
}

pub fn format_usage(stats: &UsageStats, currency: Currency) -> String {
    let mut output = String::new();
    output.push_str("Usage Statistics\n");
    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!(
        "  Installed:        {}\n",
        stats.installed_at.format("%Y-%m-%d")
    ));
    output.push_str(&format!("  Days Since Install: {}\n", stats.days_since_install));
    output.push_str(&format!(
        "  Total Earned:     {}\n",
        currency.format(stats.total_earned)
    ));
    output.push_str(&format!(
        "  Lost to Loans:    {}\n",
        currency.format(stats.total_lost)
    ));
    output
}

/// Calculator result
pub fn format_quote(quote: &PaymentQuote, currency: Currency) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Loan of {} at {}% over {} months\n",
        currency.format(quote.principal),
        quote.annual_rate_percent,
        quote.term_months
    ));
    output.push_str(&format!(
        "  Monthly Payment: {}\n",
        currency.format(quote.monthly_payment)
    ));
    output.push_str(&format!("  Total Paid:      {}\n", currency.format(quote.total_paid)));
    output.push_str(&format!(
        "  Total Interest:  {}\n",
        currency.format(quote.total_interest)
    ));
    output
}
