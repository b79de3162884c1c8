//! Budget planner display formatting

use super::format::{column_width, format_bar, format_percentage, separator};
use crate::models::{Currency, Expense, Money, SavingsGoal};
use crate::reports::BudgetSummary;

fn money(amount: Money, currency: Currency) -> String {
    currency.format(currency.convert(amount))
}

pub fn format_expense_list(expenses: &[Expense], currency: Currency) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let name_width = column_width("Name", expenses.iter().map(|e| e.name.as_str()));
    let category_width = column_width("Category", expenses.iter().map(|e| e.category.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<category_width$}  {:>12}\n",
        "ID",
        "Name",
        "Category",
        "Amount",
        name_width = name_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<category_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        category_width = category_width,
    ));
    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<category_width$}  {:>12}\n",
            expense.id.to_string(),
            expense.name,
            expense.category,
            money(expense.amount, currency),
            name_width = name_width,
            category_width = category_width,
        ));
    }
    output
}

pub fn format_goal_list(goals: &[SavingsGoal], currency: Currency) -> String {
    if goals.is_empty() {
        return "No savings goals found.".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        let marker = if goal.is_complete() { " (complete)" } else { "" };
        output.push_str(&format!("{}  {}{}\n", goal.id, goal.title, marker));
        output.push_str(&format!(
            "  {} {}  {} / {}\n",
            format_bar(goal.progress_percent(), 100.0, 20),
            format_percentage(goal.progress_percent()),
            money(goal.current_amount, currency),
            money(goal.target_amount, currency),
        ));
    }
    output
}

pub fn format_budget_summary(summary: &BudgetSummary) -> String {
    let currency = summary.currency;

    let mut output = String::new();
    output.push_str("Budget Planner\n");
    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!(
        "  Total Expenses: {}\n",
        money(summary.total_expenses, currency)
    ));

    for total in &summary.by_category {
        output.push_str(&format!(
            "    {:<20} {:>12}  {}\n",
            total.category,
            money(total.total, currency),
            format_percentage(summary.category_share(total))
        ));
    }

    output.push_str(&format!(
        "\n  Saved: {} of {}\n",
        money(summary.total_saved, currency),
        money(summary.total_target, currency)
    ));
    for goal in &summary.goals {
        output.push_str(&format!(
            "    {:<20} {} {}\n",
            goal.title,
            format_bar(goal.percent, 100.0, 20),
            format_percentage(goal.percent)
        ));
    }

    output
}
