//! Budget planner CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::budget::{format_budget_summary, format_expense_list, format_goal_list};
use crate::error::EduEasyResult;
use crate::reports::BudgetSummary;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Expense tracking
    #[command(subcommand)]
    Expense(ExpenseCommands),
    /// Savings goals
    #[command(subcommand)]
    Goal(GoalCommands),
    /// Show expense totals and goal progress
    Summary,
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Expense category (e.g., Food, Rent)
        category: String,
        /// Amount spent
        amount: String,
        /// Description; defaults to the category
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List expenses
    List,
    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (full or short)
        expense: String,
    },
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal title
        title: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        current: Option<String>,
    },
    /// List savings goals with progress
    List,
    /// Put money towards a goal
    Contribute {
        /// Goal ID (full or short)
        goal: String,
        /// Amount to add
        amount: String,
    },
    /// Remove a savings goal
    #[command(alias = "rm")]
    Remove {
        /// Goal ID (full or short)
        goal: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> EduEasyResult<()> {
    let service = BudgetService::new(storage);
    let currency = settings.currency;

    match cmd {
        BudgetCommands::Expense(ExpenseCommands::Add {
            category,
            amount,
            name,
        }) => {
            let amount = parse_amount(&amount, "amount")?;
            let expense = service.add_expense(&category, amount, name)?;
            println!("Added expense: {} ({})", expense.name, expense.amount);
            println!("  ID: {}", expense.id);
        }

        BudgetCommands::Expense(ExpenseCommands::List) => {
            let expenses = service.list_expenses()?;
            print!("{}", format_expense_list(&expenses, currency));
        }

        BudgetCommands::Expense(ExpenseCommands::Remove { expense }) => {
            let removed = service.remove_expense(&expense)?;
            println!("Removed expense: {}", removed.name);
        }

        BudgetCommands::Goal(GoalCommands::Add {
            title,
            target,
            current,
        }) => {
            let target = parse_amount(&target, "target")?;
            let current = current
                .as_deref()
                .map(|v| parse_amount(v, "current"))
                .transpose()?;
            let goal = service.add_goal(&title, target, current)?;
            println!("Created savings goal: {}", goal.title);
            println!("  ID: {}", goal.id);
            println!("  Colour: {}", goal.color);
        }

        BudgetCommands::Goal(GoalCommands::List) => {
            let goals = service.list_goals()?;
            print!("{}", format_goal_list(&goals, currency));
        }

        BudgetCommands::Goal(GoalCommands::Contribute { goal, amount }) => {
            let amount = parse_amount(&amount, "amount")?;
            let updated = service.contribute(&goal, amount)?;
            println!(
                "Saved {} of {} for {} ({:.0}%)",
                updated.current_amount,
                updated.target_amount,
                updated.title,
                updated.progress_percent()
            );
        }

        BudgetCommands::Goal(GoalCommands::Remove { goal }) => {
            let removed = service.remove_goal(&goal)?;
            println!("Removed savings goal: {}", removed.title);
        }

        BudgetCommands::Summary => {
            let summary = BudgetSummary::generate(storage, currency)?;
            print!("{}", format_budget_summary(&summary));
        }
    }

    Ok(())
}
