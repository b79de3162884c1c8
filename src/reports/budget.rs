//! Budget planner summary
//!
//! Expense totals by category and progress of every savings goal.

use serde::Serialize;

use crate::error::EduEasyResult;
use crate::models::{Currency, Expense, GoalId, Money, SavingsGoal};
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub id: GoalId,
    pub title: String,
    pub color: String,
    pub current: Money,
    pub target: Money,
    pub percent: f64,
}

impl From<&SavingsGoal> for GoalProgress {
    fn from(goal: &SavingsGoal) -> Self {
        Self {
            id: goal.id,
            title: goal.title.clone(),
            color: goal.color.clone(),
            current: goal.current_amount,
            target: goal.target_amount,
            percent: goal.progress_percent(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummary {
    pub currency: Currency,
    pub total_expenses: Money,
    pub by_category: Vec<CategoryTotal>,
    pub total_saved: Money,
    pub total_target: Money,
    pub goals: Vec<GoalProgress>,
}

/// Sum expenses per category, in first-seen order
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    totals
}

impl BudgetSummary {
    pub fn from_parts(expenses: &[Expense], goals: &[SavingsGoal], currency: Currency) -> Self {
        Self {
            currency,
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
            by_category: totals_by_category(expenses),
            total_saved: goals.iter().map(|g| g.current_amount).sum(),
            total_target: goals.iter().map(|g| g.target_amount).sum(),
            goals: goals.iter().map(GoalProgress::from).collect(),
        }
    }

    pub fn generate(storage: &Storage, currency: Currency) -> EduEasyResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let goals = storage.goals.get_all()?;
        Ok(Self::from_parts(&expenses, &goals, currency))
    }

    /// Share of a category in total spending, in percent
    pub fn category_share(&self, total: &CategoryTotal) -> f64 {
        if self.total_expenses.is_zero() {
            0.0
        } else {
            total.total.to_major() / self.total_expenses.to_major() * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_by_category() {
        let expenses = vec![
            Expense::new("Food", Money::from_units(50), None),
            Expense::new("Rent", Money::from_units(400), None),
            Expense::new("Food", Money::from_units(25), Some("Coffee".into())),
        ];
        let totals = totals_by_category(&expenses);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, Money::from_units(75));
        assert_eq!(totals[1].total, Money::from_units(400));
    }

    #[test]
    fn test_summary() {
        let expenses = vec![
            Expense::new("Food", Money::from_units(100), None),
            Expense::new("Rent", Money::from_units(300), None),
        ];
        let goals = vec![
            SavingsGoal::new("Laptop", Money::from_units(1000), Money::from_units(250), 0),
            SavingsGoal::new("Trip", Money::from_units(200), Money::from_units(500), 1),
        ];
        let summary = BudgetSummary::from_parts(&expenses, &goals, Currency::Usd);

        assert_eq!(summary.total_expenses, Money::from_units(400));
        assert_eq!(summary.total_saved, Money::from_units(750));
        assert_eq!(summary.total_target, Money::from_units(1200));
        assert!((summary.goals[0].percent - 25.0).abs() < 1e-9);
        assert_eq!(summary.goals[1].percent, 100.0);
        assert!((summary.category_share(&summary.by_category[1]) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BudgetSummary::from_parts(&[], &[], Currency::Usd);
        assert!(summary.total_expenses.is_zero());
        assert!(summary.by_category.is_empty());
        assert!(summary.goals.is_empty());
    }
}
