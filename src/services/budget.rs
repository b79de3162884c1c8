//! Budget planner service
//!
//! Expenses and savings goals share one planner; both are flat lists with
//! add/remove, and goals can additionally receive contributions.

use tracing::info;

use crate::audit::{AuditEntry, FieldChange, Subject};
use crate::error::{EduEasyError, EduEasyResult};
use crate::models::{Expense, Money, SavingsGoal};
use crate::storage::Storage;

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add_expense(
        &self,
        category: &str,
        amount: Money,
        name: Option<String>,
    ) -> EduEasyResult<Expense> {
        let expense = Expense::new(category.trim(), amount, name.map(|n| n.trim().to_string()));
        expense
            .validate()
            .map_err(|e| EduEasyError::Validation(e.to_string()))?;

        self.storage.expenses.push(expense.clone())?;
        self.storage.expenses.save()?;
        self.storage.record(AuditEntry::added(
            Subject::Expense,
            expense.id.to_string(),
            expense.name.as_str(),
            Some(expense.amount),
        ))?;

        info!(id = %expense.id, category = %expense.category, "expense added");
        Ok(expense)
    }

    pub fn list_expenses(&self) -> EduEasyResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    pub fn remove_expense(&self, reference: &str) -> EduEasyResult<Expense> {
        let found = self
            .storage
            .expenses
            .find(reference)?
            .ok_or_else(|| EduEasyError::expense_not_found(reference))?;
        let expense = self
            .storage
            .expenses
            .remove(&found.id.as_uuid().to_string())?
            .ok_or_else(|| EduEasyError::expense_not_found(reference))?;
        self.storage.expenses.save()?;
        self.storage.record(AuditEntry::removed(
            Subject::Expense,
            expense.id.to_string(),
            expense.name.as_str(),
            Some(expense.amount),
        ))?;

        info!(id = %expense.id, "expense removed");
        Ok(expense)
    }

    /// Add a goal; the colour rotates through the palette by goal count
    pub fn add_goal(
        &self,
        title: &str,
        target_amount: Money,
        current_amount: Option<Money>,
    ) -> EduEasyResult<SavingsGoal> {
        let existing = self.storage.goals.count()?;
        let goal = SavingsGoal::new(
            title.trim(),
            target_amount,
            current_amount.unwrap_or_default(),
            existing,
        );
        goal.validate()
            .map_err(|e| EduEasyError::Validation(e.to_string()))?;

        self.storage.goals.push(goal.clone())?;
        self.storage.goals.save()?;
        self.storage.record(AuditEntry::added(
            Subject::SavingsGoal,
            goal.id.to_string(),
            goal.title.as_str(),
            Some(goal.target_amount),
        ))?;

        info!(id = %goal.id, title = %goal.title, "savings goal added");
        Ok(goal)
    }

    pub fn list_goals(&self) -> EduEasyResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Put money towards a goal
    pub fn contribute(&self, reference: &str, amount: Money) -> EduEasyResult<SavingsGoal> {
        if !amount.is_positive() {
            return Err(EduEasyError::Validation(
                "Contribution must be greater than zero".into(),
            ));
        }

        let before = self
            .storage
            .goals
            .find(reference)?
            .ok_or_else(|| EduEasyError::goal_not_found(reference))?;
        let mut after = before.clone();
        after
            .contribute(amount)
            .map_err(|e| EduEasyError::Validation(e.to_string()))?;

        self.storage
            .goals
            .replace(&before.id.as_uuid().to_string(), after.clone())?;
        self.storage.goals.save()?;
        self.storage.record(AuditEntry::edited(
            Subject::SavingsGoal,
            after.id.to_string(),
            after.title.as_str(),
            vec![FieldChange::money(
                "saved",
                before.current_amount,
                after.current_amount,
            )],
        ))?;

        info!(id = %after.id, amount = amount.cents(), "contribution recorded");
        Ok(after)
    }

    pub fn remove_goal(&self, reference: &str) -> EduEasyResult<SavingsGoal> {
        let found = self
            .storage
            .goals
            .find(reference)?
            .ok_or_else(|| EduEasyError::goal_not_found(reference))?;
        let goal = self
            .storage
            .goals
            .remove(&found.id.as_uuid().to_string())?
            .ok_or_else(|| EduEasyError::goal_not_found(reference))?;
        self.storage.goals.save()?;
        self.storage.record(AuditEntry::removed(
            Subject::SavingsGoal,
            goal.id.to_string(),
            goal.title.as_str(),
            Some(goal.current_amount),
        ))?;

        info!(id = %goal.id, "savings goal removed");
        Ok(goal)
    }
}
