//! Savings goal model
//!
//! Progress is `current / target`, expressed as a percentage clamped to
//! `[0, 100]` so an over-funded goal never reports more than 100%.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// Colours handed out to new goals in rotation
pub const GOAL_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
    NonPositiveTarget,
    NegativeCurrent,
    BalanceOverflow,
}

impl std::fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Goal title is required"),
            Self::NonPositiveTarget => write!(f, "Goal target must be greater than zero"),
            Self::NegativeCurrent => write!(f, "Saved amount cannot be negative"),
            Self::BalanceOverflow => write!(f, "Saved amount is too large"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a goal; `existing_goals` picks the palette colour
    pub fn new(
        title: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        existing_goals: usize,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            current_amount,
            color: GOAL_PALETTE[existing_goals % GOAL_PALETTE.len()].to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress percentage in `[0, 100]`
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_amount, self.target_amount)
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount && self.target_amount.is_positive()
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Add to the saved amount; the goal is left untouched on overflow
    pub fn contribute(&mut self, amount: Money) -> Result<(), GoalValidationError> {
        self.current_amount = self
            .current_amount
            .checked_add(amount)
            .ok_or(GoalValidationError::BalanceOverflow)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }
        Ok(())
    }
}

/// Clamped progress of `current` towards `target`
///
/// A non-positive target counts as reached once anything has been saved.
pub fn progress_percent(current: Money, target: Money) -> f64 {
    if !target.is_positive() {
        return if current.is_positive() { 100.0 } else { 0.0 };
    }
    let percent = current.to_major() / target.to_major() * 100.0;
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let goal = SavingsGoal::new("Laptop", Money::from_units(1000), Money::from_units(250), 0);
        assert!((goal.progress_percent() - 25.0).abs() < 1e-9);
        assert_eq!(goal.remaining(), Money::from_units(750));
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_progress_clamped_when_overfunded() {
        let goal = SavingsGoal::new("Trip", Money::from_units(500), Money::from_units(900), 0);
        assert_eq!(goal.progress_percent(), 100.0);
        assert_eq!(goal.remaining(), Money::zero());
        assert!(goal.is_complete());
    }

    #[test]
    fn test_progress_edge_cases() {
        assert_eq!(progress_percent(Money::from_units(-5), Money::from_units(100)), 0.0);
        assert_eq!(progress_percent(Money::zero(), Money::zero()), 0.0);
        assert_eq!(progress_percent(Money::from_units(1), Money::zero()), 100.0);
    }

    #[test]
    fn test_palette_rotation() {
        let first = SavingsGoal::new("A", Money::from_units(1), Money::zero(), 0);
        let sixth = SavingsGoal::new("F", Money::from_units(1), Money::zero(), 5);
        assert_eq!(first.color, "#0088FE");
        assert_eq!(sixth.color, "#0088FE");
        assert_eq!(SavingsGoal::new("C", Money::from_units(1), Money::zero(), 2).color, "#FFBB28");
    }

    #[test]
    fn test_contribute() {
        let mut goal = SavingsGoal::new("Books", Money::from_units(200), Money::zero(), 0);
        goal.contribute(Money::from_units(50)).unwrap();
        assert_eq!(goal.current_amount, Money::from_units(50));
    }

    #[test]
    fn test_contribute_overflow_keeps_balance() {
        let mut goal = SavingsGoal::new("Books", Money::from_units(200), Money::from_units(10), 0);
        assert_eq!(
            goal.contribute(Money::from_cents(i64::MAX)),
            Err(GoalValidationError::BalanceOverflow)
        );
        assert_eq!(goal.current_amount, Money::from_units(10));
    }

    #[test]
    fn test_validation() {
        let goal = SavingsGoal::new("", Money::from_units(1), Money::zero(), 0);
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyTitle));

        let goal = SavingsGoal::new("Car", Money::zero(), Money::zero(), 0);
        assert_eq!(goal.validate(), Err(GoalValidationError::NonPositiveTarget));

        let goal = SavingsGoal::new("Car", Money::from_units(10), Money::from_cents(-1), 0);
        assert_eq!(goal.validate(), Err(GoalValidationError::NegativeCurrent));
    }
}
