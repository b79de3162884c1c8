//! Core data models for EduEasy
//!
//! Loans, budget expenses, savings goals, learning quizzes with their badges,
//! and the small value types they are built from (money, ids, currencies,
//! languages).

pub mod badge;
pub mod chat;
pub mod currency;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod language;
pub mod loan;
pub mod money;
pub mod quiz;

pub use badge::{
    badge_definition, total_points, Badge, BadgeDefinition, BADGE_CATALOG, NOVICE_BADGE_ID,
};
pub use chat::{ChatMessage, ChatRole};
pub use currency::Currency;
pub use expense::{Expense, ExpenseValidationError};
pub use goal::{progress_percent, GoalValidationError, SavingsGoal, GOAL_PALETTE};
pub use ids::{ExpenseId, GoalId, LoanId};
pub use language::Language;
pub use loan::{starter_loans, LoanRecord, LoanUpdate, LoanValidationError};
pub use money::{Money, MoneyParseError};
pub use quiz::{find_quiz, Question, Quiz, POINTS_PER_CORRECT, QUIZZES};
