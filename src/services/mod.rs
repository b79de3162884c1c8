//! Service layer for EduEasy
//!
//! Business logic on top of the storage layer: validation, the activity log,
//! quiz scoring and the shared amortization math.

pub mod amortization;
pub mod application;
pub mod budget;
pub mod learn;
pub mod loan;

pub use amortization::{monthly_payment, DailyBreakdown, LoanTerms, PaymentQuote};
pub use application::{ApplicationDocument, ApplicationOutcome, Consents, LoanApplication};
pub use budget::BudgetService;
pub use learn::{LearnService, Notification, QuizResult, QuizSession};
pub use loan::LoanService;
