//! Activity history for EduEasy
//!
//! Loans, expenses, savings goals, settings and earned badges each leave a
//! line in `audit.log` when they change. Money is kept in stored USD and
//! converted when `history` prints it.

mod entry;
mod logger;

pub use entry::{Action, AuditEntry, ChangeSet, FieldChange, FieldValue, Subject};
pub use logger::AuditLogger;
