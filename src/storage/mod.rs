//! Storage layer for EduEasy
//!
//! JSON file storage with atomic writes, plus the activity log every
//! mutation is recorded in.

pub mod collection;
pub mod file_io;
pub mod install;

pub use collection::{
    BadgeRepository, Collection, ExpenseRepository, GoalRepository, LoanRepository, Record,
};
pub use file_io::{read_json, write_json_atomic};
pub use install::InstallMarker;

use tracing::info;

use crate::audit::{AuditEntry, AuditLogger, Subject};
use crate::config::paths::EduEasyPaths;
use crate::error::EduEasyError;
use crate::models::starter_loans;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: EduEasyPaths,
    pub loans: LoanRepository,
    pub expenses: ExpenseRepository,
    pub goals: GoalRepository,
    pub badges: BadgeRepository,
    pub install: InstallMarker,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: EduEasyPaths) -> Result<Self, EduEasyError> {
        paths.ensure_directories()?;

        Ok(Self {
            loans: LoanRepository::new(paths.loans_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            goals: GoalRepository::new(paths.goals_file()),
            badges: BadgeRepository::new(paths.badges_file()),
            install: InstallMarker::new(paths.install_marker()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &EduEasyPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&mut self) -> Result<(), EduEasyError> {
        self.loans.load()?;
        self.expenses.load()?;
        self.goals.load()?;
        self.badges.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), EduEasyError> {
        self.loans.save()?;
        self.expenses.save()?;
        self.goals.save()?;
        self.badges.save()?;
        Ok(())
    }

    /// Seed the starter loans unless a loans file already exists
    ///
    /// Returns how many records were created.
    pub fn seed_if_empty(&self) -> Result<usize, EduEasyError> {
        if self.loans.exists_on_disk() {
            return Ok(0);
        }

        let loans = starter_loans();
        let count = loans.len();
        for loan in loans {
            self.record(AuditEntry::added(
                Subject::Loan,
                loan.id.to_string(),
                loan.title.as_str(),
                Some(loan.amount),
            ))?;
            self.loans.push(loan)?;
        }
        self.save_all()?;
        info!(count, "seeded starter loans");
        Ok(count)
    }

    pub fn record(&self, entry: AuditEntry) -> Result<(), EduEasyError> {
        self.audit.append(&entry)
    }
}
