//! Loan service
//!
//! Add, edit and delete loan records with validation and an audit trail.

use tracing::info;

use crate::audit::{AuditEntry, ChangeSet, FieldChange, Subject};
use crate::error::{EduEasyError, EduEasyResult};
use crate::models::{LoanRecord, LoanUpdate, Money};
use crate::storage::Storage;

pub struct LoanService<'a> {
    storage: &'a Storage,
}

impl<'a> LoanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a loan at the end of the collection
    pub fn add(
        &self,
        title: &str,
        category: &str,
        monthly_income: Money,
        amount: Money,
    ) -> EduEasyResult<LoanRecord> {
        let loan = LoanRecord::new(title.trim(), category.trim(), monthly_income, amount);
        self.insert(loan)
    }

    /// Store an already-built record (e.g. from the application wizard)
    pub fn insert(&self, loan: LoanRecord) -> EduEasyResult<LoanRecord> {
        loan.validate()
            .map_err(|e| EduEasyError::Validation(e.to_string()))?;

        self.storage.loans.push(loan.clone())?;
        self.storage.loans.save()?;

        self.storage.record(AuditEntry::added(
            Subject::Loan,
            loan.id.to_string(),
            loan.title.as_str(),
            Some(loan.amount),
        ))?;

        info!(id = %loan.id, title = %loan.title, amount = loan.amount.cents(), "loan added");
        Ok(loan)
    }

    pub fn list(&self) -> EduEasyResult<Vec<LoanRecord>> {
        self.storage.loans.get_all()
    }

    pub fn get(&self, reference: &str) -> EduEasyResult<LoanRecord> {
        self.storage
            .loans
            .find(reference)?
            .ok_or_else(|| EduEasyError::loan_not_found(reference))
    }

    /// Inline edit of one loan
    pub fn update(&self, reference: &str, update: LoanUpdate) -> EduEasyResult<LoanRecord> {
        if update.is_empty() {
            return Err(EduEasyError::Validation(
                "Nothing to change; pass at least one field".into(),
            ));
        }

        let before = self.get(reference)?;
        let mut after = before.clone();
        after.apply(&update);
        after
            .validate()
            .map_err(|e| EduEasyError::Validation(e.to_string()))?;

        self.storage
            .loans
            .replace(&before.id.as_uuid().to_string(), after.clone())?;
        self.storage.loans.save()?;

        self.storage.record(AuditEntry::edited(
            Subject::Loan,
            after.id.to_string(),
            after.title.as_str(),
            loan_changes(&before, &after),
        ))?;

        info!(id = %after.id, "loan updated");
        Ok(after)
    }

    pub fn delete(&self, reference: &str) -> EduEasyResult<LoanRecord> {
        let loan = self.get(reference)?;
        self.storage.loans.remove(&loan.id.as_uuid().to_string())?;
        self.storage.loans.save()?;

        self.storage.record(AuditEntry::removed(
            Subject::Loan,
            loan.id.to_string(),
            loan.title.as_str(),
            Some(loan.amount),
        ))?;

        info!(id = %loan.id, "loan deleted");
        Ok(loan)
    }
}

fn loan_changes(before: &LoanRecord, after: &LoanRecord) -> Vec<FieldChange> {
    let mut changes = ChangeSet::new();
    changes
        .text("title", &before.title, &after.title)
        .text("category", &before.category, &after.category)
        .money("monthly_income", before.monthly_income, after.monthly_income)
        .money("amount", before.amount, after.amount);
    changes.into_changes()
}
