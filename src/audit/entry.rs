//! Activity log entries
//!
//! An entry names the record it touched by id and label, and keeps money as
//! stored USD cents so `history` can render it in whatever currency is
//! selected at print time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Currency, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Added,
    Edited,
    Removed,
    Earned,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Action::Added => "added",
            Action::Edited => "edited",
            Action::Removed => "removed",
            Action::Earned => "earned",
        };
        f.write_str(word)
    }
}

/// The kind of record an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Loan,
    Expense,
    SavingsGoal,
    Settings,
    Badge,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::Loan => "Loan",
            Subject::Expense => "Expense",
            Subject::SavingsGoal => "Savings goal",
            Subject::Settings => "Settings",
            Subject::Badge => "Badge",
        };
        f.write_str(name)
    }
}

/// A field value before or after a change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Money(Money),
    Text(String),
}

impl FieldValue {
    pub fn render(&self, currency: Currency) -> String {
        match self {
            FieldValue::Money(amount) => currency.format(currency.convert(*amount)),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub from: FieldValue,
    pub to: FieldValue,
}

impl FieldChange {
    pub fn money(field: &str, from: Money, to: Money) -> Self {
        Self {
            field: field.to_string(),
            from: FieldValue::Money(from),
            to: FieldValue::Money(to),
        }
    }

    pub fn text(field: &str, from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Self {
            field: field.to_string(),
            from: FieldValue::Text(from.to_string()),
            to: FieldValue::Text(to.to_string()),
        }
    }

    pub fn render(&self, currency: Currency) -> String {
        format!(
            "{}: {} -> {}",
            self.field,
            self.from.render(currency),
            self.to.render(currency)
        )
    }
}

/// Collects the fields that differ between two versions of a record
#[derive(Debug, Default)]
pub struct ChangeSet(Vec<FieldChange>);

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn money(&mut self, field: &str, from: Money, to: Money) -> &mut Self {
        if from != to {
            self.0.push(FieldChange::money(field, from, to));
        }
        self
    }

    pub fn text<T: fmt::Display + PartialEq>(&mut self, field: &str, from: T, to: T) -> &mut Self {
        if from != to {
            self.0.push(FieldChange::text(field, from, to));
        }
        self
    }

    pub fn into_changes(self) -> Vec<FieldChange> {
        self.0
    }
}

/// One line of the activity log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub action: Action,
    pub subject: Subject,
    /// Short id such as `loan-1a2b3c4d`, or a fixed key for singletons
    pub id: String,
    pub label: String,

    /// Headline amount of the record, in stored USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<FieldChange>,
}

impl AuditEntry {
    fn new(
        action: Action,
        subject: Subject,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            subject,
            id: id.into(),
            label: label.into(),
            amount: None,
            changes: Vec::new(),
        }
    }

    pub fn added(
        subject: Subject,
        id: impl Into<String>,
        label: impl Into<String>,
        amount: Option<Money>,
    ) -> Self {
        Self {
            amount,
            ..Self::new(Action::Added, subject, id, label)
        }
    }

    pub fn edited(
        subject: Subject,
        id: impl Into<String>,
        label: impl Into<String>,
        changes: Vec<FieldChange>,
    ) -> Self {
        Self {
            changes,
            ..Self::new(Action::Edited, subject, id, label)
        }
    }

    pub fn removed(
        subject: Subject,
        id: impl Into<String>,
        label: impl Into<String>,
        amount: Option<Money>,
    ) -> Self {
        Self {
            amount,
            ..Self::new(Action::Removed, subject, id, label)
        }
    }

    pub fn earned(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(Action::Earned, Subject::Badge, id, label)
    }

    /// Render for `edueasy history`, amounts in `currency`
    pub fn render(&self, currency: Currency) -> String {
        let mut output = format!(
            "[{}] {} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.subject,
            self.action,
            self.label
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" ({})", currency.format(currency.convert(amount))));
        }
        output.push_str(&format!("  [{}]", self.id));

        for change in &self.changes {
            output.push_str(&format!("\n    {}", change.render(currency)));
        }

        output
    }
}
