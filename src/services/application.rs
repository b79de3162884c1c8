//! Student loan application
//!
//! The application wizard collects personal, education and eligibility
//! details, then requires three consents before it can be submitted. A
//! submitted application produces the supporting document checklist and a
//! new loan record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EduEasyError, EduEasyResult};
use crate::models::{LoanRecord, Money};

/// Documents generated for a submitted application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationDocument {
    Identity,
    Education,
    Social,
    RiskAssessment,
}

impl ApplicationDocument {
    pub const ALL: [ApplicationDocument; 4] = [
        ApplicationDocument::Identity,
        ApplicationDocument::Education,
        ApplicationDocument::Social,
        ApplicationDocument::RiskAssessment,
    ];
}

impl fmt::Display for ApplicationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Identity => "Identity verification",
            Self::Education => "Education enrollment certificate",
            Self::Social => "Social status statement",
            Self::RiskAssessment => "Risk assessment report",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consents {
    pub agreement: bool,
    pub data_processing: bool,
    pub terms: bool,
}

impl Consents {
    pub fn all() -> Self {
        Self {
            agreement: true,
            data_processing: true,
            terms: true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.agreement && self.data_processing && self.terms
    }
}

/// Collected wizard answers
#[derive(Debug, Clone)]
pub struct LoanApplication {
    pub applicant_name: String,
    pub institution: String,
    pub specialty: String,
    pub loan_type: String,
    /// Requested amount as typed; unparsable input requests nothing
    pub requested_amount: String,
    pub consents: Consents,
}

impl Default for LoanApplication {
    fn default() -> Self {
        Self {
            applicant_name: String::new(),
            institution: String::new(),
            specialty: String::new(),
            loan_type: "Standard STL".to_string(),
            requested_amount: String::new(),
            consents: Consents::default(),
        }
    }
}

/// What a successful submission yields
#[derive(Debug, Clone)]
pub struct ApplicationOutcome {
    pub documents: Vec<ApplicationDocument>,
    pub loan: LoanRecord,
}

impl LoanApplication {
    pub fn requested_amount(&self) -> Money {
        Money::parse(&self.requested_amount)
            .ok()
            .filter(|amount| !amount.is_negative())
            .unwrap_or_default()
    }

    /// Submit the application. All three consents are required.
    ///
    /// The resulting loan is titled `"{loan type} - {specialty}"`, filed
    /// under Education, with no income attached.
    pub fn submit(&self) -> EduEasyResult<ApplicationOutcome> {
        if !self.consents.is_complete() {
            return Err(EduEasyError::Validation(
                "All consents (agreement, data processing, terms) must be accepted".into(),
            ));
        }

        let loan = LoanRecord::new(
            format!("{} - {}", self.loan_type.trim(), self.specialty.trim()),
            "Education",
            Money::zero(),
            self.requested_amount(),
        );

        Ok(ApplicationOutcome {
            documents: ApplicationDocument::ALL.to_vec(),
            loan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> LoanApplication {
        LoanApplication {
            applicant_name: "Aysel".into(),
            institution: "Baku State University".into(),
            specialty: "Computer Science".into(),
            requested_amount: "3000".into(),
            consents: Consents::all(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_creates_loan() {
        let outcome = application().submit().unwrap();

        assert_eq!(outcome.loan.title, "Standard STL - Computer Science");
        assert_eq!(outcome.loan.category, "Education");
        assert_eq!(outcome.loan.monthly_income, Money::zero());
        assert_eq!(outcome.loan.amount, Money::from_units(3000));
        assert_eq!(outcome.documents.len(), 4);
        assert_eq!(outcome.documents[3], ApplicationDocument::RiskAssessment);
    }

    #[test]
    fn test_missing_consent_blocks_submission() {
        let mut app = application();
        app.consents.terms = false;
        assert!(app.submit().unwrap_err().is_validation());
    }

    #[test]
    fn test_unparsable_amount_requests_nothing() {
        let mut app = application();
        app.requested_amount = "lots".into();
        assert_eq!(app.submit().unwrap().loan.amount, Money::zero());

        app.requested_amount = "-50".into();
        assert_eq!(app.requested_amount(), Money::zero());
    }
}
