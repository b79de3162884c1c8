//! Prompt templates for the advisor and the support chat

use crate::models::{Language, LoanRecord, Money};

/// One summary line per loan, amounts in dollars as stored
pub fn loan_summary(loans: &[LoanRecord]) -> String {
    loans
        .iter()
        .map(|loan| {
            format!(
                "- Loan: {} ({}): Monthly Income ${}, Loan Amount ${}",
                loan.title,
                loan.category,
                loan.monthly_income.to_major(),
                loan.amount.to_major()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn portfolio_prompt(loans: &[LoanRecord], language: Language) -> String {
    format!(
        "Analyze the following student loan portfolio for a single user.\n\
         Provide a concise executive summary of their financial health.\n\
         Identify if the Debt-to-Income ratio is concerning (annualized income vs total debt).\n\
         Provide 3 actionable recommendations for managing these specific loans.\n\
         \n\
         Data:\n\
         {}\n\
         \n\
         IMPORTANT: Respond fully in {}.\n\
         Format the output in Markdown.",
        loan_summary(loans),
        language
    )
}

pub fn advisor_system_instruction(language: Language) -> String {
    format!(
        "You are a senior financial advisor for university students using the EduEasy app. \
         Be professional, empathetic, and data-driven. Always answer in {}.",
        language
    )
}

/// Short description of the user's loans for the support chat
pub fn financial_context(loans: &[LoanRecord]) -> String {
    match loans.first() {
        Some(first) => {
            let total_debt: Money = loans.iter().map(|loan| loan.amount).sum();
            format!(
                "User Loans: {} active. Total Debt approx: {}. Income: {}.",
                loans.len(),
                total_debt.to_major(),
                first.monthly_income.to_major()
            )
        }
        None => "User Profile: No data yet.".to_string(),
    }
}

pub fn support_prompt(message: &str, context: Option<&str>) -> String {
    let mut prompt = format!("User Message: \"{}\"", message);
    if let Some(context) = context {
        prompt.push_str("\n\nUser's Current Financial Data: \n");
        prompt.push_str(context);
    }
    prompt
}

pub fn support_system_instruction(language: Language) -> String {
    format!(
        "You are a proactive and helpful financial assistant for the 'EduEasy' app.\n\
         If the user provides financial context, give PERSONALIZED advice \
         (e.g., \"Yes, you can afford that based on your income\").\n\
         If no context is provided, help with app features (Dashboard, Loans, Budgeting).\n\
         Keep answers short, friendly, and helpful. ALWAYS respond in {}.",
        language
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::starter_loans;

    #[test]
    fn test_loan_summary_lines() {
        let summary = loan_summary(&starter_loans());
        assert_eq!(
            summary,
            "- Loan: Fall Semester Tuition 2024 (Education): Monthly Income $800, Loan Amount $2500\n\
             - Loan: Laptop & Equipment (Supplies): Monthly Income $800, Loan Amount $1500"
        );
    }

    #[test]
    fn test_portfolio_prompt_mentions_language() {
        let prompt = portfolio_prompt(&starter_loans(), Language::Spanish);
        assert!(prompt.contains("IMPORTANT: Respond fully in Spanish."));
        assert!(prompt.contains("3 actionable recommendations"));
        assert!(prompt.contains("Laptop & Equipment"));
    }

    #[test]
    fn test_system_instructions() {
        assert!(advisor_system_instruction(Language::Arabic).ends_with("Always answer in Arabic."));
        assert!(support_system_instruction(Language::English).ends_with("ALWAYS respond in English."));
    }

    #[test]
    fn test_financial_context() {
        assert_eq!(
            financial_context(&starter_loans()),
            "User Loans: 2 active. Total Debt approx: 4000. Income: 800."
        );
        assert_eq!(financial_context(&[]), "User Profile: No data yet.");
    }

    #[test]
    fn test_support_prompt() {
        assert_eq!(support_prompt("Hi", None), "User Message: \"Hi\"");

        let prompt = support_prompt("Can I buy a bike?", Some("User Profile: No data yet."));
        assert!(prompt.starts_with("User Message: \"Can I buy a bike?\""));
        assert!(prompt.ends_with("User's Current Financial Data: \nUser Profile: No data yet."));
    }
}
