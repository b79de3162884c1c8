//! Financial literacy quizzes

/// Score credited for each correct answer
pub const POINTS_PER_CORRECT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub answers: &'static [&'static str],
    /// Index into `answers`
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quiz {
    pub id: u32,
    pub title: &'static str,
    pub questions: &'static [Question],
}

impl Quiz {
    /// Best possible score
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.questions.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(POINTS_PER_CORRECT)
    }
}

pub static QUIZZES: [Quiz; 2] = [
    Quiz {
        id: 1,
        title: "Budgeting Basics 101",
        questions: &[
            Question {
                prompt: "What is the 50/30/20 rule?",
                answers: &["Investing strategy", "Budgeting method", "Loan term"],
                correct: 1,
            },
            Question {
                prompt: "Which expense is 'essential'?",
                answers: &["Rent", "Netflix", "Dining Out"],
                correct: 0,
            },
            Question {
                prompt: "Emergency funds should cover?",
                answers: &["1 week", "3-6 months", "1 year"],
                correct: 1,
            },
        ],
    },
    Quiz {
        id: 2,
        title: "Understanding Interest",
        questions: &[
            Question {
                prompt: "APR stands for?",
                answers: &[
                    "Annual Percentage Rate",
                    "All Paid Returns",
                    "Actual Price Ratio",
                ],
                correct: 0,
            },
            Question {
                prompt: "Compound interest is?",
                answers: &["Interest on principal only", "Interest on interest", "A flat fee"],
                correct: 1,
            },
        ],
    },
];

pub fn find_quiz(id: u32) -> Option<&'static Quiz> {
    QUIZZES.iter().find(|quiz| quiz.id == id)
}
