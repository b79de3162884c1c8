//! Learning area formatting

use super::format::separator;
use crate::models::{total_points, Badge, Question, Quiz, BADGE_CATALOG, POINTS_PER_CORRECT};
use crate::services::QuizResult;

pub fn format_quiz_list(quizzes: &[Quiz]) -> String {
    let mut output = String::new();
    for quiz in quizzes {
        output.push_str(&format!(
            "{:>3}  {:<28} {} Questions  +{}pts each\n",
            quiz.id,
            quiz.title,
            quiz.questions.len(),
            POINTS_PER_CORRECT
        ));
    }
    output
}

/// Question text with numbered answers, numbering from 1
pub fn format_question(index: usize, total: usize, question: &Question) -> String {
    let mut output = format!("Question {} of {}\n{}\n", index + 1, total, question.prompt);
    for (i, answer) in question.answers.iter().enumerate() {
        output.push_str(&format!("  {}) {}\n", i + 1, answer));
    }
    output
}

/// Every catalog badge, earned or locked
pub fn format_badges(earned: &[Badge]) -> String {
    let mut output = String::new();
    output.push_str(&format!("Points: {}\n", total_points(earned, 0)));
    output.push_str(&separator(40));
    output.push('\n');

    for definition in &BADGE_CATALOG {
        match earned.iter().find(|badge| badge.id == definition.id) {
            Some(badge) => output.push_str(&format!(
                "{} {:<18} earned {}\n",
                definition.icon,
                definition.name,
                badge.earned_at.format("%Y-%m-%d")
            )),
            None => output.push_str(&format!(
                "{} {:<18} locked: {}\n",
                definition.icon, definition.name, definition.requirement
            )),
        }
    }
    output
}

pub fn format_quiz_result(result: &QuizResult) -> String {
    let mut output = String::new();
    output.push_str("Congratulations! Quiz complete.\n");
    output.push_str(&format!(
        "{}: {} of {} correct, +{} points\n",
        result.title, result.correct, result.total, result.score
    ));
    output.push_str(&format!("Points: {}\n", result.points));

    if let Some(notification) = &result.notification {
        output.push('\n');
        output.push_str(&format!("{}\n", notification.title));
        output.push_str(&format!("  {}\n", notification.message));
    }
    output
}
