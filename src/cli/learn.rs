//! Financial education CLI commands

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::display::learn::{format_badges, format_question, format_quiz_list, format_quiz_result};
use crate::error::{EduEasyError, EduEasyResult};
use crate::models::QUIZZES;
use crate::services::{LearnService, QuizSession};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum LearnCommands {
    /// List the available quizzes
    Quizzes,
    /// Take a quiz
    Quiz {
        /// Quiz number from `learn quizzes`
        id: u32,
        /// Answer numbers in question order, e.g. 2,1,2; prompts on stdin when omitted
        #[arg(short, long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },
    /// Show earned and locked badges with your points
    Badges,
}

pub fn handle_learn_command(storage: &Storage, cmd: LearnCommands) -> EduEasyResult<()> {
    let service = LearnService::new(storage);

    match cmd {
        LearnCommands::Quizzes => print!("{}", format_quiz_list(&QUIZZES)),

        LearnCommands::Quiz { id, answers } => {
            let mut session = QuizSession::start(id)?;
            match answers {
                Some(answers) => answer_all(&mut session, &answers)?,
                None => answer_interactively(&mut session)?,
            }
            let result = service.finish(session)?;
            print!("{}", format_quiz_result(&result));
        }

        LearnCommands::Badges => {
            let badges = service.badges()?;
            print!("{}", format_badges(&badges));
        }
    }

    Ok(())
}

/// Apply answers numbered from 1, one per question in order
fn answer_all(session: &mut QuizSession, answers: &[usize]) -> EduEasyResult<()> {
    let total = session.quiz().questions.len();
    if answers.len() > total {
        return Err(EduEasyError::Validation(format!(
            "Quiz {} has {} questions; got {} answers",
            session.quiz().id,
            total,
            answers.len()
        )));
    }

    for (question, &number) in answers.iter().enumerate() {
        let choice = number.checked_sub(1).ok_or_else(|| {
            EduEasyError::Validation("Answers are numbered from 1".into())
        })?;
        session.answer(question, choice)?;
    }
    Ok(())
}

/// Ask each question on stdin until answered; EOF leaves the rest unanswered
fn answer_interactively(session: &mut QuizSession) -> EduEasyResult<()> {
    let quiz = session.quiz();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", quiz.title);
    for (index, question) in quiz.questions.iter().enumerate() {
        println!();
        print!("{}", format_question(index, quiz.questions.len(), question));

        loop {
            print!("answer> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                println!();
                return Ok(());
            }

            let choice = match line.trim().parse::<usize>() {
                Ok(number) if (1..=question.answers.len()).contains(&number) => number - 1,
                _ => {
                    println!("Enter a number from 1 to {}", question.answers.len());
                    continue;
                }
            };

            let correct = session.answer(index, choice)?;
            println!("{}", if correct { "Correct!" } else { "Not quite." });
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_all_numbers_from_one() {
        let mut session = QuizSession::start(1).unwrap();
        answer_all(&mut session, &[2, 1, 2]).unwrap();
        assert_eq!(session.score(), 300);
    }

    #[test]
    fn test_answer_all_rejects_zero_and_extra_answers() {
        let mut session = QuizSession::start(2).unwrap();
        assert!(answer_all(&mut session, &[0]).unwrap_err().is_validation());

        let mut session = QuizSession::start(2).unwrap();
        assert!(answer_all(&mut session, &[1, 2, 1]).unwrap_err().is_validation());
    }
}
