//! Financial education service
//!
//! A [`QuizSession`] scores answers in memory. Finishing it through
//! [`LearnService::finish`] awards the novice badge the first time any quiz
//! is completed.

use tracing::info;

use crate::audit::AuditEntry;
use crate::error::{EduEasyError, EduEasyResult};
use crate::models::{
    badge_definition, find_quiz, total_points, Badge, Quiz, NOVICE_BADGE_ID, POINTS_PER_CORRECT,
};
use crate::storage::Storage;

pub const BADGE_UNLOCKED_TITLE: &str = "New Badge Unlocked!";

/// A success message raised by an achievement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn badge_unlocked(badge: &Badge) -> Self {
        Self {
            title: BADGE_UNLOCKED_TITLE.to_string(),
            message: format!("You earned the {} badge!", badge.name),
        }
    }
}

/// One attempt at a quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: &'static Quiz,
    answers: Vec<Option<usize>>,
    score: u32,
}

impl QuizSession {
    pub fn new(quiz: &'static Quiz) -> Self {
        Self {
            quiz,
            answers: vec![None; quiz.questions.len()],
            score: 0,
        }
    }

    pub fn start(quiz_id: u32) -> EduEasyResult<Self> {
        find_quiz(quiz_id)
            .map(Self::new)
            .ok_or_else(|| EduEasyError::quiz_not_found(quiz_id.to_string()))
    }

    pub fn quiz(&self) -> &'static Quiz {
        self.quiz
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Answer `question` with option `choice` (both zero-based)
    ///
    /// Returns whether the choice was correct. Each question can be answered
    /// once.
    pub fn answer(&mut self, question: usize, choice: usize) -> EduEasyResult<bool> {
        let Some(entry) = self.quiz.questions.get(question) else {
            return Err(EduEasyError::Validation(format!(
                "Quiz '{}' has no question {}",
                self.quiz.title,
                question + 1
            )));
        };
        if choice >= entry.answers.len() {
            return Err(EduEasyError::Validation(format!(
                "Question {} has {} answers; got {}",
                question + 1,
                entry.answers.len(),
                choice + 1
            )));
        }
        if self.answers[question].is_some() {
            return Err(EduEasyError::Validation(format!(
                "Question {} was already answered",
                question + 1
            )));
        }

        self.answers[question] = Some(choice);
        let correct = choice == entry.correct;
        if correct {
            self.score += POINTS_PER_CORRECT;
        }
        Ok(correct)
    }

    pub fn correct_count(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| **answer == Some(question.correct))
            .count()
    }
}

/// Outcome of a finished quiz
#[derive(Debug, Clone)]
pub struct QuizResult {
    pub quiz_id: u32,
    pub title: &'static str,
    pub score: u32,
    pub correct: usize,
    pub total: usize,
    /// Set when this quiz unlocked a badge
    pub unlocked: Option<Badge>,
    pub notification: Option<Notification>,
    /// Badge points plus this quiz's score
    pub points: u32,
}

pub struct LearnService<'a> {
    storage: &'a Storage,
}

impl<'a> LearnService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn badges(&self) -> EduEasyResult<Vec<Badge>> {
        self.storage.badges.get_all()
    }

    /// Complete a quiz, awarding the novice badge if it is not held yet
    ///
    /// Unanswered questions count as wrong.
    pub fn finish(&self, session: QuizSession) -> EduEasyResult<QuizResult> {
        let unlocked = self.award(NOVICE_BADGE_ID)?;
        let notification = unlocked.as_ref().map(Notification::badge_unlocked);
        let badges = self.storage.badges.get_all()?;
        let quiz = session.quiz();

        info!(quiz = quiz.id, score = session.score(), "quiz finished");
        Ok(QuizResult {
            quiz_id: quiz.id,
            title: quiz.title,
            score: session.score(),
            correct: session.correct_count(),
            total: quiz.questions.len(),
            unlocked,
            notification,
            points: total_points(&badges, session.score()),
        })
    }

    /// Store the badge unless it is already earned; returns it when new
    fn award(&self, badge_id: &str) -> EduEasyResult<Option<Badge>> {
        if self.storage.badges.find(badge_id)?.is_some() {
            return Ok(None);
        }
        let definition = badge_definition(badge_id).ok_or_else(|| EduEasyError::NotFound {
            entity_type: "Badge",
            identifier: badge_id.to_string(),
        })?;

        let badge = Badge::earn(definition);
        self.storage.badges.push(badge.clone())?;
        self.storage.badges.save()?;
        self.storage
            .record(AuditEntry::earned(badge.id.as_str(), badge.name.as_str()))?;

        info!(badge = %badge.id, "badge earned");
        Ok(Some(badge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Action;
    use crate::config::paths::EduEasyPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_correct_answers_score_100_each() {
        let mut session = QuizSession::start(1).unwrap();
        assert!(session.answer(0, 1).unwrap());
        assert!(!session.answer(1, 2).unwrap());
        assert!(session.answer(2, 1).unwrap());

        assert_eq!(session.score(), 200);
        assert_eq!(session.correct_count(), 2);
    }

    #[test]
    fn test_answer_rejects_bad_input() {
        let mut session = QuizSession::start(2).unwrap();
        assert!(session.answer(5, 0).unwrap_err().is_validation());
        assert!(session.answer(0, 3).unwrap_err().is_validation());

        session.answer(0, 0).unwrap();
        assert!(session.answer(0, 0).unwrap_err().is_validation());
        assert_eq!(session.score(), 100);
    }

    #[test]
    fn test_unknown_quiz() {
        assert!(QuizSession::start(42).unwrap_err().is_not_found());
    }

    #[test]
    fn test_first_finish_unlocks_novice_badge() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LearnService::new(&storage);

        let mut session = QuizSession::start(2).unwrap();
        session.answer(0, 0).unwrap();
        let result = service.finish(session).unwrap();

        assert_eq!(result.score, 100);
        assert_eq!(result.total, 2);
        assert_eq!(result.unlocked.as_ref().unwrap().id, "badge-novice");
        let notification = result.notification.unwrap();
        assert_eq!(notification.title, "New Badge Unlocked!");
        assert_eq!(notification.message, "You earned the Financial Novice badge!");
        assert_eq!(result.points, 600);

        let history = storage.audit().recent(1).unwrap();
        assert_eq!(history[0].action, Action::Earned);
    }

    #[test]
    fn test_badge_is_awarded_once() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LearnService::new(&storage);

        service.finish(QuizSession::start(1).unwrap()).unwrap();
        let second = service.finish(QuizSession::start(2).unwrap()).unwrap();

        assert!(second.unlocked.is_none());
        assert!(second.notification.is_none());
        assert_eq!(second.score, 0);
        assert_eq!(second.points, 500);
        assert_eq!(service.badges().unwrap().len(), 1);
        assert_eq!(storage.audit().recent(10).unwrap().len(), 1);
    }

    #[test]
    fn test_badges_survive_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().to_path_buf());
        {
            let mut storage = Storage::new(paths.clone()).unwrap();
            storage.load_all().unwrap();
            LearnService::new(&storage)
                .finish(QuizSession::start(1).unwrap())
                .unwrap();
        }

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        let again = LearnService::new(&storage)
            .finish(QuizSession::start(1).unwrap())
            .unwrap();
        assert!(again.unlocked.is_none());
    }
}
