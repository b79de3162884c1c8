//! Achievement badges
//!
//! The catalog lists every badge the learning area shows. Only the novice
//! badge can currently be earned, by finishing any quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NOVICE_BADGE_ID: &str = "badge-novice";

/// Points credited per earned badge on the learning dashboard
pub const POINTS_PER_BADGE: u32 = 500;

/// A badge shown in the learning area, earned or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// What unlocks it, as shown on a locked badge
    pub requirement: &'static str,
}

pub static BADGE_CATALOG: [BadgeDefinition; 4] = [
    BadgeDefinition {
        id: NOVICE_BADGE_ID,
        name: "Financial Novice",
        icon: "🏆",
        description: "Completed your first financial quiz!",
        requirement: "Complete 1 Quiz",
    },
    BadgeDefinition {
        id: "badge-debt-destroyer",
        name: "Debt Destroyer",
        icon: "🚀",
        description: "Paid off a loan!",
        requirement: "Pay off 1 Loan",
    },
    BadgeDefinition {
        id: "badge-super-saver",
        name: "Super Saver",
        icon: "🐷",
        description: "Saved your first $1,000!",
        requirement: "Save $1,000",
    },
    BadgeDefinition {
        id: "badge-scholar",
        name: "Scholar",
        icon: "🎓",
        description: "Completed five quizzes!",
        requirement: "Complete 5 Quizzes",
    },
];

pub fn badge_definition(id: &str) -> Option<&'static BadgeDefinition> {
    BADGE_CATALOG.iter().find(|badge| badge.id == id)
}

/// An earned badge as stored in `badges.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub earned_at: DateTime<Utc>,
}

impl Badge {
    pub fn earn(definition: &BadgeDefinition) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.name.to_string(),
            icon: definition.icon.to_string(),
            description: definition.description.to_string(),
            earned_at: Utc::now(),
        }
    }
}

/// Learning points: a fixed amount per earned badge plus the current quiz score
pub fn total_points(badges: &[Badge], quiz_score: u32) -> u32 {
    let earned = u32::try_from(badges.len()).unwrap_or(u32::MAX);
    earned.saturating_mul(POINTS_PER_BADGE).saturating_add(quiz_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, badge) in BADGE_CATALOG.iter().enumerate() {
            assert!(BADGE_CATALOG[i + 1..].iter().all(|other| other.id != badge.id));
        }
    }

    #[test]
    fn test_earn_novice() {
        let definition = badge_definition(NOVICE_BADGE_ID).unwrap();
        let badge = Badge::earn(definition);
        assert_eq!(badge.id, "badge-novice");
        assert_eq!(badge.name, "Financial Novice");
        assert!(badge_definition("badge-unknown").is_none());
    }

    #[test]
    fn test_total_points() {
        let novice = Badge::earn(&BADGE_CATALOG[0]);
        assert_eq!(total_points(&[], 0), 0);
        assert_eq!(total_points(&[], 300), 300);
        assert_eq!(total_points(&[novice], 200), 700);
    }
}
