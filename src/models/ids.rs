//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form shown to users, e.g. `loan-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }

            /// Check whether `reference` names this ID, either as a full UUID
            /// or as the (possibly prefixed) short form.
            pub fn matches(&self, reference: &str) -> bool {
                let reference = reference.trim();
                if let Ok(uuid) = Uuid::parse_str(reference) {
                    return uuid == self.0;
                }
                let stripped = reference.strip_prefix($display_prefix).unwrap_or(reference);
                stripped.len() >= 4 && self.0.simple().to_string().starts_with(stripped)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(LoanId, "loan-");
define_id!(ExpenseId, "exp-");
define_id!(GoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = LoanId::new();
        let display = id.to_string();
        assert!(display.starts_with("loan-"));
        assert_eq!(display.len(), 13);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = ExpenseId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.as_uuid().simple().to_string()[..6]));
        assert!(!id.matches("exp-"));
        assert!(!ExpenseId::new().matches(&id.as_uuid().to_string()));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: GoalId = format!("goal-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = LoanId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: LoanId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
