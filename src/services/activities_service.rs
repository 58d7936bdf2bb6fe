use serde::Serialize;
use tracing::{debug, info, warn};

use crate::database::ActivityRegistry;
use crate::error::SignupError;
use crate::models::ActivityCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> ActivityCatalog {
    registry.list()
}

pub fn sign_up_for_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match registry.sign_up(activity_name, email) {
        Ok(receipt) => {
            debug!(activity = %activity_name, email = %email, "signup email");
            info!(
                activity = %activity_name,
                participants = receipt.participants_count,
                max_participants = receipt.max_participants,
                "signup accepted"
            );
            if receipt.participants_count > receipt.max_participants as usize {
                warn!(
                    activity = %activity_name,
                    participants = receipt.participants_count,
                    max_participants = receipt.max_participants,
                    "activity is over capacity"
                );
            }
            Ok(SignupConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, "rejected signup email");
            warn!(activity = %activity_name, "signup rejected: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_message_names_student_and_activity() {
        let registry = ActivityRegistry::default();
        let confirmation =
            sign_up_for_activity(&registry, "Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(
            confirmation.message,
            "Signed up new@mergington.edu for Chess Club"
        );
    }

    #[test]
    fn listing_does_not_mutate() {
        let registry = ActivityRegistry::default();
        let first = list_activities(&registry);
        let second = list_activities(&registry);
        assert_eq!(first, second);
        assert_eq!(first, registry.list());
    }

    #[test]
    fn listing_reflects_signups() {
        let registry = ActivityRegistry::default();
        let before = list_activities(&registry).get("Debate Team").unwrap().clone();
        sign_up_for_activity(&registry, "Debate Team", "z@mergington.edu").unwrap();
        let after = list_activities(&registry);
        let debate = after.get("Debate Team").unwrap();
        assert_eq!(debate.participants.len(), before.participants.len() + 1);
        assert_eq!(debate.participants.last().map(String::as_str), Some("z@mergington.edu"));
    }

    #[test]
    fn second_signup_fails_and_email_appears_once() {
        let registry = ActivityRegistry::default();
        sign_up_for_activity(&registry, "Book Club", "twice@mergington.edu").unwrap();
        assert_eq!(
            sign_up_for_activity(&registry, "Book Club", "twice@mergington.edu"),
            Err(SignupError::AlreadySignedUp)
        );
        let book = registry.get("Book Club").unwrap();
        assert_eq!(
            book.participants
                .iter()
                .filter(|p| *p == "twice@mergington.edu")
                .count(),
            1
        );
    }
}
