use std::{collections::HashSet, fmt, str::FromStr};

use parking_lot::RwLock;

use crate::error::{RegistryError, SignupError};
use crate::models::{Activity, ActivityCatalog};

use super::seed::seed_activities;

/// Whether signup checks `max_participants` before appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Rosters may grow past `max_participants`.
    #[default]
    Unenforced,
    /// Signups on a full roster are rejected with `SignupError::ActivityFull`.
    Enforce,
}

impl CapacityPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CapacityPolicy::Unenforced => "unenforced",
            CapacityPolicy::Enforce => "enforce",
        }
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapacityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unenforced" | "off" => Ok(CapacityPolicy::Unenforced),
            "enforce" | "enforced" | "on" => Ok(CapacityPolicy::Enforce),
            other => Err(format!("unknown capacity policy '{other}'")),
        }
    }
}

/// Roster position of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupReceipt {
    pub participants_count: usize,
    pub max_participants: u32,
}

/// In-memory activity catalog. Membership is fixed at construction; only the
/// participant lists change afterwards.
pub struct ActivityRegistry {
    activities: RwLock<Vec<(String, Activity)>>,
    capacity_policy: CapacityPolicy,
}

impl ActivityRegistry {
    pub fn new(
        activities: Vec<(String, Activity)>,
        capacity_policy: CapacityPolicy,
    ) -> Result<Self, RegistryError> {
        {
            let mut seen = HashSet::new();
            for (name, _) in &activities {
                if name.trim().is_empty() {
                    return Err(RegistryError::EmptyName);
                }
                if !seen.insert(name.as_str()) {
                    return Err(RegistryError::DuplicateName(name.clone()));
                }
            }
        }

        Ok(Self {
            activities: RwLock::new(activities),
            capacity_policy,
        })
    }

    pub fn seeded(capacity_policy: CapacityPolicy) -> Self {
        Self {
            activities: RwLock::new(seed_activities()),
            capacity_policy,
        }
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity_policy
    }

    pub fn list(&self) -> ActivityCatalog {
        ActivityCatalog(self.activities.read().clone())
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities
            .read()
            .iter()
            .find(|(name, _)| name == activity_name)
            .map(|(_, activity)| activity.clone())
    }

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// Lookup, duplicate check, capacity check and append all happen under
    /// one write lock.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<SignupReceipt, SignupError> {
        let mut activities = self.activities.write();

        let activity = activities
            .iter_mut()
            .find(|(name, _)| name == activity_name)
            .map(|(_, activity)| activity)
            .ok_or(SignupError::NotFound)?;

        if activity.is_signed_up(email) {
            return Err(SignupError::AlreadySignedUp);
        }

        if self.capacity_policy == CapacityPolicy::Enforce && activity.is_full() {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());

        Ok(SignupReceipt {
            participants_count: activity.participants.len(),
            max_participants: activity.max_participants,
        })
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded(CapacityPolicy::default())
    }
}
