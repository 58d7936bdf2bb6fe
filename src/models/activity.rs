use serde::{ser::Serializer, Serialize};

/// One extracurricular offering. The activity name is the registry key and is
/// not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// Snapshot of the whole catalog in seed order.
///
/// Serializes as a JSON object keyed by activity name, keeping the order the
/// activities were registered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog(pub Vec<(String, Activity)>);

impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, activity)| (name, activity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_serializes_as_object_in_insertion_order() {
        let catalog = ActivityCatalog(vec![
            (
                "Zumba".to_string(),
                Activity::new("Dance", "Mondays", 5).with_participants(&["a@x.edu"]),
            ),
            ("Archery".to_string(), Activity::new("Bows", "Fridays", 3)),
        ]);

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(
            json,
            r#"{"Zumba":{"description":"Dance","schedule":"Mondays","max_participants":5,"participants":["a@x.edu"]},"Archery":{"description":"Bows","schedule":"Fridays","max_participants":3,"participants":[]}}"#
        );
    }

    #[test]
    fn full_when_roster_reaches_capacity() {
        let activity = Activity::new("Tiny", "Never", 1);
        assert!(!activity.is_full());
        assert!(activity.with_participants(&["one@x.edu"]).is_full());
    }
}
