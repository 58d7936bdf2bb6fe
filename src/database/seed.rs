use crate::models::Activity;

/// Catalog the registry starts with on every boot. Signups made while the
/// process runs are lost on restart.
pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        entry(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        entry(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        entry(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        // Sports
        entry(
            "Basketball Team",
            Activity::new(
                "Join the school basketball team and compete in local leagues",
                "Mondays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        entry(
            "Soccer Club",
            Activity::new(
                "Practice soccer skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:30 PM",
                18,
            ),
        ),
        entry(
            "Swimming Club",
            Activity::new(
                "Improve swimming techniques and participate in swim meets",
                "Tuesdays, 4:00 PM - 5:30 PM",
                20,
            ),
        ),
        entry(
            "Track and Field",
            Activity::new(
                "Train for running, jumping, and throwing events",
                "Fridays, 3:30 PM - 5:30 PM",
                25,
            ),
        ),
        // Arts
        entry(
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and other visual arts",
                "Tuesdays, 3:30 PM - 5:00 PM",
                16,
            ),
        ),
        entry(
            "Drama Society",
            Activity::new(
                "Participate in acting, stage production, and school plays",
                "Fridays, 4:00 PM - 6:00 PM",
                20,
            ),
        ),
        entry(
            "Photography Club",
            Activity::new(
                "Learn photography skills and work on creative photo projects",
                "Thursdays, 4:00 PM - 5:30 PM",
                12,
            ),
        ),
        entry(
            "Music Ensemble",
            Activity::new(
                "Perform music in a group setting and prepare for concerts",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            ),
        ),
        // Academics
        entry(
            "Math Olympiad",
            Activity::new(
                "Prepare for math competitions and solve challenging problems",
                "Thursdays, 3:30 PM - 5:00 PM",
                12,
            ),
        ),
        entry(
            "Science Club",
            Activity::new(
                "Conduct experiments and explore scientific topics",
                "Wednesdays, 4:00 PM - 5:30 PM",
                14,
            ),
        ),
        entry(
            "Debate Team",
            Activity::new(
                "Develop argumentation skills and compete in debate tournaments",
                "Tuesdays, 4:00 PM - 5:30 PM",
                10,
            ),
        ),
        entry(
            "Book Club",
            Activity::new(
                "Read and discuss literature from various genres",
                "Fridays, 3:30 PM - 4:30 PM",
                15,
            ),
        ),
    ]
}

fn entry(name: &str, activity: Activity) -> (String, Activity) {
    (name.to_string(), activity)
}
