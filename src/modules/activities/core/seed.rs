use crate::modules::activities::core::state::ActivityState;

/// Activities available at process start. The directory is never extended
/// at runtime; only the rosters below mutate.
pub fn seed_activities() -> Vec<ActivityState> {
    vec![
        ActivityState {
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
        ActivityState {
            name: "Programming Class".to_string(),
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
        ActivityState {
            name: "Gym Class".to_string(),
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
        ActivityState {
            name: "Art Club".to_string(),
            description: "Express creativity through painting and drawing".to_string(),
            schedule: "Thursdays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 15,
            participants: Vec::new(),
        },
    ]
}
