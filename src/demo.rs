use crate::models::DemoActivity;

/// Client-side roster shown when no backend is around. Never persisted.
pub fn seed_roster() -> Vec<DemoActivity> {
    vec![
        DemoActivity {
            id: 1,
            title: "Morning Yoga".into(),
            description: "An easy-flow class to start your day.".into(),
            participants: vec!["Ava Stone".into(), "Marco Reed".into(), "Lia Kim".into()],
        },
        DemoActivity {
            id: 2,
            title: "Pasta Workshop".into(),
            description: "Learn to make fresh pasta from scratch.".into(),
            participants: vec![],
        },
        DemoActivity {
            id: 3,
            title: "Photography Walk".into(),
            description: "Explore the city while taking photos.".into(),
            participants: vec!["Diego M.".into()],
        },
    ]
}

/// Removes the first `name` from the activity titled `title`.
/// Returns false when either is unknown.
pub fn remove_participant(roster: &mut [DemoActivity], title: &str, name: &str) -> bool {
    let Some(act) = roster.iter_mut().find(|a| a.title == title) else {
        return false;
    };
    match act.participants.iter().position(|p| p == name) {
        Some(i) => {
            act.participants.remove(i);
            true
        }
        None => false,
    }
}
