use indexmap::IndexMap;
use serde::Deserialize;

/// Details for one activity as the server sends them; the name is the map key.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub id: u32,
}

impl ActivityDetails {
    /// Never negative, even if the server over-filled the activity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// `GET /activities` body. Iteration follows the server's key order.
pub type ActivityMap = IndexMap<String, ActivityDetails>;

/// `{message}` on success, `{detail}` on failure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoActivity {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub participants: Vec<String>,
}

/// Who a remove click targets. Server cards emit `ServerEmail`, demo cards
/// emit `DemoName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRef {
    ServerEmail(String),
    DemoName(String),
}

impl ParticipantRef {
    pub fn label(&self) -> &str {
        match self {
            ParticipantRef::ServerEmail(s) | ParticipantRef::DemoName(s) => s,
        }
    }
}

/// Up to two uppercase initials, one per whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"],
            "id": 1
        },
        "Art Club": {
            "description": "Painting and drawing",
            "schedule": "Thursdays, 3:30 PM - 5:00 PM",
            "max_participants": 15,
            "participants": []
        },
        "Basketball Team": {
            "description": "Practice and compete",
            "schedule": "Tuesdays, 4:00 PM - 6:00 PM",
            "max_participants": 1,
            "participants": ["a@x.edu", "b@x.edu"],
            "id": 3
        }
    }"#;

    #[test]
    fn mapping_keeps_server_order() {
        let map: ActivityMap = serde_json::from_str(SAMPLE).unwrap();
        let names: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(names, ["Chess Club", "Art Club", "Basketball Team"]);
    }

    #[test]
    fn missing_id_defaults_to_zero() {
        let map: ActivityMap = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(map["Art Club"].id, 0);
        assert_eq!(map["Chess Club"].id, 1);
    }

    #[test]
    fn spots_left_counts_participants() {
        let map: ActivityMap = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(map["Chess Club"].spots_left(), 10);
        assert_eq!(map["Art Club"].spots_left(), 15);
        assert_eq!(map["Basketball Team"].spots_left(), 0);
    }

    #[test]
    fn api_message_accepts_either_field() {
        let ok: ApiMessage =
            serde_json::from_str(r#"{"message":"Signed up a@x.edu for Chess Club"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("Signed up a@x.edu for Chess Club"));
        assert_eq!(ok.detail, None);

        let err: ApiMessage = serde_json::from_str(r#"{"detail":"Activity not found"}"#).unwrap();
        assert_eq!(err.detail.as_deref(), Some("Activity not found"));
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Ava Stone"), "AS");
        assert_eq!(initials("Diego M."), "DM");
        assert_eq!(initials("maria de la cruz"), "MD");
        assert_eq!(initials("michael@mergington.edu"), "M");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn participant_ref_label() {
        assert_eq!(ParticipantRef::ServerEmail("a@x.edu".into()).label(), "a@x.edu");
        assert_eq!(ParticipantRef::DemoName("Lia Kim".into()).label(), "Lia Kim");
    }

    proptest! {
        #[test]
        fn spots_left_matches_capacity_minus_count(max in 0u32..200, n in 0usize..250) {
            let details = ActivityDetails {
                description: String::new(),
                schedule: String::new(),
                max_participants: max,
                participants: (0..n).map(|i| format!("p{i}@x.edu")).collect(),
                id: 0,
            };
            let expected = (i64::from(max) - n as i64).max(0) as u32;
            prop_assert_eq!(details.spots_left(), expected);
        }
    }
}
