use serde::{Deserialize, Serialize};

/// Read-only lookup data shared with every renderable unit. Never mutated
/// after startup; an empty bundle degrades to "no suggestions" rather than
/// failing a mount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaticContent {
    #[serde(default)]
    pub common_queries: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub room_types: Vec<String>,
}

impl Default for StaticContent {
    fn default() -> Self {
        Self {
            common_queries: vec![
                "Booking process".to_string(),
                "Room types".to_string(),
                "Check-in/out times".to_string(),
                "Amenities".to_string(),
                "Location information".to_string(),
            ],
            languages: vec![
                "English".to_string(),
                "French".to_string(),
                "Spanish".to_string(),
                "German".to_string(),
                "Dutch".to_string(),
            ],
            room_types: vec![
                "Dorm".to_string(),
                "Private".to_string(),
                "Group".to_string(),
            ],
        }
    }
}

impl StaticContent {
    pub fn empty() -> Self {
        Self {
            common_queries: Vec::new(),
            languages: Vec::new(),
            room_types: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_is_seeded() {
        let content = StaticContent::default();
        assert_eq!(content.common_queries.len(), 5);
        assert_eq!(content.room_types, vec!["Dorm", "Private", "Group"]);
    }

    #[test]
    fn empty_bundle_has_no_suggestions() {
        let content = StaticContent::empty();
        assert!(content.common_queries.is_empty());
        assert!(content.languages.is_empty());
        assert!(content.room_types.is_empty());
    }
}
