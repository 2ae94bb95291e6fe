use serde::{Deserialize, Serialize};

/// Coarse career-profile signal supplied by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub interests: Option<String>,
}

/// A single suggested career pathway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub title: String,
    pub description: String,
    pub key_skills: Vec<String>,
    pub growth_outlook: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PathwaySet {
    pub pathways: Vec<Pathway>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathway_serializes_camel_case() {
        let pathway = Pathway {
            title: "Software Developer".to_string(),
            description: "Builds software".to_string(),
            key_skills: vec!["Rust".to_string()],
            growth_outlook: "Strong".to_string(),
        };
        let json = serde_json::to_value(&pathway).unwrap();
        assert!(json.get("keySkills").is_some());
        assert!(json.get("growthOutlook").is_some());
        assert!(json.get("key_skills").is_none());
    }

    #[test]
    fn test_user_profile_tolerates_missing_fields() {
        let profile: UserProfile = serde_json::from_str(r#"{"education": "History"}"#).unwrap();
        assert_eq!(profile.education.as_deref(), Some("History"));
        assert!(profile.experience.is_none());
    }
}
