use serde::{Deserialize, Serialize};

/// A single suggested learning or career resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub resource_type: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceSet {
    pub results: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_serializes_camel_case() {
        let resource = Resource {
            title: "The Rust Book".to_string(),
            resource_type: "book".to_string(),
            description: "Official introduction to Rust".to_string(),
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert!(json.get("resourceType").is_some());
        assert!(json.get("resource_type").is_none());
    }
}
