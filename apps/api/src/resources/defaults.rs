//! Canned resource results served when the provider is unavailable.

use crate::resources::models::Resource;

/// Fixed three-entry resource list referencing the query.
pub fn default_resources(query: &str) -> Vec<Resource> {
    vec![
        Resource {
            title: format!("Online courses on {query}"),
            resource_type: "course".to_string(),
            description: "Search major course platforms (Coursera, edX, Udemy) for structured \
                          introductions and certificates."
                .to_string(),
        },
        Resource {
            title: format!("Community discussions about {query}"),
            resource_type: "community".to_string(),
            description: "Relevant subreddits, Discord servers, and Stack Exchange sites where \
                          practitioners answer questions."
                .to_string(),
        },
        Resource {
            title: format!("Recent articles and guides on {query}"),
            resource_type: "article".to_string(),
            description: "Industry blogs and documentation hubs with practical, up-to-date \
                          walkthroughs."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resources_returns_three() {
        assert_eq!(default_resources("rust").len(), 3);
    }

    #[test]
    fn test_default_resources_reference_query() {
        let results = default_resources("machine learning");
        assert!(results.iter().all(|r| r.title.contains("machine learning")));
    }
}
