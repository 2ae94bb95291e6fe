//! Canned career pathways served when the provider is unavailable.
//!
//! This is a lookup keyed on a coarse education-keyword match, not an
//! algorithm: tech and business profiles each get two records, everything
//! else gets one general record.

use crate::pathways::models::{Pathway, UserProfile};

const TECH_KEYWORDS: &[&str] = &[
    "computer science",
    "software",
    "engineering",
    "information technology",
    "data",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "finance",
    "marketing",
    "economics",
    "management",
];

/// Maps a profile's education field to a fixed pathway list.
/// Matching is case-insensitive substring containment.
pub fn default_pathways(profile: &UserProfile) -> Vec<Pathway> {
    let education = profile
        .education
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    if TECH_KEYWORDS.iter().any(|k| education.contains(k)) {
        tech_pathways()
    } else if BUSINESS_KEYWORDS.iter().any(|k| education.contains(k)) {
        business_pathways()
    } else {
        general_pathways()
    }
}

fn tech_pathways() -> Vec<Pathway> {
    vec![
        Pathway {
            title: "Software Developer".to_string(),
            description: "Design, build, and maintain software applications across the stack, \
                          from user-facing features to backend services."
                .to_string(),
            key_skills: vec![
                "Programming".to_string(),
                "Problem solving".to_string(),
                "Version control".to_string(),
                "Testing".to_string(),
            ],
            growth_outlook: "Much faster than average".to_string(),
        },
        Pathway {
            title: "Data Analyst".to_string(),
            description: "Collect, clean, and interpret data sets to answer business questions \
                          and support decision making."
                .to_string(),
            key_skills: vec![
                "SQL".to_string(),
                "Statistics".to_string(),
                "Data visualization".to_string(),
                "Spreadsheets".to_string(),
            ],
            growth_outlook: "Faster than average".to_string(),
        },
    ]
}

fn business_pathways() -> Vec<Pathway> {
    vec![
        Pathway {
            title: "Business Analyst".to_string(),
            description: "Bridge business needs and technical teams by analyzing processes and \
                          defining requirements for improvement."
                .to_string(),
            key_skills: vec![
                "Requirements gathering".to_string(),
                "Process modeling".to_string(),
                "Stakeholder communication".to_string(),
            ],
            growth_outlook: "Faster than average".to_string(),
        },
        Pathway {
            title: "Project Manager".to_string(),
            description: "Plan and coordinate projects end-to-end, managing scope, schedule, \
                          budget, and team communication."
                .to_string(),
            key_skills: vec![
                "Planning".to_string(),
                "Risk management".to_string(),
                "Leadership".to_string(),
            ],
            growth_outlook: "Average".to_string(),
        },
    ]
}

fn general_pathways() -> Vec<Pathway> {
    vec![Pathway {
        title: "Customer Success Manager".to_string(),
        description: "Help customers get value from a product or service, combining relationship \
                      building with light technical and domain knowledge."
            .to_string(),
        key_skills: vec![
            "Communication".to_string(),
            "Empathy".to_string(),
            "Organization".to_string(),
        ],
        growth_outlook: "Faster than average".to_string(),
    }]
}
