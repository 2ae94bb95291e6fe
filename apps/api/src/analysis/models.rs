use serde::{Deserialize, Serialize};

/// One scored evaluation category with concrete improvement suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSection {
    /// 0–100. Relayed as the model produced it; not re-validated.
    pub score: u8,
    pub improvements: Vec<String>,
}

/// The overall verdict: a score and a short prose summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallSection {
    pub score: u8,
    pub summary: String,
}

/// Full structured output of a resume evaluation, relayed verbatim to the
/// client once it deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub structure: ScoredSection,
    pub content: ScoredSection,
    pub ats: ScoredSection,
    pub overall: OverallSection,
}
