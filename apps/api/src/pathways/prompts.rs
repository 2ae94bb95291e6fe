// Career pathway prompt templates.

pub const ANALYZE_PATHWAYS_MAX_TOKENS: u32 = 1500;

pub const ANALYZE_PATHWAYS_SYSTEM: &str = "\
You are an expert career counselor suggesting realistic career pathways. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const ANALYZE_PATHWAYS_PROMPT: &str = r#"Suggest 2 to 4 realistic career pathways for this candidate.

CANDIDATE PROFILE:
- Education: {education}
- Experience: {experience}
- Interests: {interests}
{resume_context}
OUTPUT SCHEMA (return exactly this structure):
{
  "pathways": [
    {
      "title": "pathway title",
      "description": "one or two sentences describing the role",
      "keySkills": ["skill 1", "skill 2", "skill 3"],
      "growthOutlook": "short outlook phrase"
    }
  ]
}"#;

/// Spliced into `{resume_context}` when a resume analysis was supplied.
pub const PATHWAYS_RESUME_FRAGMENT: &str = r#"
RESUME ANALYSIS (use it to ground the suggestions):
{resume_analysis}
"#;
