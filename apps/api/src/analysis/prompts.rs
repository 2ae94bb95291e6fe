// Resume analysis prompt templates.

pub const ANALYZE_RESUME_MAX_TOKENS: u32 = 2000;

pub const ANALYZE_RESUME_SYSTEM: &str = "\
You are an expert career counselor and resume reviewer. \
Analyze resumes and return ONLY valid JSON in the exact format requested. \
Do not include any explanatory text before or after the JSON.";

pub const ANALYZE_RESUME_PROMPT: &str = r#"Analyze this resume and return ONLY valid JSON in the exact format specified below.

REQUIRED JSON FORMAT:
{
  "structure": {
    "score": [number between 0-100],
    "improvements": ["specific improvement 1", "specific improvement 2", "specific improvement 3"]
  },
  "content": {
    "score": [number between 0-100],
    "improvements": ["specific improvement 1", "specific improvement 2", "specific improvement 3"]
  },
  "ats": {
    "score": [number between 0-100],
    "improvements": ["specific improvement 1", "specific improvement 2", "specific improvement 3"]
  },
  "overall": {
    "score": [number between 0-100],
    "summary": "brief overall assessment summary"
  }
}

EVALUATION CRITERIA:
- Structure (0-100): Document formatting, section organization, layout, visual hierarchy, readability
- Content Effectiveness (0-100): Achievement quantification, relevant keywords, impact-focused descriptions, skills presentation
- ATS Compatibility (0-100): Standard section headers, machine-readable format, keyword optimization, formatting simplicity

RESUME TO ANALYZE:
{resume_text}

IMPORTANT: Return ONLY the JSON object. No other text."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_template_splices_resume_text() {
        let prompt = ANALYZE_RESUME_PROMPT.replace("{resume_text}", "Jane Doe, Rust Engineer");
        assert!(prompt.contains("Jane Doe, Rust Engineer"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
