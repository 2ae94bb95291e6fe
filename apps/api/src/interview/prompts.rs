// Interview endpoint prompt templates.

pub const GENERATE_QUESTIONS_MAX_TOKENS: u32 = 1000;
pub const REVIEW_ANSWER_MAX_TOKENS: u32 = 800;

pub const GENERATE_QUESTIONS_SYSTEM: &str = "\
You are an experienced hiring manager preparing interview questions. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const GENERATE_QUESTIONS_PROMPT: &str = r#"Generate exactly 6 interview questions for a candidate applying to the following position: {position}

Mix behavioral and role-specific questions. Make them specific enough to be useful for practice.
{resume_context}
OUTPUT SCHEMA (return exactly this structure):
{
  "questions": ["question 1", "question 2", "question 3", "question 4", "question 5", "question 6"]
}"#;

/// Spliced into `{resume_context}` when the candidate supplied a resume
/// analysis alongside the request.
pub const RESUME_CONTEXT_FRAGMENT: &str = r#"
The candidate's resume was analyzed with this result; tailor 2-3 questions to probe its weaker areas:
{resume_analysis}
"#;

pub const REVIEW_ANSWER_SYSTEM: &str = "\
You are an experienced interview coach giving concise, constructive feedback. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const REVIEW_ANSWER_PROMPT: &str = r#"An interview candidate{position_context} was asked:

QUESTION: {question}

They answered:

ANSWER: {answer}

Give constructive feedback on the answer: what worked, what was missing, and one concrete way to improve it.

OUTPUT SCHEMA (return exactly this structure):
{
  "feedback": "your feedback as a single paragraph"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_prompt_splices_position() {
        let prompt = GENERATE_QUESTIONS_PROMPT
            .replace("{position}", "Backend Engineer")
            .replace("{resume_context}", "");
        assert!(prompt.contains("Backend Engineer"));
        assert!(!prompt.contains("{position}"));
    }

    #[test]
    fn test_review_prompt_splices_question_and_answer() {
        let prompt = REVIEW_ANSWER_PROMPT
            .replace("{position_context}", " for a QA role")
            .replace("{question}", "Why QA?")
            .replace("{answer}", "I like breaking things.");
        assert!(prompt.contains("Why QA?"));
        assert!(prompt.contains("I like breaking things."));
    }
}
