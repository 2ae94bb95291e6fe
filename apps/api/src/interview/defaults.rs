//! Deterministic fallback content for the interview endpoints, served
//! whenever the provider is unreachable, unconfigured, or unparsable.

/// Six generic interview questions tailored only by position.
pub fn default_questions(position: &str) -> Vec<String> {
    vec![
        format!("Tell me about yourself and why you're interested in this {position} role."),
        format!("What relevant experience do you have for a {position} position?"),
        "Describe a challenging problem you faced and how you solved it.".to_string(),
        "Tell me about a time you had to work with a difficult team member.".to_string(),
        format!("What do you consider your greatest strength for this {position} role?"),
        "Where do you see yourself in five years, and how does this role fit in?".to_string(),
    ]
}

/// Generic constructive feedback for an interview answer.
pub fn default_feedback() -> String {
    "Thank you for your answer. A strong response typically follows the STAR method: \
     describe the Situation, the Task you were responsible for, the Action you took, \
     and the Result you achieved. Consider adding a concrete example with a measurable \
     outcome, and tie your answer back to the role you're applying for."
        .to_string()
}
