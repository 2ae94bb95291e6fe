// Resource search prompt templates.

pub const SEARCH_RESOURCES_MAX_TOKENS: u32 = 1200;

pub const SEARCH_RESOURCES_SYSTEM: &str = "\
You are a career advisor recommending learning and job-search resources. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const SEARCH_RESOURCES_PROMPT: &str = r#"Recommend 3 to 5 concrete resources for the following request.

QUERY: {query}
QUERY TYPE: {query_type}

OUTPUT SCHEMA (return exactly this structure):
{
  "results": [
    {
      "title": "resource title",
      "resourceType": "course" | "book" | "article" | "community" | "tool",
      "description": "one sentence on why it helps"
    }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_prompt_splices_query() {
        let prompt = SEARCH_RESOURCES_PROMPT
            .replace("{query}", "systems programming")
            .replace("{query_type}", "learning");
        assert!(prompt.contains("systems programming"));
        assert!(prompt.contains("QUERY TYPE: learning"));
    }
}
