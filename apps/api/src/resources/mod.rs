//! Learning-resource search backed by the LLM, with a canned fallback list.

pub mod defaults;
pub mod handlers;
pub mod models;
pub mod prompts;
