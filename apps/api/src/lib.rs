//! Career coach backend: a thin proxy that forwards resume text, interview
//! material, and career-profile data to the Anthropic Messages API, parses
//! the completion as JSON, and relays it to the browser client — with
//! deterministic fallback content when the provider is unavailable.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod interview;
pub mod llm_client;
pub mod pathways;
pub mod pdf;
pub mod resources;
pub mod routes;
pub mod state;
