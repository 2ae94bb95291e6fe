//! Career pathways — suggested roles derived from a coarse user profile.

pub mod defaults;
pub mod handlers;
pub mod models;
pub mod prompts;
