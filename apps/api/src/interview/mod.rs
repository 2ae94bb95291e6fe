//! Interview preparation — question generation and answer review.

pub mod defaults;
pub mod handlers;
pub mod prompts;
