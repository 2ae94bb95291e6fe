//! Resume analysis — scored evaluation of resume text (structure, content,
//! ATS compatibility, overall).

pub mod handlers;
pub mod models;
pub mod prompts;
