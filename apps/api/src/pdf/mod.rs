//! PDF text extraction — raw bytes in, trimmed text out.

pub mod handlers;
