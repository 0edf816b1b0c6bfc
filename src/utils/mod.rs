pub mod error;
pub mod gemini;
