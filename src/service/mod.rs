pub mod extract;
pub mod generation;
pub mod prompt;
pub mod validate;
