//! Output writers for hero timeline documents.

pub mod json;

// Re-export main functions
pub use json::{read_heroes, write_heroes};
