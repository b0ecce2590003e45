//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use convert::{accumulate_file, discover_inputs, execute_convert, output_path_for, process_file};
pub use models::{ConvertArgs, FileReport, RunSummary};
pub use utils::{check_output_file, print_hero_summary};
