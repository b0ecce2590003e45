use crate::aggregator::AccumulatorStats;
use std::path::PathBuf;

/// Arguments for a conversion run
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Directory scanned for input logs
    pub input_dir: PathBuf,

    /// Print a per-hero text summary after each file
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            print_summary: false,
        }
    }
}

/// Outcome of converting one log file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub hero_count: usize,
    pub stats: AccumulatorStats,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
