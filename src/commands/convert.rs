//! Convert command implementation.
//!
//! The convert command:
//! 1. Discovers `.txt` combat logs in a directory
//! 2. Classifies every line of each log
//! 3. Accumulates per-hero timelines
//! 4. Writes one JSON document per log

use crate::aggregator::HeroAccumulator;
use crate::commands::models::{ConvertArgs, FileReport, RunSummary};
use crate::commands::utils::print_hero_summary;
use crate::output::write_heroes;
use crate::utils::config::{INPUT_EXTENSION, OUTPUT_EXTENSION};
use crate::utils::error::ConvertError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute a conversion run over every log in `args.input_dir`
///
/// **Public** - main entry point called from main.rs
///
/// Stops at the first file that fails. Files converted before the failure
/// keep their output.
///
/// # Errors
/// * Directory listing failures
/// * Malformed lines or missing fields in any log
/// * File write errors
pub fn execute_convert(args: &ConvertArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    let inputs = discover_inputs(&args.input_dir).context("Failed to discover input logs")?;
    debug!(
        "Found {} input logs in {}",
        inputs.len(),
        args.input_dir.display()
    );

    let mut summary = RunSummary::default();

    if inputs.is_empty() {
        println!(
            "No .{} files found in {}.",
            INPUT_EXTENSION,
            describe_dir(&args.input_dir)
        );
    } else {
        for input in &inputs {
            summary.files.push(process_file(input, args.print_summary)?);
        }
    }

    println!("All files processed.");
    info!(
        "Converted {} files in {:.2}s",
        summary.file_count(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(summary)
}

/// Convert a single log and write its sibling JSON document
///
/// **Public** - usable on its own for one-off files
pub fn process_file(input: &Path, print_summary: bool) -> Result<FileReport> {
    let output = output_path_for(input);

    let accumulator = accumulate_file(input)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let stats = accumulator.stats();
    let hero_count = accumulator.hero_count();
    debug!("{}: {}, {} heroes", input.display(), stats.summary(), hero_count);

    let heroes = accumulator.finalize();
    write_heroes(&heroes, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Processed {} -> {}", input.display(), output.display());

    if print_summary {
        print_hero_summary(&heroes);
    }

    Ok(FileReport {
        input: input.to_path_buf(),
        output,
        hero_count,
        stats,
    })
}

/// Read a log and fold every line into a fresh accumulator
///
/// **Public** - the whole per-file pass without any output
///
/// # Errors
/// * `ConvertError::ReadFailed` - File cannot be opened or read
/// * `ConvertError::Parse` - First line that fails to classify
pub fn accumulate_file(input: &Path) -> Result<HeroAccumulator, ConvertError> {
    let read_failed = |source| ConvertError::ReadFailed {
        path: input.to_path_buf(),
        source,
    };

    let file = File::open(input).map_err(read_failed)?;
    let mut accumulator = HeroAccumulator::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(read_failed)?;
        accumulator.process_line(&line, index + 1)?;
    }

    Ok(accumulator)
}

/// List input logs in `dir`, sorted by name
///
/// Hidden files and anything that is not a regular file are skipped.
/// When `dir` is `.`, returned paths are bare file names.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let discover_failed = |source| ConvertError::DiscoverFailed {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(discover_failed)? {
        let entry = entry.map_err(discover_failed)?;
        let name = entry.file_name();

        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == INPUT_EXTENSION) && path.is_file() {
            inputs.push(if dir == Path::new(".") {
                PathBuf::from(name)
            } else {
                path
            });
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Output path for an input log: same base name, `.json` extension
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

fn describe_dir(dir: &Path) -> String {
    if dir == Path::new(".") {
        "the current directory".to_string()
    } else {
        dir.display().to_string()
    }
}
