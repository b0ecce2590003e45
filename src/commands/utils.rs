use crate::output::read_heroes;
use crate::parser::schema::HeroRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate an existing hero timeline document
///
/// Returns the number of heroes it holds.
pub fn check_output_file(file_path: &Path) -> Result<usize> {
    println!("Checking timeline: {}", file_path.display());

    let heroes = read_heroes(file_path)
        .with_context(|| format!("Invalid timeline document {}", file_path.display()))?;

    println!("✓ Valid timeline JSON");
    println!("  Heroes: {}", heroes.len());
    print_hero_summary(&heroes);

    Ok(heroes.len())
}

/// Print one line per hero: final networth, items bought, positions tracked
pub fn print_hero_summary(heroes: &[HeroRecord]) {
    for hero in heroes {
        let networth = hero
            .networths
            .last()
            .map(|s| s.networth.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<24} networth {:>7}  items {:>3}  positions {:>5}",
            hero.hero_name,
            networth,
            hero.items.len(),
            hero.positions.len()
        );
    }
}
