//! Aggregation of classified log events into hero timelines.
//!
//! This module transforms per-line events into:
//! - Minute-bucketed networth series
//! - Item purchase history
//! - Position traces

pub mod hero;

// Re-export main types and functions
pub use hero::{bucket_time, normalize_hero_name, AccumulatorStats, HeroAccumulator, HeroState};
