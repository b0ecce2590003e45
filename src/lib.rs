//! Hero Timeline
//!
//! Converts replay combat logs (one JSON event per line) into per-hero
//! timelines: minute-bucketed networth, item purchases and positions.
//!
//! This crate provides the core implementation for the
//! `hero-timeline` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cd replays/
//! hero-timeline
//! ```
//!
//! Every `*.txt` log in the directory gets a sibling `*.json` document.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
