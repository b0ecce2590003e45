//! Output JSON schema definitions for hero timelines.
//!
//! This module defines the structure of JSON files we write to disk.
//! Field names are camelCase to match what downstream viewers read.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Per-hero timeline written to JSON, one per distinct hero in a log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    /// Normalized hero name (lowercase, no underscores)
    pub hero_name: String,

    /// One sample per minute bucket, ascending, plus the last observed sample
    pub networths: Vec<NetworthSample>,

    /// Item purchases in log order
    pub items: Vec<ItemPurchase>,

    /// Every interval position in log order
    pub positions: Vec<Position>,
}

/// Networth at a point in time
///
/// `time` is a bucket start for bucketed samples and the raw event time for
/// the trailing sample. `networth` is copied from the log as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworthSample {
    pub time: Number,
    pub networth: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPurchase {
    /// Full item name including the `item_` prefix (e.g. "item_blink")
    pub item_name: String,
    pub purchase_time: Value,
}

/// Map position sample
///
/// Coordinates are kept as the values the replay parser wrote,
/// so integer cells stay integers and float coordinates stay floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: Value,
    pub y: Value,
    pub time: Number,
}
