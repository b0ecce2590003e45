//! Configuration and constants for the converter.

/// Width of a networth bucket in seconds
pub const BUCKET_SECONDS: i64 = 60;

/// Extension of combat-log input files (without the dot)
pub const INPUT_EXTENSION: &str = "txt";

/// Extension of the generated hero timeline documents
pub const OUTPUT_EXTENSION: &str = "json";

// Event discriminators as written by the replay parser
pub const INTERVAL_TYPE: &str = "interval";
pub const PURCHASE_TYPE: &str = "DOTA_COMBATLOG_PURCHASE";

// Name prefixes. Interval records carry the unit class name, combat log
// records carry the npc name, so the same hero shows up spelled two ways.
pub const HERO_UNIT_PREFIX: &str = "CDOTA_Unit_Hero_";
pub const HERO_NPC_PREFIX: &str = "npc_dota_hero_";
pub const ITEM_PREFIX: &str = "item_";
