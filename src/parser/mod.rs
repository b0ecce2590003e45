//! Log line classification and output schema definitions.
//!
//! This module handles:
//! - Decoding raw combat log lines
//! - Extracting interval and purchase facets
//! - Defining output schema

pub mod event;
pub mod schema;

// Re-export main types
pub use event::{classify_line, IntervalEvent, LineEvents, PurchaseEvent};
pub use schema::{HeroRecord, ItemPurchase, NetworthSample, Position};
