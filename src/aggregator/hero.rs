//! Per-hero accumulation of interval and purchase events.
//!
//! One `HeroAccumulator` covers exactly one log file. Heroes are keyed by
//! normalized name and kept in first-seen order.

use crate::parser::schema::{HeroRecord, ItemPurchase, NetworthSample, Position};
use crate::parser::{classify_line, IntervalEvent, LineEvents, PurchaseEvent};
use crate::utils::config::BUCKET_SECONDS;
use crate::utils::error::ParseError;
use indexmap::IndexMap;
use log::debug;
use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Normalize a hero name for use as an accumulation key
///
/// `Nevermore`, `nevermore` and `Never_More` all map to `nevermore`.
pub fn normalize_hero_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Start of the minute bucket containing `time`
///
/// Floors toward negative infinity, so pre-game times land in negative buckets.
/// Integer times give integer buckets and float times give float buckets
/// (`65` -> `60`, `65.0` -> `60.0`).
pub fn bucket_time(time: &Number) -> Number {
    if let Some(bucket) = time
        .as_i64()
        .and_then(|t| t.div_euclid(BUCKET_SECONDS).checked_mul(BUCKET_SECONDS))
    {
        return Number::from(bucket);
    }
    if let Some(t) = time.as_u64() {
        let width = BUCKET_SECONDS as u64;
        return Number::from(t / width * width);
    }

    let width = BUCKET_SECONDS as f64;
    time.as_f64()
        .and_then(|t| Number::from_f64((t / width).floor() * width))
        .unwrap_or_else(|| time.clone())
}

/// Compare two JSON numbers by value, so `60` and `60.0` are the same bucket
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    a.as_f64()
        .partial_cmp(&b.as_f64())
        .unwrap_or(Ordering::Equal)
}

/// Bucket start ordered by numeric value
#[derive(Debug, Clone)]
struct BucketKey(Number);

impl PartialEq for BucketKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BucketKey {}

impl PartialOrd for BucketKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BucketKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_numbers(&self.0, &other.0)
    }
}

/// Mutable state for one hero during a file pass
#[derive(Debug, Clone, Default)]
pub struct HeroState {
    hero_name: String,
    networths: BTreeMap<BucketKey, Value>,
    items: Vec<ItemPurchase>,
    positions: Vec<Position>,
    last_sample: Option<NetworthSample>,
}

impl HeroState {
    fn new(hero_name: String) -> Self {
        Self {
            hero_name,
            ..Default::default()
        }
    }

    /// Record networth and position from an interval event
    pub fn record_interval(&mut self, event: &IntervalEvent) {
        // First sample in a bucket wins
        self.networths
            .entry(BucketKey(bucket_time(&event.time)))
            .or_insert_with(|| event.networth.clone());

        self.last_sample = Some(NetworthSample {
            time: event.time.clone(),
            networth: event.networth.clone(),
        });

        self.positions.push(Position {
            x: event.x.clone(),
            y: event.y.clone(),
            time: event.time.clone(),
        });
    }

    pub fn record_purchase(&mut self, event: &PurchaseEvent) {
        self.items.push(ItemPurchase {
            item_name: event.item.clone(),
            purchase_time: event.time.clone(),
        });
    }

    /// Convert into the serialized record
    ///
    /// The last observed sample is appended after the bucketed series even
    /// when its time duplicates the final bucket.
    pub fn finalize(self) -> HeroRecord {
        let mut networths: Vec<NetworthSample> = self
            .networths
            .into_iter()
            .map(|(BucketKey(time), networth)| NetworthSample { time, networth })
            .collect();

        if let Some(last) = self.last_sample {
            networths.push(last);
        }

        HeroRecord {
            hero_name: self.hero_name,
            networths,
            items: self.items,
            positions: self.positions,
        }
    }
}

/// Counters collected while accumulating a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulatorStats {
    pub lines: usize,
    pub intervals: usize,
    pub purchases: usize,
}

impl AccumulatorStats {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} interval records, {} purchases",
            self.lines, self.intervals, self.purchases
        )
    }
}

/// Hero-keyed accumulator for a single log file
#[derive(Debug, Default)]
pub struct HeroAccumulator {
    heroes: IndexMap<String, HeroState>,
    stats: AccumulatorStats,
}

impl HeroAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state for a hero, creating it on first reference
    ///
    /// This is the only place heroes are keyed, so every spelling of a
    /// name goes through normalization.
    pub fn get_or_create(&mut self, hero_name: &str) -> &mut HeroState {
        let key = normalize_hero_name(hero_name);
        self.heroes.entry(key).or_insert_with_key(|key| {
            debug!("New hero: {}", key);
            HeroState::new(key.clone())
        })
    }

    /// Classify a raw line and fold its events in
    ///
    /// # Errors
    /// Any `ParseError` from the classifier. The accumulator is left as it
    /// was before the line.
    pub fn process_line(&mut self, line: &str, line_no: usize) -> Result<(), ParseError> {
        let events = classify_line(line, line_no)?;
        self.stats.lines += 1;
        self.ingest(events);
        Ok(())
    }

    /// Fold already-classified events in
    pub fn ingest(&mut self, events: LineEvents) {
        if let Some(interval) = events.interval {
            self.stats.intervals += 1;
            self.get_or_create(&interval.hero).record_interval(&interval);
        }

        if let Some(purchase) = events.purchase {
            self.stats.purchases += 1;
            self.get_or_create(&purchase.hero).record_purchase(&purchase);
        }
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    pub fn stats(&self) -> AccumulatorStats {
        self.stats
    }

    /// Finish the pass, returning records in first-seen order
    pub fn finalize(self) -> Vec<HeroRecord> {
        self.heroes
            .into_values()
            .map(HeroState::finalize)
            .collect()
    }
}
