//! Line classifier for replay parser combat logs.
//!
//! Each log line is one JSON object. A line can describe periodic hero
//! telemetry (an interval record), an item purchase, both, or neither.
//! Every line must decode as JSON whether or not it is relevant. Field
//! values are carried through as written; only a missing field, or an
//! interval time that is not a number, stops the pass.

use crate::utils::config::{
    HERO_NPC_PREFIX, HERO_UNIT_PREFIX, INTERVAL_TYPE, ITEM_PREFIX, PURCHASE_TYPE,
};
use crate::utils::error::ParseError;
use serde_json::{Map, Number, Value};

/// Hero telemetry snapshot taken from an interval record
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalEvent {
    /// Hero name as it appears after the unit class prefix (not normalized)
    pub hero: String,
    /// Must be numeric, it is bucketed
    pub time: Number,
    pub networth: Value,
    pub x: Value,
    pub y: Value,
}

/// Item purchase taken from a combat log record
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseEvent {
    /// Hero name as it appears after the npc prefix (not normalized)
    pub hero: String,
    /// Full item name, prefix included
    pub item: String,
    pub time: Value,
}

/// Facets extracted from a single line
///
/// Both facets are checked independently, so either, both, or neither may
/// be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineEvents {
    pub interval: Option<IntervalEvent>,
    pub purchase: Option<PurchaseEvent>,
}

impl LineEvents {
    pub fn is_empty(&self) -> bool {
        self.interval.is_none() && self.purchase.is_none()
    }
}

/// Classify one raw log line
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `line` - Raw line text (surrounding whitespace is ignored)
/// * `line_no` - 1-based line number, used in error messages
///
/// # Errors
/// * `ParseError::Json` - The line is not valid JSON (blank lines included)
/// * `ParseError::MissingField` - A matching record lacks a required field
/// * `ParseError::InvalidField` - An interval `time` is not a number
pub fn classify_line(line: &str, line_no: usize) -> Result<LineEvents, ParseError> {
    let value: Value = serde_json::from_str(line.trim()).map_err(|source| ParseError::Json {
        line: line_no,
        source,
    })?;

    // Valid JSON that isn't an object can't match anything
    let Some(obj) = value.as_object() else {
        return Ok(LineEvents::default());
    };

    Ok(LineEvents {
        interval: parse_interval(obj, line_no)?,
        purchase: parse_purchase(obj, line_no)?,
    })
}

/// Extract an interval facet if the record is hero telemetry
///
/// **Private** - internal helper for classify_line
fn parse_interval(
    obj: &Map<String, Value>,
    line_no: usize,
) -> Result<Option<IntervalEvent>, ParseError> {
    if str_field(obj, "type") != Some(INTERVAL_TYPE) {
        return Ok(None);
    }
    let Some(hero) = str_field(obj, "unit").and_then(|u| name_after(u, HERO_UNIT_PREFIX)) else {
        return Ok(None);
    };

    Ok(Some(IntervalEvent {
        hero: hero.to_string(),
        time: required_number(obj, line_no, "time")?,
        networth: required(obj, line_no, "networth")?.clone(),
        x: required(obj, line_no, "x")?.clone(),
        y: required(obj, line_no, "y")?.clone(),
    }))
}

/// Extract a purchase facet if the record is an item buy
///
/// **Private** - internal helper for classify_line
fn parse_purchase(
    obj: &Map<String, Value>,
    line_no: usize,
) -> Result<Option<PurchaseEvent>, ParseError> {
    if str_field(obj, "type") != Some(PURCHASE_TYPE) {
        return Ok(None);
    }
    let Some(hero) = str_field(obj, "targetname").and_then(|t| name_after(t, HERO_NPC_PREFIX))
    else {
        return Ok(None);
    };
    let Some(item) = str_field(obj, "valuename").filter(|v| name_after(v, ITEM_PREFIX).is_some())
    else {
        return Ok(None);
    };

    Ok(Some(PurchaseEvent {
        hero: hero.to_string(),
        item: item.to_string(),
        time: required(obj, line_no, "time")?.clone(),
    }))
}

/// Return the name following `prefix`, if it is a non-empty word
///
/// **Private** - internal utility
fn name_after<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .strip_prefix(prefix)
        .filter(|name| !name.is_empty() && name.chars().all(is_word_char))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn str_field<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    obj.get(field).and_then(Value::as_str)
}

/// Look up a required field, failing if it is absent
///
/// **Private** - internal utility
fn required<'a>(
    obj: &'a Map<String, Value>,
    line_no: usize,
    field: &'static str,
) -> Result<&'a Value, ParseError> {
    obj.get(field).ok_or(ParseError::MissingField {
        line: line_no,
        field,
    })
}

fn required_number(
    obj: &Map<String, Value>,
    line_no: usize,
    field: &'static str,
) -> Result<Number, ParseError> {
    match required(obj, line_no, field)? {
        Value::Number(n) => Ok(n.clone()),
        other => Err(ParseError::InvalidField {
            line: line_no,
            field,
            reason: format!("expected number, found {}", other),
        }),
    }
}
