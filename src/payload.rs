//! Tolerant parsing of the per-row `umls_json_info` blob and the random
//! caption draw.
//!
//! The blob is CSV-embedded JSON that has been through at least one
//! serialization round trip, so a strict parse is tried first and one
//! targeted repair (collapsing doubled double-quotes) second. Anything
//! still unparsable is treated as "no payload" and never reaches the
//! caller as an error.

use std::borrow::Cow;
use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

/// Parsed form of one `umls_json_info` cell.
#[derive(Debug, Deserialize)]
pub struct UmlsPayload {
    #[serde(default)]
    caption: Option<Value>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

impl UmlsPayload {
    /// The caption list, if it is present, an array, and non-empty.
    pub fn captions(&self) -> Option<&[Value]> {
        match &self.caption {
            Some(Value::Array(items)) if !items.is_empty() => Some(items),
            _ => None,
        }
    }
}

fn as_is(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

// Doubled quotes occasionally survive CSV parsing when the JSON was
// quote-escaped twice upstream; collapsing them recovers those rows.
fn undouble_quotes(text: &str) -> Cow<'_, str> {
    Cow::Owned(text.replace("\"\"", "\""))
}

// Tried in order, first successful parse wins. New corruption patterns
// get appended here rather than nested into the parse call.
const PARSE_STRATEGIES: [for<'a> fn(&'a str) -> Cow<'a, str>; 2] = [as_is, undouble_quotes];

/// Parse one raw cell into a [`UmlsPayload`], or `None` if the cell is
/// empty (the CSV null) or unparsable even after repair.
pub fn parse_payload(raw: &str) -> Option<UmlsPayload> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    for strategy in PARSE_STRATEGIES {
        if let Ok(payload) = serde_json::from_str::<UmlsPayload>(&strategy(text)) {
            return Some(payload);
        }
    }
    None
}

/// Pick one caption uniformly at random from the cell's payload.
///
/// Exactly one draw is taken from `rng` when the payload carries a
/// non-empty `caption` list; rows without a usable payload leave the
/// generator untouched, which is what makes a seeded run reproducible
/// for a fixed input.
pub fn pick_sentence<R: Rng>(raw: &str, rng: &mut R) -> Option<String> {
    let payload = parse_payload(raw)?;
    let captions = payload.captions()?;
    let choice = captions.choose(rng)?;
    match choice {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
