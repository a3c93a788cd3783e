use chrono::NaiveDate;
use leptos::logging::warn;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::search_config::SearchConfig;
use crate::utils::date::{format_slot_date, lenient_date};

/// Alternative slots shown per card before collapsing into "+N more".
pub const VISIBLE_OTHER_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherSlot {
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    pub distance: f64,
    pub price: f64,
    #[serde(default)]
    pub organization: String,
    #[serde(with = "lenient_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub other_slots: Vec<OtherSlot>,
}

impl BookingSlot {
    pub fn time_window(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn date_label(&self) -> String {
        format_slot_date(self.date)
    }

    pub fn distance_label(&self) -> String {
        format!("{:.1} miles away", self.distance.max(0.0))
    }

    pub fn price_label(&self) -> String {
        format!("£{:.2}", self.price.max(0.0))
    }

    pub fn visible_other_slots(&self) -> &[OtherSlot] {
        let end = self.other_slots.len().min(VISIBLE_OTHER_SLOTS);
        &self.other_slots[..end]
    }

    pub fn hidden_other_slots(&self) -> usize {
        self.other_slots.len().saturating_sub(VISIBLE_OTHER_SLOTS)
    }
}

/// A stored search response. Slots keep the order the endpoint ranked them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(deserialize_with = "string_or_number")]
    pub result_id: String,
    #[serde(default, deserialize_with = "echoed_config")]
    pub config: Option<SearchConfig>,
    #[serde(default, deserialize_with = "ranked_slots")]
    pub slots: Vec<BookingSlot>,
}

/// An echoed config the form cannot use is dropped; the slots still render.
fn echoed_config<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SearchConfig>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => match serde_json::from_value(raw) {
            Ok(config) => Ok(Some(config)),
            Err(e) => {
                warn!("Ignoring unreadable search config in results: {}", e);
                Ok(None)
            }
        },
    }
}

/// Skips malformed slots and keeps the rest in the order they were ranked.
fn ranked_slots<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BookingSlot>, D::Error> {
    let raw = Vec::<Value>::deserialize(deserializer)?;
    let mut slots = Vec::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        match serde_json::from_value(entry) {
            Ok(slot) => slots.push(slot),
            Err(e) => warn!("Skipping malformed slot {}: {}", index, e),
        }
    }
    Ok(slots)
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("invalid resultId {}", other))),
    }
}
