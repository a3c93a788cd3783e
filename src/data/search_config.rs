use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::utils::date::{format_query_date, lenient_date, parse_calendar_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn id(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    pub fn hours(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "6AM - 12PM",
            TimeOfDay::Afternoon => "12PM - 6PM",
            TimeOfDay::Evening => "6PM - 10PM",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "fa-sun",
            TimeOfDay::Afternoon => "fa-cloud",
            TimeOfDay::Evening => "fa-moon",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.id() == id)
    }
}

/// Number of back-to-back booking slots to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsecutiveSlots {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[default]
    #[serde(rename = "4")]
    Four,
}

impl ConsecutiveSlots {
    pub const ALL: [ConsecutiveSlots; 3] = [
        ConsecutiveSlots::Two,
        ConsecutiveSlots::Three,
        ConsecutiveSlots::Four,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsecutiveSlots::Two => "2",
            ConsecutiveSlots::Three => "3",
            ConsecutiveSlots::Four => "4",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|count| count.as_str() == value)
    }
}

impl fmt::Display for ConsecutiveSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive calendar range with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    #[serde(with = "lenient_date")]
    from: NaiveDate,
    #[serde(with = "lenient_date")]
    to: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    #[serde(with = "lenient_date")]
    from: NaiveDate,
    #[serde(with = "lenient_date")]
    to: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ConfigError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.from, raw.to)
    }
}

impl DateRange {
    pub const DEFAULT_SPAN_DAYS: u64 = 6;

    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ConfigError> {
        if from > to {
            return Err(ConfigError::ReversedRange {
                from: format_query_date(from),
                to: format_query_date(to),
            });
        }
        Ok(Self { from, to })
    }

    /// Builds a range from two picks in either order.
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    /// Today through six days from now.
    pub fn default_for(today: NaiveDate) -> Self {
        let to = today
            .checked_add_days(Days::new(Self::DEFAULT_SPAN_DAYS))
            .unwrap_or(today);
        Self { from: today, to }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default, deserialize_with = "distinct_time_slots")]
    pub selected_time_slots: Vec<TimeOfDay>,
    pub date_range: DateRange,
    #[serde(default)]
    pub consecutive_slots: ConsecutiveSlots,
    #[serde(default)]
    pub all_locations: bool,
}

/// Selected slots form a set; repeats in stored or echoed payloads collapse to
/// their first occurrence.
fn distinct_time_slots<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<TimeOfDay>, D::Error> {
    let mut slots = Vec::new();
    for slot in Vec::<TimeOfDay>::deserialize(deserializer)? {
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }
    Ok(slots)
}

impl SearchConfig {
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            selected_time_slots: Vec::new(),
            date_range: DateRange::default_for(today),
            consecutive_slots: ConsecutiveSlots::default(),
            all_locations: false,
        }
    }

    /// Flips membership of `slot`. Newly selected slots go to the end.
    pub fn toggle_time_slot(&mut self, slot: TimeOfDay) {
        if let Some(pos) = self.selected_time_slots.iter().position(|s| *s == slot) {
            self.selected_time_slots.remove(pos);
        } else {
            self.selected_time_slots.push(slot);
        }
    }

    pub fn is_selected(&self, slot: TimeOfDay) -> bool {
        self.selected_time_slots.contains(&slot)
    }

    pub fn has_time_slots(&self) -> bool {
        !self.selected_time_slots.is_empty()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let time_slots = self
            .selected_time_slots
            .iter()
            .map(|slot| slot.id())
            .collect::<Vec<_>>()
            .join(",");

        vec![
            ("from", format_query_date(self.date_range.from())),
            ("to", format_query_date(self.date_range.to())),
            ("timeSlots", time_slots),
            ("consecutiveSlots", self.consecutive_slots.as_str().to_string()),
            ("allLocations", self.all_locations.to_string()),
        ]
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parses already-decoded query parameters back into a config.
    pub fn from_query<'a>(
        lookup: impl Fn(&'static str) -> Option<&'a str>,
    ) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingParameter(key));
        let date = |key: &'static str| {
            let raw = required(key)?;
            parse_calendar_date(raw).ok_or_else(|| ConfigError::InvalidDate(raw.to_string()))
        };

        let date_range = DateRange::new(date("from")?, date("to")?)?;

        let mut selected_time_slots = Vec::new();
        for id in required("timeSlots")?.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let slot = TimeOfDay::parse(id).ok_or_else(|| ConfigError::UnknownTimeSlot(id.to_string()))?;
            if !selected_time_slots.contains(&slot) {
                selected_time_slots.push(slot);
            }
        }
        if selected_time_slots.is_empty() {
            return Err(ConfigError::NoTimeSlots);
        }

        let consecutive_raw = required("consecutiveSlots")?;
        let consecutive_slots = ConsecutiveSlots::parse(consecutive_raw)
            .ok_or_else(|| ConfigError::InvalidConsecutiveSlots(consecutive_raw.to_string()))?;

        let all_locations = match required("allLocations")? {
            "true" => true,
            "false" => false,
            other => return Err(ConfigError::InvalidAllLocations(other.to_string())),
        };

        Ok(Self {
            selected_time_slots,
            date_range,
            consecutive_slots,
            all_locations,
        })
    }

    /// One-line description of the search, e.g.
    /// `Oct 16 - Oct 22 · Morning, Evening · 2 back-to-back · My favourites`.
    pub fn summary(&self) -> String {
        let dates = format!(
            "{} - {}",
            self.date_range.from().format("%b %-d"),
            self.date_range.to().format("%b %-d")
        );
        let slots = if self.selected_time_slots.is_empty() {
            "Any time".to_string()
        } else {
            self.selected_time_slots
                .iter()
                .map(|slot| slot.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let scope = if self.all_locations { "All locations" } else { "My favourites" };

        format!("{} · {} · {} back-to-back · {}", dates, slots, self.consecutive_slots, scope)
    }
}
