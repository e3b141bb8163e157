// Appointment is the only entity of the grooming log.
//
// Storage shape
// - Serialized with camelCase keys: id, date, clientName, petName, price, comment.
// - petName and comment may be missing in stored data and default to "".
//
// Dates
// - `date` is kept as the wall-clock text the user entered so a load/save cycle is
//   lossless. Comparisons go through `starts_at`, which returns None when the text
//   cannot be read as a date.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", WALL_CLOCK_FORMAT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub date: String,
    pub client_name: String,
    #[serde(default)]
    pub pet_name: String,
    pub price: f64,
    #[serde(default)]
    pub comment: String,
}

impl Appointment {
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        parse_wall_clock(&self.date)
    }

    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.starts_at().is_some_and(|starts_at| starts_at >= now)
    }
}

/// Reads an ISO-8601 date as local wall-clock time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]`, a bare `YYYY-MM-DD` (midnight) and RFC 3339
/// with an offset, which is converted to the local time zone.
pub fn parse_wall_clock(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|date| date.with_timezone(&Local).naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

pub fn format_wall_clock(date: NaiveDateTime) -> String {
    date.format(WALL_CLOCK_FORMAT).to_string()
}
