use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

use crate::datetime::parse_event_time;

#[derive(Debug, Clone, Deserialize)]
pub struct EventListing {
    pub entries: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub name: String,
    pub link: String,
    #[serde(deserialize_with = "deserialize_event_time")]
    pub time: NaiveDateTime,
    pub venue: Venue,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(rename = "addressLine")]
    pub address_line: String,
}

// The payload carries `time` either as epoch milliseconds or as a timestamp
// string. Either way it ends up as the event's local calendar fields.
fn deserialize_event_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimeRepr {
        Millis(i64),
        Text(String),
    }

    match TimeRepr::deserialize(deserializer)? {
        TimeRepr::Millis(millis) => DateTime::from_timestamp_millis(millis)
            .map(|parsed| parsed.naive_utc())
            .ok_or_else(|| de::Error::custom(format!("event time out of range: {millis}"))),
        TimeRepr::Text(text) => parse_event_time(&text)
            .ok_or_else(|| de::Error::custom(format!("unrecognized event time: {text}"))),
    }
}
