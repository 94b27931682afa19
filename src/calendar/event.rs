use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EventError {
    #[error("Event {id} has an invalid date/time: '{date}' '{time}'")]
    InvalidEventTime {
        id: String,
        date: String,
        time: String,
    },
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A validated event. Date and time are naive wall-clock values; no timezone is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub link: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub level: String,
}

/// The loosely typed shape handed over by the event-management surface,
/// e.g. `{"date": "2024-01-20", "time": "08:00", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub date: String,
    pub time: String,
    pub link: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub level: String,
}

impl Event {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(EventError::MissingField("id"));
        }

        let invalid = || EventError::InvalidEventTime {
            id: record.id.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
        };

        let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
        let time = parse_wall_clock(record.time.trim()).ok_or_else(invalid)?;

        Ok(Self {
            id: record.id,
            title: record.title,
            description: record.description,
            location: record.location,
            city: record.city,
            date,
            time,
            link: record.link,
            event_type: record.event_type,
            level: record.level,
        })
    }
}

fn parse_wall_clock(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .ok()
}
