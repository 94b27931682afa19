//! iCalendar (RFC 5545 shaped) encoding of events.
//!
//! Event times are naive wall-clock values. They are written with a `Z` suffix
//! without any conversion, so the digits in the file are the digits the event
//! was created with.

use chrono::{Datelike, Duration, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike};

use super::ExportError;
use crate::calendar::Event;

/// Events carry no duration of their own; every export spans this long.
pub const EVENT_DURATION_MINUTES: i64 = 90;
pub const DEFAULT_PRODUCT_ID: &str = "YogaFlow Germany";

pub struct IcsEncoder {
    product_id: String,
    stamped_at: Option<NaiveDateTime>,
}

impl IcsEncoder {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            stamped_at: None,
        }
    }

    /// Fixes DTSTAMP instead of using the current time.
    pub fn with_timestamp(mut self, stamped_at: NaiveDateTime) -> Self {
        self.stamped_at = Some(stamped_at);
        self
    }

    pub fn encode_one(&self, event: &Event) -> Result<String, ExportError> {
        self.encode_many([event])
    }

    pub fn encode_many<'a>(&self, events: impl IntoIterator<Item = &'a Event>) -> Result<String, ExportError> {
        let dtstamp = format_utc_stamp(self.stamped_at.unwrap_or_else(|| Utc::now().naive_utc()));

        let vevents = events
            .into_iter()
            .map(|event| self.build_vevent(event, &dtstamp))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Encoded {} events into a calendar document", vevents.len());

        let mut cal = Calendar::new();
        for vevent in vevents {
            cal.push(vevent);
        }
        let cal = cal.done();

        Ok(self.finish(&cal.to_string()))
    }

    fn build_vevent(&self, event: &Event, dtstamp: &str) -> Result<icalendar::Event, ExportError> {
        let (start, end) = event_window(event)?;

        let mut vevent = icalendar::Event::new();
        vevent.uid(&format!("{}@{}", event.id, uid_domain(&self.product_id)));
        vevent.add_property("DTSTAMP", dtstamp);
        vevent.add_property("DTSTART", format_utc_stamp(start));
        vevent.add_property("DTEND", format_utc_stamp(end));
        vevent.summary(&normalize_newlines(&event.title));
        vevent.description(&normalize_newlines(&event.description));
        vevent.location(&normalize_newlines(&event.location));

        Ok(vevent.done())
    }

    /// The crate writes its own PRODID and a default CALSCALE; swap in ours and drop the latter.
    fn finish(&self, ics: &str) -> String {
        let mut result = String::with_capacity(ics.len());

        for line in ics.lines() {
            if line.starts_with("PRODID:") {
                result.push_str(&format!("PRODID:-//{}//EN\r\n", self.product_id));
                continue;
            }

            if line == "CALSCALE:GREGORIAN" {
                continue;
            }

            result.push_str(line);
            result.push_str("\r\n");
        }

        result
    }
}

impl Default for IcsEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_ID)
    }
}

pub fn encode_one(event: &Event) -> Result<String, ExportError> {
    IcsEncoder::default().encode_one(event)
}

pub fn encode_many<'a>(events: impl IntoIterator<Item = &'a Event>) -> Result<String, ExportError> {
    IcsEncoder::default().encode_many(events)
}

/// Start and end of an exported event. Both must fall in a four-digit year so
/// the basic-format stamp stays well formed.
pub fn event_window(event: &Event) -> Result<(NaiveDateTime, NaiveDateTime), ExportError> {
    let invalid = || ExportError::InvalidEventTime { id: event.id.clone() };

    let start = event.starts_at();
    let end = start
        .checked_add_signed(Duration::minutes(EVENT_DURATION_MINUTES))
        .ok_or_else(invalid)?;

    if !(0..=9999).contains(&start.year()) || !(0..=9999).contains(&end.year()) {
        return Err(invalid());
    }

    Ok((start, end))
}

pub fn format_utc_stamp(instant: NaiveDateTime) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

// The crate escapes `\n`; bare CR and CRLF are folded into it first.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn uid_domain(product_id: &str) -> String {
    product_id
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
