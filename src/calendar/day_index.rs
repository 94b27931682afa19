use chrono::NaiveDate;

use super::event::Event;
use super::store::EventStore;

pub const DEFAULT_DAY_CAP: usize = 3;

/// Events dated on `date`, in store order.
pub fn events_on(store: &EventStore, date: NaiveDate) -> Vec<&Event> {
    store.iter().filter(|event| event.occurs_on(date)).collect()
}

pub fn events_today(store: &EventStore, today: NaiveDate) -> Vec<&Event> {
    events_on(store, today)
}

/// A day's events cut down to a display cap, with the number left out.
#[derive(Debug, Clone, PartialEq)]
pub struct CappedEvents<'a> {
    pub visible: Vec<&'a Event>,
    pub overflow: usize,
}

impl<'a> CappedEvents<'a> {
    pub fn new(events: &[&'a Event], cap: usize) -> Self {
        let shown = events.len().min(cap);
        Self {
            visible: events[..shown].to_vec(),
            overflow: events.len() - shown,
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}
