use chrono::NaiveDateTime;

use super::event::Event;
use super::store::EventStore;

pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Events starting strictly after `now`, earliest first. Events sharing a start
/// keep their store order.
pub fn upcoming_events(store: &EventStore, now: NaiveDateTime, limit: Option<usize>) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = store
        .iter()
        .filter(|event| event.starts_at() > now)
        .collect();

    upcoming.sort_by_key(|event| event.starts_at());

    if let Some(max) = limit {
        upcoming.truncate(max);
    }

    tracing::debug!("Selected {} upcoming events after {}", upcoming.len(), now);
    upcoming
}
