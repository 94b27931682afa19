pub mod event;
pub mod store;
pub mod day_index;
pub mod upcoming;
pub mod sample_events;

pub use event::{Event, EventError, EventRecord};
pub use store::{EventStore, StoreError};
pub use day_index::{CappedEvents, DEFAULT_DAY_CAP, events_on, events_today};
pub use upcoming::{DEFAULT_UPCOMING_LIMIT, upcoming_events};
