use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use super::event::{Event, EventError, EventRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate event id: {0}")]
    DuplicateId(String),
    #[error("Failed to read events file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse events: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] EventError),
}

/// Ordered, append-only collection of events. Insertion order is the order every
/// query hands events back in.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    ids: HashSet<String>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for event in events {
            store.push(event)?;
        }
        Ok(store)
    }

    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let records: Vec<EventRecord> = serde_json::from_str(content)?;
        let mut store = Self::new();

        for record in records {
            let event = Event::try_from(record).inspect_err(|e| {
                tracing::warn!("Rejected event record: {}", e);
            })?;
            store.push(event)?;
        }

        Ok(store)
    }

    pub fn load_json(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        tracing::info!("Loaded {} events from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn push(&mut self, event: Event) -> Result<(), StoreError> {
        if !self.ids.insert(event.id.clone()) {
            return Err(StoreError::DuplicateId(event.id));
        }
        self.events.push(event);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
