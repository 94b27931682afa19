pub mod ical;
pub mod deep_link;

use thiserror::Error;

use crate::calendar::Event;
use crate::storage::config::ExportConfig;

pub use deep_link::{deep_link_with_base, google_calendar_link};
pub use ical::{IcsEncoder, encode_many, encode_one};

pub const ICS_MIME_TYPE: &str = "text/calendar";

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("Event {id} has a start or end time that cannot be exported")]
    InvalidEventTime { id: String },
    #[error("No events selected for export")]
    EmptySelection,
}

/// Bytes ready to hand to a "save as" / "open with" mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub body: String,
}

pub fn export_event(event: &Event, config: &ExportConfig) -> Result<ExportArtifact, ExportError> {
    let body = IcsEncoder::new(&config.product_id).encode_one(event)?;
    tracing::info!("Exported event {} ({})", event.id, event.title);

    Ok(ExportArtifact {
        filename: suggested_filename(&event.title),
        mime_type: ICS_MIME_TYPE,
        body,
    })
}

pub fn export_calendar<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    config: &ExportConfig,
) -> Result<ExportArtifact, ExportError> {
    let events: Vec<&Event> = events.into_iter().collect();
    if events.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let body = IcsEncoder::new(&config.product_id).encode_many(events.iter().copied())?;
    tracing::info!("Exported {} events to {}", events.len(), config.calendar_filename);

    Ok(ExportArtifact {
        filename: config.calendar_filename.clone(),
        mime_type: ICS_MIME_TYPE,
        body,
    })
}

/// `Morning Vinyasa Flow` becomes `Morning_Vinyasa_Flow.ics`. Path separators
/// are replaced too so the name stays a single path component.
pub fn suggested_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();

    if stem.is_empty() {
        "event.ics".to_string()
    } else {
        format!("{}.ics", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::sample_events::sample_events;

    #[test]
    fn filename_replaces_whitespace_with_underscores() {
        assert_eq!(suggested_filename("Morning Vinyasa Flow"), "Morning_Vinyasa_Flow.ics");
        assert_eq!(suggested_filename("Yin\tYoga  Night"), "Yin_Yoga__Night.ics");
    }

    #[test]
    fn filename_never_contains_path_separators() {
        assert_eq!(suggested_filename("Yoga/Pilates"), "Yoga_Pilates.ics");
        assert_eq!(suggested_filename(""), "event.ics");
    }

    #[test]
    fn single_event_artifact_is_text_calendar() {
        let store = sample_events();
        let event = store.get("1").unwrap();

        let artifact = export_event(event, &ExportConfig::default()).unwrap();

        assert_eq!(artifact.filename, "Morning_Vinyasa_Flow.ics");
        assert_eq!(artifact.mime_type, "text/calendar");
        assert_eq!(artifact.body.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn calendar_artifact_contains_every_event() {
        let store = sample_events();

        let artifact = export_calendar(&store, &ExportConfig::default()).unwrap();

        assert_eq!(artifact.filename, "yoga-events-calendar.ics");
        assert_eq!(artifact.body.matches("BEGIN:VEVENT").count(), store.len());
    }

    #[test]
    fn calendar_artifact_uses_configured_product_id() {
        let store = sample_events();
        let config = ExportConfig {
            product_id: "Acme Studio".to_string(),
            ..ExportConfig::default()
        };

        let artifact = export_calendar(&store, &config).unwrap();

        assert!(artifact.body.contains("PRODID:-//Acme Studio//EN"));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let result = export_calendar(std::iter::empty::<&Event>(), &ExportConfig::default());
        assert_eq!(result, Err(ExportError::EmptySelection));
    }
}
