use super::ExportError;
use super::ical::{event_window, format_utc_stamp};
use crate::calendar::Event;

pub const GOOGLE_CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// "Add event" link for Google Calendar. Only builds the string; opening it is
/// up to the caller.
pub fn google_calendar_link(event: &Event) -> Result<String, ExportError> {
    deep_link_with_base(GOOGLE_CALENDAR_RENDER_URL, event)
}

pub fn deep_link_with_base(base: &str, event: &Event) -> Result<String, ExportError> {
    let (start, end) = event_window(event)?;
    let dates = format!("{}/{}", format_utc_stamp(start), format_utc_stamp(end));

    Ok(format!(
        "{}?action=TEMPLATE&text={}&dates={}&details={}&location={}",
        base,
        urlencoding::encode(&event.title),
        urlencoding::encode(&dates),
        urlencoding::encode(&event.description),
        urlencoding::encode(&event.location)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn create_test_event(title: &str, description: &str, location: &str) -> Event {
        Event {
            id: "1".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            city: "Berlin".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            link: String::new(),
            event_type: String::new(),
            level: String::new(),
        }
    }

    #[test]
    fn link_contains_encoded_parameters() {
        let event = create_test_event("Morning Vinyasa Flow", "Breath & movement", "Yoga Studio Mitte");

        let link = google_calendar_link(&event).unwrap();

        assert_eq!(
            link,
            "https://calendar.google.com/calendar/render?action=TEMPLATE\
             &text=Morning%20Vinyasa%20Flow\
             &dates=20240120T080000Z%2F20240120T093000Z\
             &details=Breath%20%26%20movement\
             &location=Yoga%20Studio%20Mitte"
        );
    }

    #[test]
    fn reserved_query_characters_cannot_inject_parameters() {
        let event = create_test_event("a&text=b", "x=y?z#", "Düsseldorf");

        let link = google_calendar_link(&event).unwrap();
        let query = link.split_once('?').unwrap().1;

        assert_eq!(query.matches('&').count(), 4);
        assert!(!query.contains('#'));
        assert!(link.contains("&text=a%26text%3Db&"));
        assert!(link.contains("&location=D%C3%BCsseldorf"));
    }

    #[test]
    fn custom_base_is_used() {
        let event = create_test_event("Yoga", "", "");
        let link = deep_link_with_base("https://calendar.example.com/add", &event).unwrap();
        assert!(link.starts_with("https://calendar.example.com/add?action=TEMPLATE&"));
    }

    #[test]
    fn unrepresentable_time_is_rejected() {
        let mut event = create_test_event("Yoga", "", "");
        event.date = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        event.time = NaiveTime::from_hms_opt(23, 30, 0).unwrap();

        assert!(matches!(google_calendar_link(&event), Err(ExportError::InvalidEventTime { .. })));
    }
}
