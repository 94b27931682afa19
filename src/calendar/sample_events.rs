use super::event::{Event, EventRecord};
use super::store::EventStore;

struct SampleEvent {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    location: &'static str,
    city: &'static str,
    date: &'static str,
    time: &'static str,
    link: &'static str,
    event_type: &'static str,
    level: &'static str,
}

impl SampleEvent {
    fn to_record(&self) -> EventRecord {
        EventRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            location: self.location.to_string(),
            city: self.city.to_string(),
            date: self.date.to_string(),
            time: self.time.to_string(),
            link: self.link.to_string(),
            event_type: self.event_type.to_string(),
            level: self.level.to_string(),
        }
    }
}

const SAMPLES: &[SampleEvent] = &[
    SampleEvent {
        id: "1",
        title: "Morning Vinyasa Flow",
        description: "Start your day with energizing yoga flow combining breath and movement in a heated studio environment.",
        location: "Yoga Studio Mitte",
        city: "Berlin",
        date: "2024-01-20",
        time: "08:00",
        link: "https://eventbrite.com/yoga-berlin-1",
        event_type: "Vinyasa",
        level: "All Levels",
    },
    SampleEvent {
        id: "2",
        title: "Sustainable Yoga & Mindfulness",
        description: "Connect with nature through eco-conscious yoga practice using sustainable props and organic materials.",
        location: "EcoYoga Center",
        city: "Munich",
        date: "2024-01-20",
        time: "10:30",
        link: "https://meetup.com/sustainable-yoga-munich",
        event_type: "Hatha",
        level: "Beginner",
    },
    SampleEvent {
        id: "3",
        title: "Restorative Yoga Workshop",
        description: "Deep relaxation and healing through supported poses and gentle stretches for stress relief.",
        location: "Wellness Hub Hamburg",
        city: "Hamburg",
        date: "2024-01-21",
        time: "14:00",
        link: "https://eventbrite.com/restorative-hamburg",
        event_type: "Restorative",
        level: "All Levels",
    },
    SampleEvent {
        id: "4",
        title: "Power Yoga Challenge",
        description: "Intensive yoga session focusing on strength building and dynamic movements for experienced practitioners.",
        location: "FitYoga Cologne",
        city: "Cologne",
        date: "2024-01-22",
        time: "19:00",
        link: "https://studio-cologne.com/power-yoga",
        event_type: "Power",
        level: "Advanced",
    },
    SampleEvent {
        id: "5",
        title: "Yin Yoga & Meditation",
        description: "Slow-paced practice with long-held poses and guided meditation for deep inner peace.",
        location: "Zen Studio Frankfurt",
        city: "Frankfurt",
        date: "2024-01-23",
        time: "18:30",
        link: "https://meetup.com/yin-yoga-frankfurt",
        event_type: "Yin",
        level: "All Levels",
    },
    SampleEvent {
        id: "6",
        title: "Prenatal Yoga Class",
        description: "Gentle yoga practice designed specifically for expecting mothers with safety modifications.",
        location: "Mother & Baby Center",
        city: "Stuttgart",
        date: "2024-01-24",
        time: "16:00",
        link: "https://prenatal-yoga-stuttgart.de",
        event_type: "Prenatal",
        level: "All Levels",
    },
    SampleEvent {
        id: "7",
        title: "Hot Yoga Session",
        description: "Traditional 26-pose Bikram sequence in a heated room for detoxification and flexibility.",
        location: "Hot Yoga Düsseldorf",
        city: "Düsseldorf",
        date: "2024-01-25",
        time: "07:30",
        link: "https://hotyoga-duesseldorf.com",
        event_type: "Hot",
        level: "Intermediate",
    },
    SampleEvent {
        id: "8",
        title: "Aerial Yoga Adventure",
        description: "Unique yoga experience using silk hammocks to deepen poses and add playful elements.",
        location: "Aerial Arts Studio",
        city: "Dortmund",
        date: "2024-01-26",
        time: "12:00",
        link: "https://aerial-yoga-dortmund.com",
        event_type: "Aerial",
        level: "All Levels",
    },
    SampleEvent {
        id: "9",
        title: "Yoga & Sustainability Workshop",
        description: "Learn about eco-friendly yoga practices while enjoying a mindful flow session.",
        location: "Green Yoga Essen",
        city: "Essen",
        date: "2024-01-27",
        time: "15:00",
        link: "https://greenyoga-essen.de",
        event_type: "Workshop",
        level: "All Levels",
    },
    SampleEvent {
        id: "10",
        title: "Ashtanga Primary Series",
        description: "Traditional Ashtanga yoga primary series with proper alignment and breathing techniques.",
        location: "Ashtanga Center Leipzig",
        city: "Leipzig",
        date: "2024-01-28",
        time: "09:00",
        link: "https://ashtanga-leipzig.com",
        event_type: "Ashtanga",
        level: "Intermediate",
    },
    SampleEvent {
        id: "11",
        title: "Family Yoga Fun",
        description: "Yoga class designed for parents and children to practice together with games and poses.",
        location: "Community Center Bremen",
        city: "Bremen",
        date: "2024-01-29",
        time: "11:00",
        link: "https://family-yoga-bremen.de",
        event_type: "Family",
        level: "All Levels",
    },
    SampleEvent {
        id: "12",
        title: "Kundalini Awakening",
        description: "Spiritual yoga practice combining mantras, breathwork, and meditation for energy awakening.",
        location: "Spiritual Center Dresden",
        city: "Dresden",
        date: "2024-01-30",
        time: "20:00",
        link: "https://kundalini-dresden.com",
        event_type: "Kundalini",
        level: "All Levels",
    },
    SampleEvent {
        id: "13",
        title: "Outdoor Yoga in the Park",
        description: "Weather permitting outdoor yoga session in beautiful park setting with fresh air and nature.",
        location: "Tiergarten Park",
        city: "Berlin",
        date: "2024-01-31",
        time: "10:00",
        link: "https://outdoor-yoga-berlin.com",
        event_type: "Outdoor",
        level: "All Levels",
    },
    SampleEvent {
        id: "14",
        title: "Chair Yoga for Seniors",
        description: "Gentle yoga practice adapted for seniors using chairs for support and accessibility.",
        location: "Senior Center Munich",
        city: "Munich",
        date: "2024-02-01",
        time: "14:30",
        link: "https://senior-yoga-munich.de",
        event_type: "Chair",
        level: "Beginner",
    },
    SampleEvent {
        id: "15",
        title: "Yoga & Sound Bath",
        description: "Combine gentle yoga with healing sound frequencies from singing bowls and gongs.",
        location: "Sound Healing Studio",
        city: "Hamburg",
        date: "2024-02-02",
        time: "19:30",
        link: "https://soundbath-hamburg.com",
        event_type: "Sound",
        level: "All Levels",
    },
];

pub fn sample_events() -> EventStore {
    let mut store = EventStore::new();

    for sample in SAMPLES {
        let event = match Event::try_from(sample.to_record()) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping sample event {}: {}", sample.id, e);
                continue;
            }
        };

        if let Err(e) = store.push(event) {
            tracing::warn!("Skipping sample event: {}", e);
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn every_sample_is_valid() {
        assert_eq!(SAMPLES.len(), 15);
        assert_eq!(sample_events().len(), SAMPLES.len());
    }

    #[test]
    fn samples_keep_their_declared_ids() {
        let store = sample_events();
        assert_eq!(store.as_slice()[0].title, "Morning Vinyasa Flow");

        let prenatal = store.get("6").unwrap();
        assert_eq!(prenatal.title, "Prenatal Yoga Class");
        assert_eq!(prenatal.date, NaiveDate::from_ymd_opt(2024, 1, 24).unwrap());

        let seniors = store.get("14").unwrap();
        assert_eq!(seniors.title, "Chair Yoga for Seniors");
        assert_eq!(seniors.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        assert_eq!(store.get("15").map(|e| e.city.as_str()), Some("Hamburg"));
    }
}
