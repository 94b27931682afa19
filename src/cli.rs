use std::iter::Peekable;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use yogaflow_cal::{
    calendar::{Event, EventStore, sample_events::sample_events, upcoming_events},
    export::{self, ExportArtifact},
    storage::config::Config,
    ui::month_view::MonthLayout,
};

pub const USAGE: &str = "Usage: yogaflow-cal [--events PATH | --sample] \
[--month YYYY/MM | --upcoming [N] | --export ID [DIR] | --export-all [DIR] | --link ID]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Overview,
    Month(NaiveDate),
    Upcoming(Option<usize>),
    Export { id: String, dir: PathBuf },
    ExportAll { dir: PathBuf },
    Link(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventSource {
    Configured,
    Sample,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub mode: CliMode,
    pub source: EventSource,
}

pub fn parse_cli_mode(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut mode = CliMode::Overview;
    let mut source = EventSource::Configured;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => source = EventSource::Sample,
            "--events" => {
                let path = args.next().ok_or("--events requires a path")?;
                source = EventSource::File(PathBuf::from(path));
            }
            "--month" => {
                let value = args.next().ok_or("--month requires YYYY/MM")?;
                let date = NaiveDate::parse_from_str(&format!("{}/01", value), "%Y/%m/%d")
                    .map_err(|_| format!("Invalid month '{}'. Use YYYY/MM.", value))?;
                mode = CliMode::Month(date);
            }
            "--upcoming" => {
                let limit = optional_value(&mut args)
                    .map(|n| n.parse::<usize>().map_err(|_| format!("Invalid count '{}'", n)))
                    .transpose()?;
                mode = CliMode::Upcoming(limit);
            }
            "--export" => {
                let id = args.next().ok_or("--export requires an event id")?;
                let dir = optional_value(&mut args).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                mode = CliMode::Export { id, dir };
            }
            "--export-all" => {
                let dir = optional_value(&mut args).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                mode = CliMode::ExportAll { dir };
            }
            "--link" => {
                let id = args.next().ok_or("--link requires an event id")?;
                mode = CliMode::Link(id);
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliArgs { mode, source })
}

fn optional_value<I: Iterator<Item = String>>(args: &mut Peekable<I>) -> Option<String> {
    args.next_if(|next| !next.starts_with("--"))
}

pub fn load_events(source: &EventSource, config: &Config) -> Result<EventStore> {
    match source {
        EventSource::Sample => Ok(sample_events()),
        EventSource::File(path) => load_from(path),
        EventSource::Configured => match &config.calendar.events_file {
            Some(path) => load_from(path),
            None => {
                tracing::info!("No events file configured, using sample events");
                Ok(sample_events())
            }
        },
    }
}

fn load_from(path: &Path) -> Result<EventStore> {
    EventStore::load_json(path).with_context(|| format!("Failed to load events from {}", path.display()))
}

pub fn run(args: CliArgs, config: &Config) -> Result<()> {
    let store = load_events(&args.source, config)?;
    let now = Local::now().naive_local();

    match args.mode {
        CliMode::Overview => {
            println!("{}", format_month_grid(&MonthLayout::new(now.date()).with_events(&store), now.date(), config));
            let upcoming = upcoming_events(&store, now, Some(config.calendar.upcoming_limit));
            println!("{}", format_upcoming(&upcoming));
        }
        CliMode::Month(date) => {
            println!("{}", format_month_grid(&MonthLayout::new(date).with_events(&store), now.date(), config));
        }
        CliMode::Upcoming(limit) => {
            let limit = limit.unwrap_or(config.calendar.upcoming_limit);
            println!("{}", format_upcoming(&upcoming_events(&store, now, Some(limit))));
        }
        CliMode::Export { id, dir } => {
            let event = find_event(&store, &id)?;
            let artifact = export::export_event(event, &config.export)?;
            let path = write_artifact(&artifact, &dir)?;
            println!("Wrote {}", path.display());
        }
        CliMode::ExportAll { dir } => {
            let artifact = export::export_calendar(&store, &config.export)?;
            let path = write_artifact(&artifact, &dir)?;
            println!("Wrote {}", path.display());
        }
        CliMode::Link(id) => {
            let event = find_event(&store, &id)?;
            println!("{}", export::deep_link_with_base(&config.export.deep_link_base, event)?);
        }
    }

    Ok(())
}

fn find_event<'a>(store: &'a EventStore, id: &str) -> Result<&'a Event> {
    store.get(id).with_context(|| format!("No event with id '{}'", id))
}

fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.body).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} ({})", path.display(), artifact.mime_type);
    Ok(path)
}

pub fn format_month_grid(layout: &MonthLayout, today: NaiveDate, config: &Config) -> String {
    let mut lines = vec![layout.title(), " Sun  Mon  Tue  Wed  Thu  Fri  Sat".to_string()];

    for week in layout.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell.day_of_month() {
                None => "     ".to_string(),
                Some(day) => {
                    let marker = if cell.is_today(today) {
                        '*'
                    } else if cell.events.is_empty() {
                        ' '
                    } else {
                        '•'
                    };
                    format!(" {:>2}{} ", day, marker)
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let busy_days = layout.cells.iter().filter(|c| !c.events.is_empty());
    for cell in busy_days {
        let Some(date) = cell.date else { continue };
        let capped = cell.capped(config.calendar.day_event_cap);
        lines.push(String::new());
        lines.push(date.format("%a %d").to_string());
        for event in &capped.visible {
            lines.push(format!("  {} {}", event.time.format("%H:%M"), event.title));
        }
        if let Some(more) = capped.overflow_label() {
            lines.push(format!("  {}", more));
        }
    }

    lines.join("\n")
}

pub fn format_upcoming(events: &[&Event]) -> String {
    let mut lines = vec!["Upcoming Events".to_string(), String::new()];

    if events.is_empty() {
        lines.push("No upcoming events.".to_string());
    } else {
        for event in events {
            lines.push(format!(
                "- {} {}  {} ({})",
                event.date.format("%Y-%m-%d"),
                event.time.format("%H:%M"),
                event.title,
                event.city
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn no_arguments_selects_overview() {
        let parsed = parse_cli_mode(args(&[])).unwrap();
        assert_eq!(parsed.mode, CliMode::Overview);
        assert_eq!(parsed.source, EventSource::Configured);
    }

    #[test]
    fn month_argument_is_parsed() {
        let parsed = parse_cli_mode(args(&["--month", "2024/02"])).unwrap();
        assert_eq!(parsed.mode, CliMode::Month(date(2024, 2, 1)));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(parse_cli_mode(args(&["--month", "2024/13"])).is_err());
    }

    #[test]
    fn upcoming_count_is_optional() {
        assert_eq!(parse_cli_mode(args(&["--upcoming"])).unwrap().mode, CliMode::Upcoming(None));
        assert_eq!(
            parse_cli_mode(args(&["--upcoming", "3", "--sample"])).unwrap(),
            CliArgs { mode: CliMode::Upcoming(Some(3)), source: EventSource::Sample }
        );
    }

    #[test]
    fn export_defaults_to_current_directory() {
        let parsed = parse_cli_mode(args(&["--export", "1"])).unwrap();
        assert_eq!(parsed.mode, CliMode::Export { id: "1".to_string(), dir: PathBuf::from(".") });
    }

    #[test]
    fn export_all_accepts_directory() {
        let parsed = parse_cli_mode(args(&["--events", "events.json", "--export-all", "out"])).unwrap();
        assert_eq!(parsed.mode, CliMode::ExportAll { dir: PathBuf::from("out") });
        assert_eq!(parsed.source, EventSource::File(PathBuf::from("events.json")));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(parse_cli_mode(args(&["--bogus"])).is_err());
    }

    #[test]
    fn month_grid_marks_today_and_busy_days() {
        let store = sample_events();
        let layout = MonthLayout::new(date(2024, 1, 1)).with_events(&store);

        let text = format_month_grid(&layout, date(2024, 1, 22), &Config::default());

        assert!(text.starts_with("January 2024\n"));
        assert!(text.contains(" 20•"));
        assert!(text.contains(" 22*"));
        assert!(text.contains("  08:00 Morning Vinyasa Flow"));
    }

    #[test]
    fn upcoming_list_reports_empty_state() {
        assert!(format_upcoming(&[]).ends_with("No upcoming events."));
    }

    #[test]
    fn export_all_writes_bulk_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = CliArgs {
            mode: CliMode::ExportAll { dir: dir.path().to_path_buf() },
            source: EventSource::Sample,
        };

        run(cli, &Config::default()).unwrap();

        let body = std::fs::read_to_string(dir.path().join("yoga-events-calendar.ics")).unwrap();
        assert!(body.starts_with("BEGIN:VCALENDAR"));
    }

    #[test]
    fn export_of_unknown_event_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = CliArgs {
            mode: CliMode::Export { id: "missing".to_string(), dir: dir.path().to_path_buf() },
            source: EventSource::Sample,
        };

        assert!(run(cli, &Config::default()).is_err());
    }
}
