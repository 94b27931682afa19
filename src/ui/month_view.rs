use chrono::{Datelike, Months, NaiveDate};

use crate::calendar::day_index::{self, CappedEvents};
use crate::calendar::{Event, EventStore};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout<'a> {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell<'a>>,
}

/// One grid position. `date` is `None` for the padding cells ahead of day 1.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: Option<NaiveDate>,
    pub events: Vec<&'a Event>,
}

impl<'a> DayCell<'a> {
    pub fn padding() -> Self {
        Self { date: None, events: Vec::new() }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { date: Some(date), events: Vec::new() }
    }

    pub fn day_of_month(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    /// Evaluated against whatever `today` the caller passes; nothing is cached.
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == Some(today)
    }

    pub fn capped(&self, cap: usize) -> CappedEvents<'a> {
        CappedEvents::new(&self.events, cap)
    }
}

impl<'a> MonthLayout<'a> {
    /// Sunday-first grid for the month containing `reference`. Leading cells pad
    /// day 1 into its weekday column; the last row is left short.
    pub fn new(reference: NaiveDate) -> Self {
        let year = reference.year();
        let month = reference.month();
        let first_day = first_of_month(reference);
        let days_before = first_day.weekday().num_days_from_sunday() as usize;
        let total_days = days_in_month(year, month);

        let mut cells = Vec::with_capacity(days_before + total_days as usize);
        cells.extend((0..days_before).map(|_| DayCell::padding()));
        cells.extend(first_day.iter_days().take(total_days as usize).map(DayCell::day));

        tracing::debug!("Built month layout for {}-{:02} with {} cells", year, month, cells.len());

        Self { year, month, cells }
    }

    pub fn with_events(mut self, store: &'a EventStore) -> Self {
        for cell in &mut self.cells {
            if let Some(date) = cell.date {
                cell.events = day_index::events_on(store, date);
            }
        }
        self
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(7)
    }

    pub fn leading_padding(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_padding()).count()
    }

    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_first
        .and_then(|d| d.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Moves `reference` by `delta` months. The day of month is clamped to the
/// target month's length, so Jan 31 + 1 lands on Feb 28/29, never in March.
pub fn shift_month(reference: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        reference.checked_add_months(months)
    } else {
        reference.checked_sub_months(months)
    };
    shifted.unwrap_or(reference)
}
