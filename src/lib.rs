pub mod calendar;
pub mod export;
pub mod storage;
pub mod ui;

pub use calendar::{Event, EventRecord, EventStore};
pub use export::{ExportArtifact, ExportError};
pub use ui::month_view::{DayCell, MonthLayout, shift_month};
