//! Calendar views.

pub mod event_dates;
pub mod markers;
mod month_day_cell;
pub mod month_view;
mod palette;

pub use month_view::{MonthView, MonthViewAction};
