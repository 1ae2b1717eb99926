// Date utility functions
// Month arithmetic shared by the calendar grid and its navigation

use chrono::{Datelike, NaiveDate};

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Move by whole months, clamping the day to the target month's length.
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = current.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

/// Number of blank cells before day 1 in a grid whose first column is
/// `first_day_of_week` (0 = Sunday).
pub fn leading_blank_days(month_start: NaiveDate, first_day_of_week: u8) -> u32 {
    let weekday = month_start.weekday().num_days_from_sunday();
    (weekday + 7 - u32::from(first_day_of_week % 7)) % 7
}

/// Rows needed to show every day of the month.
pub fn weeks_in_grid(month_start: NaiveDate, first_day_of_week: u8) -> u32 {
    let cells = leading_blank_days(month_start, first_day_of_week)
        + days_in_month(month_start.year(), month_start.month());
    cells.div_ceil(7)
}

/// Weekday header labels starting at `first_day_of_week`.
pub fn weekday_names(first_day_of_week: u8) -> Vec<&'static str> {
    let all_days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = (first_day_of_week % 7) as usize;
    (0..7).map(|i| all_days[(start + i) % 7]).collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday().num_days_from_sunday(), 0 | 6)
}
