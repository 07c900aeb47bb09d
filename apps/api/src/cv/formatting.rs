use chrono::{NaiveDate, Utc};

const DAYS_PER_YEAR: f64 = 365.25;

/// Renders a position's tenure as `"January 2020 - Present"` or
/// `"January 2020 - June 2021"`.
///
/// A missing end date reads as "Present" even when `current` is false.
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>, current: bool) -> String {
    let start_formatted = month_year(start);
    match end {
        Some(end) if !current => format!("{start_formatted} - {}", month_year(end)),
        _ => format!("{start_formatted} - Present"),
    }
}

/// Tenure in years, rounded to one decimal. A missing end date means today.
#[allow(dead_code)]
pub fn duration_in_years(start: NaiveDate, end: Option<NaiveDate>) -> f64 {
    duration_in_years_until(start, end, Utc::now().date_naive())
}

/// Same as [`duration_in_years`] with an explicit "today".
pub fn duration_in_years_until(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let end = end.unwrap_or(today);
    let days = (end - start).num_days().abs() as f64;
    (days / DAYS_PER_YEAR * 10.0).round() / 10.0
}

fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
