//! Calendar classification and relative date phrasing.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::task::Task;

fn local_date<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> NaiveDate {
    date.with_timezone(&now.timezone()).date_naive()
}

/// Returns `true` if `date` falls on the same calendar day as `now`, in
/// `now`'s time zone.
#[must_use]
pub fn is_today<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    local_date(date, now) == now.date_naive()
}

/// Returns `true` if `date` falls on the calendar day before `now`.
#[must_use]
pub fn is_yesterday<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    now.date_naive().pred_opt() == Some(local_date(date, now))
}

/// Renders `date` relative to `now`.
///
/// Same day: "Just now", "`n`m ago", "`n`h ago". Previous day: "Yesterday".
/// Within a week: "`n`d ago". Older: "Mar 5", with the year appended when
/// it differs from the current one ("Mar 5, 2023").
#[must_use]
pub fn format_date<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> String {
    let elapsed = now.with_timezone(&Utc) - *date;
    let minutes = elapsed.num_minutes();

    if is_today(date, now) {
        return if minutes < 1 {
            "Just now".to_string()
        } else if minutes < 60 {
            format!("{minutes}m ago")
        } else {
            format!("{}h ago", elapsed.num_hours())
        };
    }

    if is_yesterday(date, now) {
        return "Yesterday".to_string();
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }

    let local = local_date(date, now);
    if local.year() == now.year() {
        local.format("%b %-d").to_string()
    } else {
        local.format("%b %-d, %Y").to_string()
    }
}

/// Tasks created within `[start, end]`, both bounds inclusive.
#[must_use]
pub fn filter_by_date_range(tasks: &[Task], start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Task> {
    tasks.iter().filter(|t| t.created_at >= start && t.created_at <= end).cloned().collect()
}
