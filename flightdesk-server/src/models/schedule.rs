//! Date/time splitting for schedule timestamps
//!
//! Ticket timestamps are split on the server, in the server process's local
//! zone. The departures board is formatted by the database session instead
//! (`to_char`), so the two endpoints can disagree for hosts whose zone differs
//! from the database's. Both paths are kept as they are.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

/// Date format: `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format: `HH:MM:SS` (24h)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Separate date and time strings for one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleStamp {
    pub date: String,
    pub time: String,
}

/// Split an instant into date and time strings as seen in `zone`.
pub fn split_timestamp<Tz>(instant: &DateTime<Utc>, zone: &Tz) -> ScheduleStamp
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let local = instant.with_timezone(zone);

    ScheduleStamp {
        date: local.format(DATE_FORMAT).to_string(),
        time: local.format(TIME_FORMAT).to_string(),
    }
}
