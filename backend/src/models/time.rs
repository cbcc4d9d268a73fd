use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of the `Check-In Time` column (12-hour clock with AM/PM marker).
pub const CHECK_IN_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Parse a raw check-in timestamp such as `2024-01-01 09:15:00 AM`.
pub fn parse_check_in(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), CHECK_IN_FORMAT)
}

/// Half of the 12-hour clock. `AM` orders before `PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    AM,
    PM,
}

impl Meridiem {
    pub fn from_hour(hour_of_day: u32) -> Self {
        if hour_of_day < 12 {
            Meridiem::AM
        } else {
            Meridiem::PM
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::AM => "AM",
            Meridiem::PM => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// English weekday name, independent of locale.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Hour on the 12-hour clock (midnight and noon are 12).
pub fn hour12(hour_of_day: u32) -> u32 {
    match hour_of_day % 12 {
        0 => 12,
        h => h,
    }
}

/// Zero-padded hour label, e.g. `"09 AM"` or `"12 PM"`.
pub fn hour_label(hour_of_day: u32) -> String {
    format!(
        "{:02} {}",
        hour12(hour_of_day),
        Meridiem::from_hour(hour_of_day)
    )
}

/// Calendar fields derived from a check-in timestamp.
///
/// All fields are pure functions of the timestamp and are computed once when a
/// record is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    /// Weekday name, e.g. `"Monday"`.
    pub weekday_name: String,
    /// Monday = 0 ... Sunday = 6.
    pub weekday: u8,
    /// Hour label on the 12-hour clock, e.g. `"09 AM"`.
    pub hour_label: String,
    /// Hour component of the label, e.g. `"09"`.
    pub hour: String,
    pub meridiem: Meridiem,
    /// 0-23. Orders all AM hours (12, 01 ... 11) ahead of the PM hours.
    pub hour_of_day: u8,
}

impl CalendarFields {
    pub fn from_timestamp(timestamp: &NaiveDateTime) -> Self {
        let weekday = timestamp.weekday();
        let hour_of_day = timestamp.hour();
        Self {
            weekday_name: weekday_name(weekday).to_string(),
            weekday: weekday.num_days_from_monday() as u8,
            hour_label: hour_label(hour_of_day),
            hour: format!("{:02}", hour12(hour_of_day)),
            meridiem: Meridiem::from_hour(hour_of_day),
            hour_of_day: hour_of_day as u8,
        }
    }
}
