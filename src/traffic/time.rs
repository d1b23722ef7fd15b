//! Clock-time helpers: minutes since midnight and their display form.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};

use super::error::TrafficError;

/// Minutes in one day; valid minutes are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A minute of the day in `0..=1439`.
///
/// Out-of-range values are rejected when constructing one, so everything that
/// takes a `MinuteOfDay` is infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);
    pub const LAST: MinuteOfDay = MinuteOfDay(MINUTES_PER_DAY - 1);

    pub fn new(minute: i64) -> Result<Self, TrafficError> {
        if (0..i64::from(MINUTES_PER_DAY)).contains(&minute) {
            Ok(MinuteOfDay(minute as u16))
        } else {
            Err(TrafficError::MinuteOutOfRange(minute))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Absolute linear distance in minutes. Does not wrap around midnight:
    /// 23:59 and 00:05 are 1434 minutes apart, not 6.
    pub fn distance(self, other: MinuteOfDay) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(*self))
    }
}

/// `hour * 60 + minute` of any clock value; seconds and date are dropped.
pub fn minutes_since_midnight<T: Timelike>(time: &T) -> MinuteOfDay {
    MinuteOfDay((time.hour() * 60 + time.minute()) as u16)
}

/// Short 12-hour rendering, e.g. `"2:00 PM"` or `"12:05 AM"`.
pub fn format_time(minutes: MinuteOfDay) -> String {
    let time = NaiveTime::MIN + Duration::minutes(i64::from(minutes.get()));
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn minutes_drop_seconds_and_date() {
        assert_eq!(minutes_since_midnight(&at(0, 0, 0)).get(), 0);
        assert_eq!(minutes_since_midnight(&at(10, 0, 59)).get(), 600);
        assert_eq!(minutes_since_midnight(&at(23, 59, 59)).get(), 1439);

        let next_day = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(minutes_since_midnight(&next_day).get(), 600);
    }

    #[test]
    fn format_twelve_hour_clock() {
        let fmt = |m| format_time(MinuteOfDay::new(m).unwrap());
        assert_eq!(fmt(0), "12:00 AM");
        assert_eq!(fmt(5), "12:05 AM");
        assert_eq!(fmt(600), "10:00 AM");
        assert_eq!(fmt(720), "12:00 PM");
        assert_eq!(fmt(840), "2:00 PM");
        assert_eq!(fmt(1439), "11:59 PM");
    }

    #[test]
    fn display_matches_format_time() {
        let minute = MinuteOfDay::new(845).unwrap();
        assert_eq!(minute.to_string(), "2:05 PM");
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        assert_eq!(MinuteOfDay::new(-1), Err(TrafficError::MinuteOutOfRange(-1)));
        assert_eq!(
            MinuteOfDay::new(1440),
            Err(TrafficError::MinuteOutOfRange(1440))
        );
        assert_eq!(MinuteOfDay::new(1439), Ok(MinuteOfDay::LAST));
        assert_eq!(MinuteOfDay::new(0), Ok(MinuteOfDay::MIDNIGHT));
    }

    #[test]
    fn distance_is_linear() {
        let late = MinuteOfDay::LAST;
        let early = MinuteOfDay::new(5).unwrap();
        assert_eq!(late.distance(early), 1434);
        assert_eq!(early.distance(late), 1434);
    }
}
