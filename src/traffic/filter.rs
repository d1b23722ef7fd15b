use super::error::TrafficError;
use super::time::{minutes_since_midnight, MinuteOfDay};
use crate::data::model::Trip;

// ---------------------------------------------------------------------------
// Filter predicate: which part of the day is selected
// ---------------------------------------------------------------------------

/// A trip matches a selected minute if it starts or ends this close to it.
pub const WINDOW_MINUTES: u16 = 60;

/// Slider value meaning "no filter".
pub const ANY_TIME_SLIDER: i32 = -1;

/// Current time-of-day selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeFilter {
    /// No filter: every trip counts.
    #[default]
    Any,
    /// Only trips starting or ending within [`WINDOW_MINUTES`] of this minute.
    Around(MinuteOfDay),
}

impl TimeFilter {
    /// Map the time slider's `-1..=1439` onto a filter, `-1` being [`TimeFilter::Any`].
    pub fn from_slider(value: i32) -> Result<Self, TrafficError> {
        if value == ANY_TIME_SLIDER {
            return Ok(TimeFilter::Any);
        }
        MinuteOfDay::new(i64::from(value))
            .map(TimeFilter::Around)
            .map_err(|_| TrafficError::SliderOutOfRange(value))
    }

    pub fn to_slider(self) -> i32 {
        match self {
            TimeFilter::Any => ANY_TIME_SLIDER,
            TimeFilter::Around(minute) => i32::from(minute.get()),
        }
    }

    pub fn is_any(self) -> bool {
        matches!(self, TimeFilter::Any)
    }

    /// Whether a single trip passes the filter.
    ///
    /// The distance to the selected minute is linear, so a selection near one
    /// end of the day never matches trips near the other end (minute 5 is
    /// 1434 minutes away from minute 1439, not 6).
    pub fn matches(self, trip: &Trip) -> bool {
        match self {
            TimeFilter::Any => true,
            TimeFilter::Around(minute) => {
                let started = minutes_since_midnight(&trip.started_at);
                let ended = minutes_since_midnight(&trip.ended_at);
                started.distance(minute) <= WINDOW_MINUTES
                    || ended.distance(minute) <= WINDOW_MINUTES
            }
        }
    }
}

/// Return the trips that pass `filter`, in input order.
///
/// [`TimeFilter::Any`] returns every trip.
pub fn filter_by_time(trips: &[Trip], filter: TimeFilter) -> Vec<&Trip> {
    if filter.is_any() {
        return trips.iter().collect();
    }
    trips.iter().filter(|trip| filter.matches(trip)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at_minute(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(minute / 60, minute % 60, 30)
            .unwrap()
    }

    fn trip(start: u32, end: u32) -> Trip {
        Trip {
            start_station_id: "A".to_string(),
            end_station_id: "B".to_string(),
            started_at: at_minute(start),
            ended_at: at_minute(end),
        }
    }

    fn around(minute: i64) -> TimeFilter {
        TimeFilter::Around(MinuteOfDay::new(minute).unwrap())
    }

    #[test]
    fn any_returns_every_trip_in_order() {
        let trips = vec![trip(5, 20), trip(600, 615), trip(1400, 1439)];
        let kept = filter_by_time(&trips, TimeFilter::Any);
        assert_eq!(kept.len(), trips.len());
        for (kept, original) in kept.iter().zip(&trips) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn window_is_inclusive_at_sixty_minutes() {
        let trips = vec![trip(540, 530), trip(538, 530)];
        let kept = filter_by_time(&trips, around(600));
        assert_eq!(kept, vec![&trips[0]]);
    }

    #[test]
    fn either_end_can_match() {
        // Starts way before, ends inside the window.
        let trips = vec![trip(300, 650), trip(300, 400)];
        let kept = filter_by_time(&trips, around(600));
        assert_eq!(kept, vec![&trips[0]]);
    }

    #[test]
    fn day_boundary_does_not_wrap() {
        let trips = vec![trip(5, 10)];
        assert!(filter_by_time(&trips, around(1439)).is_empty());
        assert_eq!(filter_by_time(&trips, around(0)).len(), 1);
    }

    #[test]
    fn input_is_untouched() {
        let trips = vec![trip(100, 120), trip(900, 930)];
        let before = trips.clone();
        let _ = filter_by_time(&trips, around(100));
        assert_eq!(trips, before);
    }

    #[test]
    fn slider_values() {
        assert_eq!(TimeFilter::from_slider(-1), Ok(TimeFilter::Any));
        assert_eq!(TimeFilter::from_slider(600), Ok(around(600)));
        assert_eq!(
            TimeFilter::from_slider(-2),
            Err(TrafficError::SliderOutOfRange(-2))
        );
        assert_eq!(
            TimeFilter::from_slider(1440),
            Err(TrafficError::SliderOutOfRange(1440))
        );
        assert_eq!(around(600).to_slider(), 600);
        assert_eq!(TimeFilter::Any.to_slider(), -1);
    }
}
