use thiserror::Error;

/// Caller contract violations rejected by the traffic core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrafficError {
    #[error("minute of day {0} is outside 0..=1439")]
    MinuteOutOfRange(i64),

    #[error("time slider value {0} is outside -1..=1439")]
    SliderOutOfRange(i32),
}
