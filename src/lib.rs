//! Station traffic: join bike-share trips onto stations, filter them by time
//! of day and size station markers by the resulting traffic.
//!
//! The [`traffic`] module is the rendering-independent core. [`data`] loads
//! the two source datasets into its record types.

pub mod data;
pub mod traffic;
