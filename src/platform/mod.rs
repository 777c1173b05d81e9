//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time/ticks (monotonic millisecond clock and frame delays)

pub mod time;

pub use time::{Clock, ManualClock, SystemClock};
