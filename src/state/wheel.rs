//! Wheel/trackpad input disambiguation.
//!
//! Continuous trackpad gestures report a horizontal component or tiny
//! vertical deltas; discrete mouse-wheel ticks report large vertical deltas
//! only. The carousel pages on wheel ticks and lets trackpad gestures fall
//! through to native scrolling.

use crate::state::Direction;

/// Vertical delta magnitude below which an event counts as a trackpad gesture.
pub const TRACKPAD_DELTA_THRESHOLD: f64 = 15.0;

/// Outcome of classifying a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelClass {
    /// Discrete wheel tick: the carousel intercepts it and pages.
    Consume(Direction),
    /// Trackpad gesture: not intercepted.
    PassThrough,
}

impl WheelClass {
    /// True if the carousel took the event.
    pub fn is_consumed(self) -> bool {
        matches!(self, WheelClass::Consume(_))
    }
}

/// Classify a wheel event using the default threshold.
///
/// Negative `delta_y` (wheel up) maps to forward, anything else backward.
pub fn classify_wheel_event(delta_x: f64, delta_y: f64) -> WheelClass {
    classify_wheel_event_with_threshold(delta_x, delta_y, TRACKPAD_DELTA_THRESHOLD)
}

/// Classify a wheel event against an explicit vertical threshold.
pub fn classify_wheel_event_with_threshold(
    delta_x: f64,
    delta_y: f64,
    threshold: f64,
) -> WheelClass {
    let is_trackpad = delta_x.abs() != 0.0 || delta_y.is_nan() || delta_y.abs() < threshold;
    if is_trackpad {
        return WheelClass::PassThrough;
    }

    if delta_y < 0.0 {
        WheelClass::Consume(Direction::Forward)
    } else {
        WheelClass::Consume(Direction::Backward)
    }
}
