//! Progress and easing curves

use std::time::Duration;

/// Linear progress of `elapsed` through `duration`, clamped to `[0, 1]`.
///
/// A zero duration is complete immediately.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
}

/// Cubic ease-out: fast start, gentle settle. Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
