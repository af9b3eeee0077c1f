//! Ease curve: instantaneous speed multiplier over cycle progress.
//!
//! The curve shapes how fast simulated time accumulates, never the rendered
//! angle itself. The transition-zone width at both ends of the cycle is one
//! time unit's worth of progress, `m = 1 / recurrence`:
//!
//! - middle zone `m < p < 1-m`: full speed, factor 1
//! - end zone `p >= 1-m`: quadratic deceleration toward the floor
//! - start zone (remaining `p`): square-root acceleration from the floor
//!
//! Both ramps are scaled so the curve is continuous at the zone boundaries
//! (value exactly 1) while still bottoming out at [`SPEED_FLOOR`].

/// Minimum speed multiplier at the very start and end of a cycle.
pub const SPEED_FLOOR: f64 = 0.05;

/// Speed multiplier for the given cycle progress, in `(0, 1]`.
///
/// A degenerate recurrence (<= 0, transiently possible with no rings)
/// yields full speed rather than a division by zero.
pub fn speed_factor(progress: f64, recurrence: f64) -> f64 {
    if recurrence <= 0.0 {
        return 1.0;
    }
    let p = progress.clamp(0.0, 1.0);
    let m = 1.0 / recurrence;
    let ramp = 1.0 - SPEED_FLOOR;

    if m < p && p < 1.0 - m {
        1.0
    } else if p >= 1.0 - m {
        let t = (p - (1.0 - m)) / m;
        SPEED_FLOOR + ramp * (1.0 - t) * (1.0 - t)
    } else {
        let t = p / m;
        SPEED_FLOOR + ramp * t.sqrt()
    }
}
