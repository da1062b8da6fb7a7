//! Time integration helpers shared by the thermal components
//!
//! Two models are used on purpose:
//! - a linear ramp (`move_towards`) for the burner→pan and cooling paths
//! - an exponential approach (`approach`) for pan→steak cooking, which slows
//!   down as the core closes in on the pan temperature

/// Scale applied to the cooking speed in the exponential approach
pub const COOKING_RATE_SCALE: f32 = 0.01;

/// Move `current` toward `target` by at most `max_step`, never overshooting.
///
/// A non-positive (or NaN) step leaves the value unchanged.
#[inline]
pub fn move_towards(current: f32, target: f32, max_step: f32) -> f32 {
    if max_step.is_nan() || max_step <= 0.0 {
        return current;
    }
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(diff)
    }
}

/// Exponential approach: `current + (target - current) * rate * dt * 0.01`.
///
/// Large steps can overshoot; callers clamp the result.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * rate * dt * COOKING_RATE_SCALE
}

/// Clamp that cannot panic: `hi` is raised to `lo` when they are inverted and
/// NaN maps to `lo`.
#[inline]
pub fn clamp_between(value: f32, lo: f32, hi: f32) -> f32 {
    if value.is_nan() {
        return lo;
    }
    let hi = hi.max(lo);
    value.max(lo).min(hi)
}

/// Map NaN, infinite and negative rates to zero
#[inline]
pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn move_towards_ramps_linearly() {
        assert_relative_eq!(move_towards(20.0, 250.0, 15.0), 35.0);
        assert_relative_eq!(move_towards(100.0, 20.0, 5.0), 95.0);
    }

    #[test]
    fn move_towards_never_overshoots() {
        assert_eq!(move_towards(20.0, 22.0, 15.0), 22.0);
        assert_eq!(move_towards(21.0, 20.0, 5.0), 20.0);
        assert_eq!(move_towards(20.0, 20.0, 5.0), 20.0);
    }

    #[test]
    fn move_towards_ignores_bad_steps() {
        assert_eq!(move_towards(40.0, 20.0, 0.0), 40.0);
        assert_eq!(move_towards(40.0, 20.0, -3.0), 40.0);
        assert_eq!(move_towards(40.0, 20.0, f32::NAN), 40.0);
    }

    #[test]
    fn approach_is_proportional_to_gap() {
        // 180°C gap, speed 2, dt 1 -> 3.6°C
        assert_relative_eq!(approach(20.0, 200.0, 2.0, 1.0), 23.6, epsilon = 1e-4);
        // Halving the gap halves the step
        assert_relative_eq!(approach(110.0, 200.0, 2.0, 1.0), 111.8, epsilon = 1e-4);
    }

    #[test]
    fn clamp_between_handles_inverted_bounds() {
        assert_eq!(clamp_between(50.0, 20.0, 10.0), 20.0);
        assert_eq!(clamp_between(f32::NAN, 20.0, 200.0), 20.0);
        assert_eq!(clamp_between(300.0, 20.0, 250.0), 250.0);
        assert_eq!(clamp_between(5.0, 20.0, 250.0), 20.0);
    }

    #[test]
    fn non_negative_rates() {
        assert_eq!(non_negative(-1.0), 0.0);
        assert_eq!(non_negative(f32::INFINITY), 0.0);
        assert_eq!(non_negative(15.0), 15.0);
    }
}
