//! Semantic unit types for the cooking simulation
//!
//! Newtype wrappers keep temperatures and elapsed time from being mixed up
//! with the plain `f32` rates and ratios that flow through the same code.
//!
//! # Design Philosophy
//! - Everything is `f32`: the values come from and go back to a game engine
//! - Total ordering via `Ord` (`f32::total_cmp`)
//! - Construction clamps instead of panicking; the simulation never rejects input
//! - Serde support so presets can be stored as JSON
//!
//! # Usage
//! ```
//! use cook_sim_core::core_types::units::{Celsius, Seconds};
//!
//! let pan = Celsius::new(190.0);
//! let steak = Celsius::new(52.5);
//! assert!((*(pan - steak) - 137.5).abs() < 1e-4);
//!
//! // Negative or non-finite frame times collapse to zero
//! assert_eq!(Seconds::sanitized(-0.016), Seconds::ZERO);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, Neg, Sub};

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f32);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Celsius {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Typical kitchen ambient temperature
    pub const ROOM: Celsius = Celsius(20.0);

    /// Create a new Celsius temperature.
    ///
    /// Values below absolute zero (and NaN) are clamped to absolute zero.
    #[inline]
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ABSOLUTE_ZERO;
        }
        Celsius(value.max(Self::ABSOLUTE_ZERO.0))
    }

    /// Raw value in degrees Celsius
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Celsius {
    fn from(v: f32) -> Self {
        Celsius::new(v)
    }
}

impl From<Celsius> for f32 {
    fn from(c: Celsius) -> f32 {
        c.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Signed temperature difference in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CelsiusDelta(f32);

impl CelsiusDelta {
    /// Create a temperature delta (any sign)
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        CelsiusDelta(value)
    }

    /// Absolute value of the delta
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        CelsiusDelta(self.0.abs())
    }
}

impl Deref for CelsiusDelta {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Neg for CelsiusDelta {
    type Output = CelsiusDelta;
    fn neg(self) -> CelsiusDelta {
        CelsiusDelta(-self.0)
    }
}

impl Sub<Celsius> for Celsius {
    type Output = CelsiusDelta;
    fn sub(self, rhs: Celsius) -> CelsiusDelta {
        CelsiusDelta(self.0 - rhs.0)
    }
}

impl Add<CelsiusDelta> for Celsius {
    type Output = Celsius;
    fn add(self, rhs: CelsiusDelta) -> Celsius {
        Celsius::new(self.0 + rhs.0)
    }
}

// ============================================================================
// TIME
// ============================================================================

/// Elapsed simulation time in seconds (never negative)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Seconds(f32);

impl Eq for Seconds {}

impl PartialOrd for Seconds {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Seconds {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Seconds {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Seconds {
    pub const ZERO: Seconds = Seconds(0.0);

    /// Create a duration, clamping negative and non-finite input to zero
    #[inline]
    #[must_use]
    pub fn sanitized(value: f32) -> Self {
        if value.is_finite() && value > 0.0 {
            Seconds(value)
        } else {
            Self::ZERO
        }
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Seconds {
    fn from(v: f32) -> Self {
        Seconds::sanitized(v)
    }
}

impl Add for Seconds {
    type Output = Seconds;
    fn add(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 + rhs.0)
    }
}

impl AddAssign for Seconds {
    fn add_assign(&mut self, rhs: Seconds) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.0)
    }
}
