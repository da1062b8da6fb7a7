//! Immutable configuration for burners, pans and steaks
//!
//! Configuration is fixed at construction. Single-value bounds are clamped by
//! `sanitized()`; threshold ordering is only reported (see [`ConfigIssue`])
//! because a mis-ordered band table is a setup mistake, not something the
//! simulation can repair on its own.
//!
//! Default values reproduce the reference kitchen scene: a 250°C burner, a pan
//! that is ready at 180°C and smokes heavily from 230°C, and a steak that goes
//! rare at 50°C and burns at 75°C.

use crate::core_types::units::{Celsius, Seconds};
use crate::thermal::integration::{clamp_between, non_negative};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value that the simulation tolerates but that will make
/// classification degenerate.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    /// Two classification thresholds that must be strictly ascending are not
    ThresholdsOutOfOrder {
        lower: &'static str,
        upper: &'static str,
        lower_value: Celsius,
        upper_value: Celsius,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::ThresholdsOutOfOrder {
                lower,
                upper,
                lower_value,
                upper_value,
            } => write!(
                f,
                "threshold {lower} ({lower_value}) must be below {upper} ({upper_value})"
            ),
        }
    }
}

fn check_ascending(
    issues: &mut Vec<ConfigIssue>,
    lower: (&'static str, Celsius),
    upper: (&'static str, Celsius),
) {
    if lower.1 >= upper.1 {
        issues.push(ConfigIssue::ThresholdsOutOfOrder {
            lower: lower.0,
            upper: upper.0,
            lower_value: lower.1,
            upper_value: upper.1,
        });
    }
}

// ============================================================================
// HEAT SOURCE
// ============================================================================

/// Burner configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatSourceConfig {
    /// Output temperature at full intensity
    pub max_output_temp: Celsius,
    /// Intensity above which flames are shown (0-1)
    pub flame_threshold: f32,
}

impl Default for HeatSourceConfig {
    fn default() -> Self {
        Self {
            max_output_temp: Celsius::new(250.0),
            flame_threshold: 0.1,
        }
    }
}

impl HeatSourceConfig {
    /// Clamp single-value bounds
    pub fn sanitized(self) -> Self {
        let flame_threshold = if self.flame_threshold.is_nan() {
            0.0
        } else {
            self.flame_threshold.clamp(0.0, 1.0)
        };
        Self {
            max_output_temp: Celsius::new(*self.max_output_temp),
            flame_threshold,
        }
    }
}

// ============================================================================
// CONDUCTOR
// ============================================================================

/// Pan configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductorConfig {
    pub ambient_temp: Celsius,
    pub max_temp: Celsius,
    pub initial_temp: Celsius,
    /// Ramp speed toward the burner output (°C/s)
    pub heating_speed: f32,
    /// Ramp speed toward ambient (°C/s)
    pub cooling_speed: f32,
    /// Light smoke from here
    pub ready_temp: Celsius,
    /// Heavy smoke from here
    pub too_hot_temp: Celsius,
    /// Below `ready_temp - cold_margin` the pan reads as cold
    pub cold_margin: f32,
}

impl Default for ConductorConfig {
    fn default() -> Self {
        Self {
            ambient_temp: Celsius::ROOM,
            max_temp: Celsius::new(250.0),
            initial_temp: Celsius::ROOM,
            heating_speed: 15.0,
            cooling_speed: 5.0,
            ready_temp: Celsius::new(180.0),
            too_hot_temp: Celsius::new(230.0),
            cold_margin: 20.0,
        }
    }
}

impl ConductorConfig {
    /// Clamp single-value bounds: speeds are non-negative, `max_temp` is at
    /// least ambient and the initial temperature lies between the two.
    pub fn sanitized(self) -> Self {
        let ambient_temp = Celsius::new(*self.ambient_temp);
        let max_temp = Celsius::new(*self.max_temp).max(ambient_temp);
        let initial_temp = Celsius::new(clamp_between(
            *self.initial_temp,
            *ambient_temp,
            *max_temp,
        ));
        Self {
            ambient_temp,
            max_temp,
            initial_temp,
            heating_speed: non_negative(self.heating_speed),
            cooling_speed: non_negative(self.cooling_speed),
            ready_temp: Celsius::new(*self.ready_temp),
            too_hot_temp: Celsius::new(*self.too_hot_temp),
            cold_margin: non_negative(self.cold_margin),
        }
    }

    /// Threshold ordering problems
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        check_ascending(
            &mut issues,
            ("ready_temp", self.ready_temp),
            ("too_hot_temp", self.too_hot_temp),
        );
        issues
    }

    /// Temperature below which the pan reads as cold
    pub fn cold_below(&self) -> Celsius {
        Celsius::new(*self.ready_temp - self.cold_margin)
    }
}

// ============================================================================
// LOAD
// ============================================================================

/// Steak configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub ambient_temp: Celsius,
    pub initial_temp: Celsius,
    pub rare_temp: Celsius,
    pub medium_temp: Celsius,
    pub well_done_temp: Celsius,
    pub burnt_temp: Celsius,
    /// Exponential approach rate toward the pan temperature
    pub cooking_speed: f32,
    /// Ramp speed toward ambient when off the pan (°C/s)
    pub cooling_speed: f32,
    /// Contact time before cooking starts
    pub min_contact_time: Seconds,
    /// Pan temperature needed for cooking
    pub min_conductor_temp: Celsius,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            ambient_temp: Celsius::ROOM,
            initial_temp: Celsius::ROOM,
            rare_temp: Celsius::new(50.0),
            medium_temp: Celsius::new(56.0),
            well_done_temp: Celsius::new(65.0),
            burnt_temp: Celsius::new(75.0),
            cooking_speed: 2.0,
            cooling_speed: 0.5,
            min_contact_time: Seconds::sanitized(2.0),
            min_conductor_temp: Celsius::new(150.0),
        }
    }
}

impl LoadConfig {
    /// Clamp single-value bounds: rates and durations are non-negative and the
    /// initial core temperature is at least ambient.
    pub fn sanitized(self) -> Self {
        let ambient_temp = Celsius::new(*self.ambient_temp);
        Self {
            ambient_temp,
            initial_temp: Celsius::new(*self.initial_temp).max(ambient_temp),
            rare_temp: Celsius::new(*self.rare_temp),
            medium_temp: Celsius::new(*self.medium_temp),
            well_done_temp: Celsius::new(*self.well_done_temp),
            burnt_temp: Celsius::new(*self.burnt_temp),
            cooking_speed: non_negative(self.cooking_speed),
            cooling_speed: non_negative(self.cooling_speed),
            min_contact_time: Seconds::sanitized(*self.min_contact_time),
            min_conductor_temp: Celsius::new(*self.min_conductor_temp),
        }
    }

    /// Threshold ordering problems
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let bands = [
            ("rare_temp", self.rare_temp),
            ("medium_temp", self.medium_temp),
            ("well_done_temp", self.well_done_temp),
            ("burnt_temp", self.burnt_temp),
        ];
        for pair in bands.windows(2) {
            check_ascending(&mut issues, pair[0], pair[1]);
        }
        issues
    }
}

// ============================================================================
// PRESET
// ============================================================================

/// Configuration for a complete burner → pan → steak setup
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenPreset {
    pub burner: HeatSourceConfig,
    pub pan: ConductorConfig,
    pub steak: LoadConfig,
}

impl KitchenPreset {
    pub fn sanitized(self) -> Self {
        Self {
            burner: self.burner.sanitized(),
            pan: self.pan.sanitized(),
            steak: self.steak.sanitized(),
        }
    }

    /// Threshold problems across all three configurations
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = self.pan.issues();
        issues.extend(self.steak.issues());
        issues
    }
}
