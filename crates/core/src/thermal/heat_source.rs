//! Burner: an on/off switch plus an intensity dial

use crate::core_types::identity::ObjectId;
use crate::core_types::units::Celsius;
use crate::thermal::config::HeatSourceConfig;
use crate::thermal::HeatSupply;
use tracing::debug;

/// Heat source at the start of the chain.
///
/// Invariants: `intensity` is always in [0, 1] and turning the burner off
/// forces it to zero.
#[derive(Debug, Clone)]
pub struct HeatSource {
    id: ObjectId,
    config: HeatSourceConfig,
    is_on: bool,
    intensity: f32,
}

impl HeatSource {
    /// Create a burner that starts off at zero intensity
    pub fn new(id: ObjectId, config: HeatSourceConfig) -> Self {
        Self {
            id,
            config: config.sanitized(),
            is_on: false,
            intensity: 0.0,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn config(&self) -> &HeatSourceConfig {
        &self.config
    }

    /// Switch on. Intensity is left untouched.
    pub fn turn_on(&mut self) {
        if !self.is_on {
            debug!("Burner {} on (intensity {:.2})", self.id, self.intensity);
        }
        self.is_on = true;
    }

    /// Switch off and drop intensity to zero
    pub fn turn_off(&mut self) {
        if self.is_on {
            debug!("Burner {} off", self.id);
        }
        self.is_on = false;
        self.intensity = 0.0;
    }

    /// Set the dial, clamped to [0, 1]. Works whether on or off; NaN reads as 0.
    pub fn set_intensity(&mut self, value: f32) {
        self.intensity = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
    }

    /// Raw dial position
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Temperature offered to anything in contact: `intensity * max_output_temp`
    /// when on, zero otherwise.
    pub fn effective_output(&self) -> Celsius {
        if self.is_on {
            Celsius::new(self.intensity * *self.config.max_output_temp)
        } else {
            Celsius::new(0.0)
        }
    }

    /// Whether flames should be visible
    pub fn flame_active(&self) -> bool {
        self.is_on && self.intensity > self.config.flame_threshold
    }

    /// Cold→hot interpolation factor for the burner surface (0 when off)
    pub fn glow_level(&self) -> f32 {
        if self.is_on {
            self.intensity
        } else {
            0.0
        }
    }
}

impl HeatSupply for HeatSource {
    fn is_on(&self) -> bool {
        HeatSource::is_on(self)
    }

    fn effective_output(&self) -> Celsius {
        HeatSource::effective_output(self)
    }
}
