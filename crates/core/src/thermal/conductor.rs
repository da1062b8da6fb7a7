//! Pan: heated by a burner it rests on, cooling to ambient otherwise
//!
//! The pan follows a linear ramp in both directions:
//! - in contact with a burner that is on, it moves toward the burner's
//!   effective output at `heating_speed`
//! - otherwise it moves toward ambient at `cooling_speed`
//!
//! Temperature is then clamped to `[ambient_temp, max_temp]`. Classification
//! and smoke signals are pure functions of the current temperature and are
//! recomputed on every read.

use crate::core_types::identity::ObjectId;
use crate::core_types::units::{Celsius, Seconds};
use crate::thermal::config::{ConductorConfig, ConfigIssue};
use crate::thermal::contact::ContactLink;
use crate::thermal::integration::{clamp_between, move_towards};
use crate::thermal::{ContactSurface, HeatSupply};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Descriptive pan state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ConductorState {
    /// Below `ready_temp - cold_margin`
    Cold = 0,
    /// Between the cold band and `ready_temp`
    Heating = 1,
    /// `[ready_temp, too_hot_temp)`
    Ready = 2,
    /// `too_hot_temp` and above
    TooHot = 3,
}

impl ConductorState {
    /// Classify a temperature. Every value lands in exactly one state.
    pub fn classify(temperature: Celsius, config: &ConductorConfig) -> Self {
        if temperature < config.cold_below() {
            ConductorState::Cold
        } else if (config.ready_temp..config.too_hot_temp).contains(&temperature) {
            ConductorState::Ready
        } else if temperature >= config.too_hot_temp {
            ConductorState::TooHot
        } else {
            ConductorState::Heating
        }
    }
}

/// Smoke the particle layer should show. The three bands are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SmokeSignal {
    None = 0,
    /// Pan is ready to cook
    Light = 1,
    /// Pan is too hot
    Heavy = 2,
}

impl SmokeSignal {
    pub fn classify(temperature: Celsius, config: &ConductorConfig) -> Self {
        if temperature >= config.too_hot_temp {
            SmokeSignal::Heavy
        } else if temperature >= config.ready_temp {
            SmokeSignal::Light
        } else {
            SmokeSignal::None
        }
    }
}

/// Pan in the middle of the heat chain
#[derive(Debug, Clone)]
pub struct ThermalConductor {
    id: ObjectId,
    config: ConductorConfig,
    temperature: Celsius,
    contact: ContactLink,
}

impl ThermalConductor {
    pub fn new(id: ObjectId, config: ConductorConfig) -> Self {
        let config = config.sanitized();
        for issue in config.issues() {
            warn!("Pan {}: {}", id, issue);
        }
        Self {
            id,
            temperature: config.initial_temp,
            config,
            contact: ContactLink::default(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn config(&self) -> &ConductorConfig {
        &self.config
    }

    /// Configuration problems this pan was created with
    pub fn config_issues(&self) -> Vec<ConfigIssue> {
        self.config.issues()
    }

    /// Advance by `dt`.
    ///
    /// `source` is the burner the host resolved from [`contact_partner`]; a
    /// tracked partner that no longer resolves drops the contact.
    ///
    /// [`contact_partner`]: ThermalConductor::contact_partner
    pub fn update<S: HeatSupply + ?Sized>(&mut self, dt: Seconds, source: Option<&S>) {
        let target = match (self.contact.partner(), source) {
            (Some(_), Some(source)) if source.is_on() => Some(source.effective_output()),
            (Some(partner), None) => {
                debug!("Pan {}: burner {} is gone, dropping contact", self.id, partner);
                self.contact.clear();
                None
            }
            _ => None,
        };

        let next = match target {
            Some(target) => move_towards(
                *self.temperature,
                *target,
                self.config.heating_speed * *dt,
            ),
            None => move_towards(
                *self.temperature,
                *self.config.ambient_temp,
                self.config.cooling_speed * *dt,
            ),
        };

        self.temperature = Celsius::new(clamp_between(
            next,
            *self.config.ambient_temp,
            *self.config.max_temp,
        ));
    }

    pub fn on_contact_enter(&mut self, source: ObjectId) {
        if self.contact.attach(source) {
            info!("Pan {} placed on burner {}", self.id, source);
        }
    }

    pub fn on_contact_stay(&mut self, source: ObjectId) {
        if self.contact.attach(source) {
            debug!("Pan {} now resting on burner {}", self.id, source);
        }
    }

    /// Returns true if `source` was the tracked burner and the contact ended
    pub fn on_contact_exit(&mut self, source: ObjectId) -> bool {
        let detached = self.contact.detach(source);
        if detached {
            info!("Pan {} removed from burner {}", self.id, source);
        }
        detached
    }

    pub fn temperature(&self) -> Celsius {
        self.temperature
    }

    pub fn state(&self) -> ConductorState {
        ConductorState::classify(self.temperature, &self.config)
    }

    pub fn smoke(&self) -> SmokeSignal {
        SmokeSignal::classify(self.temperature, &self.config)
    }

    pub fn light_smoke(&self) -> bool {
        self.smoke() == SmokeSignal::Light
    }

    pub fn heavy_smoke(&self) -> bool {
        self.smoke() == SmokeSignal::Heavy
    }

    /// Position between ambient (0) and max temperature (1)
    pub fn heat_ratio(&self) -> f32 {
        let span = *self.config.max_temp - *self.config.ambient_temp;
        if span <= 0.0 {
            return 0.0;
        }
        ((*self.temperature - *self.config.ambient_temp) / span).clamp(0.0, 1.0)
    }

    /// Whether the surface should emit light (hotter than `ready_temp`)
    pub fn is_glowing(&self) -> bool {
        self.temperature > self.config.ready_temp
    }

    pub fn is_in_contact(&self) -> bool {
        self.contact.is_active()
    }

    pub fn contact_partner(&self) -> Option<ObjectId> {
        self.contact.partner()
    }
}

impl ContactSurface for ThermalConductor {
    fn surface_temperature(&self) -> Celsius {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::config::HeatSourceConfig;
    use crate::thermal::heat_source::HeatSource;
    use approx::assert_relative_eq;

    const BURNER: ObjectId = ObjectId(1);

    fn pan_at(temp: f32) -> ThermalConductor {
        ThermalConductor::new(
            ObjectId(2),
            ConductorConfig {
                initial_temp: Celsius::new(temp),
                ..ConductorConfig::default()
            },
        )
    }

    fn burner(intensity: f32) -> HeatSource {
        let mut b = HeatSource::new(BURNER, HeatSourceConfig::default());
        b.set_intensity(intensity);
        b.turn_on();
        b
    }

    #[test]
    fn stays_at_ambient_without_heat() {
        let mut pan = pan_at(20.0);
        let off = HeatSource::new(BURNER, HeatSourceConfig::default());
        pan.on_contact_enter(BURNER);
        pan.update(Seconds::sanitized(3.0), Some(&off));
        assert_eq!(*pan.temperature(), 20.0);
    }

    #[test]
    fn heats_linearly_toward_burner_output() {
        let mut pan = pan_at(20.0);
        let b = burner(1.0);
        pan.on_contact_enter(BURNER);

        pan.update(Seconds::sanitized(1.0), Some(&b));
        assert_relative_eq!(*pan.temperature(), 35.0);

        for _ in 0..10 {
            pan.update(Seconds::sanitized(0.1), Some(&b));
        }
        assert_relative_eq!(*pan.temperature(), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn does_not_overshoot_low_setting() {
        let mut pan = pan_at(20.0);
        // 0.4 * 250 = 100°C target
        let b = burner(0.4);
        pan.on_contact_enter(BURNER);
        for _ in 0..20 {
            pan.update(Seconds::sanitized(1.0), Some(&b));
        }
        assert_relative_eq!(*pan.temperature(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn cools_toward_ambient_off_burner() {
        let mut pan = pan_at(200.0);
        pan.update::<HeatSource>(Seconds::sanitized(2.0), None);
        assert_relative_eq!(*pan.temperature(), 190.0);
    }

    #[test]
    fn zero_intensity_on_burner_cools_to_ambient_floor() {
        let mut pan = pan_at(100.0);
        let b = burner(0.0);
        pan.on_contact_enter(BURNER);
        for _ in 0..20 {
            pan.update(Seconds::sanitized(1.0), Some(&b));
        }
        assert_eq!(*pan.temperature(), 20.0);
    }

    #[test]
    fn lost_burner_drops_contact() {
        let mut pan = pan_at(200.0);
        pan.on_contact_enter(BURNER);
        pan.update::<HeatSource>(Seconds::sanitized(1.0), None);
        assert!(!pan.is_in_contact());
        assert_relative_eq!(*pan.temperature(), 195.0);
    }

    #[test]
    fn stale_exit_keeps_current_burner() {
        let mut pan = pan_at(20.0);
        pan.on_contact_enter(ObjectId(5));
        pan.on_contact_enter(BURNER);
        assert!(!pan.on_contact_exit(ObjectId(5)));
        assert_eq!(pan.contact_partner(), Some(BURNER));
        assert!(pan.on_contact_exit(BURNER));
        assert!(!pan.is_in_contact());
    }

    #[test]
    fn classification_bands() {
        let config = ConductorConfig::default();
        let cases = [
            (20.0, ConductorState::Cold),
            (159.9, ConductorState::Cold),
            (160.0, ConductorState::Heating),
            (179.9, ConductorState::Heating),
            (180.0, ConductorState::Ready),
            (229.9, ConductorState::Ready),
            (230.0, ConductorState::TooHot),
            (250.0, ConductorState::TooHot),
        ];
        for (temp, expected) in cases {
            assert_eq!(ConductorState::classify(Celsius::new(temp), &config), expected, "{temp}");
        }
    }

    #[test]
    fn smoke_signals_are_exclusive() {
        let pan = pan_at(190.0);
        assert_eq!(pan.smoke(), SmokeSignal::Light);
        assert!(pan.light_smoke());
        assert!(!pan.heavy_smoke());

        let pan = pan_at(235.0);
        assert!(!pan.light_smoke());
        assert!(pan.heavy_smoke());

        let pan = pan_at(100.0);
        assert_eq!(pan.smoke(), SmokeSignal::None);
    }

    #[test]
    fn heat_ratio_and_glow() {
        let pan = pan_at(135.0);
        assert_relative_eq!(pan.heat_ratio(), 0.5);
        assert!(!pan.is_glowing());

        let pan = pan_at(181.0);
        assert!(pan.is_glowing());

        let flat = ThermalConductor::new(
            ObjectId(3),
            ConductorConfig {
                max_temp: Celsius::new(20.0),
                ..ConductorConfig::default()
            },
        );
        assert_eq!(flat.heat_ratio(), 0.0);
    }
}
