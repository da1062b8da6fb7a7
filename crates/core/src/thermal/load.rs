//! Steak: core temperature driven by the pan it rests on
//!
//! Cooking is gated: the steak must have been on the pan for at least
//! `min_contact_time` and the pan must be at least `min_conductor_temp`.
//! While cooking, the core approaches the pan temperature exponentially
//! (fast when the gap is large, slowing as it closes). Off the pan it cools
//! linearly toward ambient. On the pan but not yet cooking, the core holds
//! its temperature.

use crate::core_types::identity::ObjectId;
use crate::core_types::units::{Celsius, Seconds};
use crate::thermal::config::{ConfigIssue, LoadConfig};
use crate::thermal::contact::ContactLink;
use crate::thermal::integration::{approach, clamp_between, move_towards};
use crate::thermal::ContactSurface;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// How done the steak is, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Doneness {
    Raw = 0,
    Rare = 1,
    Medium = 2,
    WellDone = 3,
    Burnt = 4,
}

impl Doneness {
    /// Classify a core temperature into one of five non-overlapping bands.
    ///
    /// Thresholds must be strictly ascending. A mis-ordered table still maps
    /// every temperature to a single band; some bands just become unreachable.
    pub fn classify(core_temp: Celsius, config: &LoadConfig) -> Self {
        if core_temp < config.rare_temp {
            Doneness::Raw
        } else if core_temp < config.medium_temp {
            Doneness::Rare
        } else if core_temp < config.well_done_temp {
            Doneness::Medium
        } else if core_temp < config.burnt_temp {
            Doneness::WellDone
        } else {
            Doneness::Burnt
        }
    }
}

/// Food item at the end of the heat chain
#[derive(Debug, Clone)]
pub struct ThermalLoad {
    id: ObjectId,
    config: LoadConfig,
    core_temp: Celsius,
    contact: ContactLink,
    contact_duration: Seconds,
    is_cooking: bool,
}

impl ThermalLoad {
    pub fn new(id: ObjectId, config: LoadConfig) -> Self {
        let config = config.sanitized();
        for issue in config.issues() {
            warn!("Steak {}: {}", id, issue);
        }
        Self {
            id,
            core_temp: config.initial_temp,
            config,
            contact: ContactLink::default(),
            contact_duration: Seconds::ZERO,
            is_cooking: false,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    pub fn config_issues(&self) -> Vec<ConfigIssue> {
        self.config.issues()
    }

    /// Advance by `dt`.
    ///
    /// `pan` is the surface the host resolved from [`contact_partner`]; a
    /// tracked partner that no longer resolves drops the contact.
    ///
    /// [`contact_partner`]: ThermalLoad::contact_partner
    pub fn update<S: ContactSurface + ?Sized>(&mut self, dt: Seconds, pan: Option<&S>) {
        let pan_temp = match (self.contact.partner(), pan) {
            (Some(_), Some(pan)) => Some(pan.surface_temperature()),
            (Some(partner), None) => {
                debug!("Steak {}: pan {} is gone, dropping contact", self.id, partner);
                self.contact.clear();
                None
            }
            (None, _) => None,
        };

        // Contact bookkeeping
        let was_cooking = self.is_cooking;
        match pan_temp {
            Some(pan_temp) => {
                self.contact_duration += dt;
                self.is_cooking = self.contact_duration >= self.config.min_contact_time
                    && pan_temp >= self.config.min_conductor_temp;
            }
            None => self.reset_contact_timer(),
        }
        if self.is_cooking != was_cooking {
            debug!(
                "Steak {} cooking={} after {} in contact",
                self.id, self.is_cooking, self.contact_duration
            );
        }

        // Temperature integration
        match pan_temp {
            Some(pan_temp) if self.is_cooking => {
                let next = approach(*self.core_temp, *pan_temp, self.config.cooking_speed, *dt);
                self.core_temp =
                    Celsius::new(clamp_between(next, *self.config.ambient_temp, *pan_temp));
            }
            Some(_) => {
                // Waiting out the contact gate: the core holds
            }
            None => {
                self.core_temp = Celsius::new(move_towards(
                    *self.core_temp,
                    *self.config.ambient_temp,
                    self.config.cooling_speed * *dt,
                ));
            }
        }
    }

    /// Contact starts (or restarts): the contact timer always begins at zero
    pub fn on_contact_enter(&mut self, pan: ObjectId) {
        if self.contact.attach(pan) {
            info!("Steak {} placed on pan {}", self.id, pan);
        }
        self.reset_contact_timer();
    }

    /// Contact continues: the timer keeps running
    pub fn on_contact_stay(&mut self, pan: ObjectId) {
        if self.contact.attach(pan) {
            debug!("Steak {} now resting on pan {}", self.id, pan);
        }
    }

    /// Returns true if `pan` was the tracked pan and the contact ended
    pub fn on_contact_exit(&mut self, pan: ObjectId) -> bool {
        let detached = self.contact.detach(pan);
        if detached {
            info!(
                "Steak {} removed from pan {} at {}",
                self.id, pan, self.core_temp
            );
            self.reset_contact_timer();
        }
        detached
    }

    fn reset_contact_timer(&mut self) {
        self.contact_duration = Seconds::ZERO;
        self.is_cooking = false;
    }

    pub fn core_temp(&self) -> Celsius {
        self.core_temp
    }

    pub fn doneness(&self) -> Doneness {
        Doneness::classify(self.core_temp, &self.config)
    }

    pub fn is_cooking(&self) -> bool {
        self.is_cooking
    }

    pub fn is_on_conductor(&self) -> bool {
        self.contact.is_active()
    }

    pub fn contact_duration(&self) -> Seconds {
        self.contact_duration
    }

    pub fn contact_partner(&self) -> Option<ObjectId> {
        self.contact.partner()
    }
}
