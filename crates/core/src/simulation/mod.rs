//! Kitchen scene: owns every burner, pan and steak and steps them together
//!
//! `Kitchen` is what a host talks to. It hands out [`ObjectId`]s, routes
//! contact events and advances the whole heat chain once per frame.
//!
//! # Tick order
//! 1. Sanitize `dt` (negative or non-finite steps become zero)
//! 2. Apply queued contact events in submission order
//! 3. Update every pan from the burners' current state
//! 4. Update every steak from the pan temperatures computed in step 3
//! 5. Diff level signals against the previous tick
//!
//! Burner controls (`turn_on`, `set_intensity`, ...) apply immediately, so a
//! pan always reads burner state that includes every change made before
//! `update` was called. Within a stage objects only read the stage upstream,
//! so each stage is updated in parallel.

pub mod contact_queue;
pub mod report;

pub use contact_queue::ContactEvent;
pub use report::{KitchenStats, SignalChange, SignalTransition, TickReport};

use crate::core_types::identity::{ObjectId, ObjectKind};
use crate::core_types::units::Seconds;
use crate::thermal::contact::ContactPhase;
use crate::thermal::{
    ConductorConfig, HeatSource, HeatSourceConfig, KitchenPreset, LoadConfig, ThermalConductor,
    ThermalLoad,
};
use contact_queue::ContactQueue;
use rayon::prelude::*;
use report::SignalSnapshot;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Ids of a burner, pan and steak created together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub burner: ObjectId,
    pub pan: ObjectId,
    pub steak: ObjectId,
}

/// The simulated kitchen
#[derive(Debug)]
pub struct Kitchen {
    burners: FxHashMap<ObjectId, HeatSource>,
    pans: FxHashMap<ObjectId, ThermalConductor>,
    steaks: FxHashMap<ObjectId, ThermalLoad>,

    contacts: ContactQueue,
    /// Level signals as of the last tick, for edge detection
    signals: FxHashMap<ObjectId, SignalSnapshot>,

    next_id: u32,
    simulation_time: Seconds,
    ticks: u64,
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}

impl Kitchen {
    pub fn new() -> Self {
        Self {
            burners: FxHashMap::default(),
            pans: FxHashMap::default(),
            steaks: FxHashMap::default(),
            contacts: ContactQueue::default(),
            signals: FxHashMap::default(),
            next_id: 1,
            simulation_time: Seconds::ZERO,
            ticks: 0,
        }
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    // ------------------------------------------------------------------
    // Objects
    // ------------------------------------------------------------------

    pub fn add_burner(&mut self, config: HeatSourceConfig) -> ObjectId {
        let id = self.allocate_id();
        let burner = HeatSource::new(id, config);
        self.signals.insert(id, SignalSnapshot::of_burner(&burner));
        self.burners.insert(id, burner);
        info!("Added burner {}", id);
        id
    }

    pub fn add_pan(&mut self, config: ConductorConfig) -> ObjectId {
        let id = self.allocate_id();
        let pan = ThermalConductor::new(id, config);
        self.signals.insert(id, SignalSnapshot::of_pan(&pan));
        info!("Added pan {} at {}", id, pan.temperature());
        self.pans.insert(id, pan);
        id
    }

    pub fn add_steak(&mut self, config: LoadConfig) -> ObjectId {
        let id = self.allocate_id();
        let steak = ThermalLoad::new(id, config);
        self.signals.insert(id, SignalSnapshot::of_steak(&steak));
        info!("Added steak {} at {}", id, steak.core_temp());
        self.steaks.insert(id, steak);
        id
    }

    /// Add one burner, pan and steak from a preset. Nothing is placed in contact.
    pub fn add_station(&mut self, preset: &KitchenPreset) -> Station {
        Station {
            burner: self.add_burner(preset.burner),
            pan: self.add_pan(preset.pan),
            steak: self.add_steak(preset.steak),
        }
    }

    /// Remove an object. Anything resting on it falls back to cooling on its
    /// next update.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        let removed = self.burners.remove(&id).is_some()
            || self.pans.remove(&id).is_some()
            || self.steaks.remove(&id).is_some();
        if removed {
            self.signals.remove(&id);
            info!("Removed object {}", id);
        }
        removed
    }

    pub fn kind_of(&self, id: ObjectId) -> Option<ObjectKind> {
        if self.burners.contains_key(&id) {
            Some(ObjectKind::HeatSource)
        } else if self.pans.contains_key(&id) {
            Some(ObjectKind::Conductor)
        } else if self.steaks.contains_key(&id) {
            Some(ObjectKind::Load)
        } else {
            None
        }
    }

    pub fn burner(&self, id: ObjectId) -> Option<&HeatSource> {
        self.burners.get(&id)
    }

    pub fn pan(&self, id: ObjectId) -> Option<&ThermalConductor> {
        self.pans.get(&id)
    }

    pub fn steak(&self, id: ObjectId) -> Option<&ThermalLoad> {
        self.steaks.get(&id)
    }

    // ------------------------------------------------------------------
    // Burner controls
    // ------------------------------------------------------------------

    pub fn turn_on(&mut self, burner: ObjectId) -> bool {
        self.burners.get_mut(&burner).map(HeatSource::turn_on).is_some()
    }

    pub fn turn_off(&mut self, burner: ObjectId) -> bool {
        self.burners.get_mut(&burner).map(HeatSource::turn_off).is_some()
    }

    pub fn set_intensity(&mut self, burner: ObjectId, value: f32) -> bool {
        self.burners
            .get_mut(&burner)
            .map(|b| b.set_intensity(value))
            .is_some()
    }

    // ------------------------------------------------------------------
    // Contacts
    // ------------------------------------------------------------------

    /// Queue a contact event for the next update
    pub fn submit_contact(&mut self, event: ContactEvent) {
        self.contacts.submit(event);
    }

    /// Events waiting for the next update
    pub fn pending_contacts(&self) -> &[ContactEvent] {
        self.contacts.pending()
    }

    /// Events that were applied during the last update
    pub fn applied_contacts(&self) -> &[ContactEvent] {
        self.contacts.applied_this_frame()
    }

    /// Route one event to its receiver. Returns false if it was dropped.
    ///
    /// Enter/Stay need an existing partner of the kind the receiver rests on
    /// (pan on burner, steak on pan). Exit only needs the receiver: the
    /// partner may already be gone.
    fn apply_contact(&mut self, event: ContactEvent) -> bool {
        let receiver = self.kind_of(event.receiver);
        let other = self.kind_of(event.other);
        let partner_ok = event.phase == ContactPhase::Exit
            || receiver.and_then(ObjectKind::upstream).is_some_and(|k| other == Some(k));

        if !partner_ok {
            debug!(
                "Dropping {:?} contact {} -> {} ({:?} on {:?})",
                event.phase, event.receiver, event.other, receiver, other
            );
            return false;
        }

        match receiver {
            Some(ObjectKind::Conductor) => {
                let Some(pan) = self.pans.get_mut(&event.receiver) else {
                    return false;
                };
                match event.phase {
                    ContactPhase::Enter => pan.on_contact_enter(event.other),
                    ContactPhase::Stay => pan.on_contact_stay(event.other),
                    ContactPhase::Exit => {
                        pan.on_contact_exit(event.other);
                    }
                }
                true
            }
            Some(ObjectKind::Load) => {
                let Some(steak) = self.steaks.get_mut(&event.receiver) else {
                    return false;
                };
                match event.phase {
                    ContactPhase::Enter => steak.on_contact_enter(event.other),
                    ContactPhase::Stay => steak.on_contact_stay(event.other),
                    ContactPhase::Exit => {
                        steak.on_contact_exit(event.other);
                    }
                }
                true
            }
            _ => {
                debug!("Dropping contact for {}: not a pan or steak", event.receiver);
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Simulation
    // ------------------------------------------------------------------

    /// Advance the whole kitchen by `dt` seconds
    pub fn update(&mut self, dt: f32) -> TickReport {
        let dt = Seconds::sanitized(dt);

        self.contacts.begin_frame();
        for event in self.contacts.take_pending() {
            if self.apply_contact(event) {
                self.contacts.mark_applied(event);
            }
        }

        let burners = &self.burners;
        self.pans.par_iter_mut().for_each(|(_, pan)| {
            let source = pan.contact_partner().and_then(|id| burners.get(&id));
            pan.update(dt, source);
        });

        let pans = &self.pans;
        self.steaks.par_iter_mut().for_each(|(_, steak)| {
            let surface = steak.contact_partner().and_then(|id| pans.get(&id));
            steak.update(dt, surface);
        });

        self.simulation_time += dt;
        self.ticks += 1;

        let transitions = self.collect_transitions();

        debug!(
            "Kitchen update: t={}, dt={}, contacts={}, transitions={}",
            self.simulation_time,
            dt,
            self.contacts.applied_this_frame().len(),
            transitions.len()
        );

        TickReport {
            time: self.simulation_time,
            dt,
            transitions,
        }
    }

    fn collect_transitions(&mut self) -> Vec<SignalTransition> {
        let current: Vec<(ObjectId, SignalSnapshot)> = self
            .burners
            .iter()
            .map(|(&id, b)| (id, SignalSnapshot::of_burner(b)))
            .chain(self.pans.iter().map(|(&id, p)| (id, SignalSnapshot::of_pan(p))))
            .chain(
                self.steaks
                    .iter()
                    .map(|(&id, s)| (id, SignalSnapshot::of_steak(s))),
            )
            .collect();

        let mut transitions = Vec::new();
        for (id, snapshot) in current {
            if let Some(previous) = self.signals.insert(id, snapshot) {
                snapshot.diff(previous, id, &mut transitions);
            }
        }
        transitions.sort_by_key(|t| t.object);
        transitions
    }

    pub fn stats(&self) -> KitchenStats {
        KitchenStats {
            simulation_time: self.simulation_time,
            ticks: self.ticks,
            burners: self.burners.len(),
            pans: self.pans.len(),
            steaks: self.steaks.len(),
            cooking: self.steaks.values().filter(|s| s.is_cooking()).count(),
        }
    }

    pub fn simulation_time(&self) -> Seconds {
        self.simulation_time
    }

    /// Remove every object and queued event and restart the clock
    pub fn reset(&mut self) {
        self.burners.clear();
        self.pans.clear();
        self.steaks.clear();
        self.contacts.clear();
        self.signals.clear();
        self.simulation_time = Seconds::ZERO;
        self.ticks = 0;
        info!("Kitchen reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::{ConductorState, Doneness, SmokeSignal};
    use approx::assert_relative_eq;

    fn station(kitchen: &mut Kitchen) -> Station {
        kitchen.add_station(&KitchenPreset::default())
    }

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        assert_eq!(kitchen.kind_of(s.burner), Some(ObjectKind::HeatSource));
        assert_eq!(kitchen.kind_of(s.pan), Some(ObjectKind::Conductor));
        assert_eq!(kitchen.kind_of(s.steak), Some(ObjectKind::Load));
        assert_ne!(s.burner, s.pan);
        assert_ne!(s.pan, s.steak);
    }

    #[test]
    fn controls_report_unknown_ids() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        assert!(kitchen.turn_on(s.burner));
        assert!(kitchen.set_intensity(s.burner, 0.5));
        assert!(!kitchen.turn_on(s.pan));
        assert!(!kitchen.set_intensity(ObjectId(99), 1.0));
        assert_relative_eq!(*kitchen.burner(s.burner).unwrap().effective_output(), 125.0);
    }

    #[test]
    fn contact_events_apply_on_next_update() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        kitchen.submit_contact(ContactEvent::enter(s.pan, s.burner));
        assert_eq!(kitchen.pending_contacts().len(), 1);
        assert!(!kitchen.pan(s.pan).unwrap().is_in_contact());

        kitchen.update(0.0);
        assert!(kitchen.pan(s.pan).unwrap().is_in_contact());
        assert_eq!(kitchen.applied_contacts().len(), 1);
        assert!(kitchen.pending_contacts().is_empty());
    }

    #[test]
    fn wrong_partner_kind_is_dropped() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        // Steak directly on the burner, pan on a steak, burner on a pan
        kitchen.submit_contact(ContactEvent::enter(s.steak, s.burner));
        kitchen.submit_contact(ContactEvent::enter(s.pan, s.steak));
        kitchen.submit_contact(ContactEvent::enter(s.burner, s.pan));
        kitchen.submit_contact(ContactEvent::enter(s.pan, ObjectId(99)));
        kitchen.update(0.1);

        assert!(kitchen.applied_contacts().is_empty());
        assert!(!kitchen.steak(s.steak).unwrap().is_on_conductor());
        assert!(!kitchen.pan(s.pan).unwrap().is_in_contact());
    }

    #[test]
    fn full_chain_heats_and_cooks() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        kitchen.set_intensity(s.burner, 1.0);
        kitchen.turn_on(s.burner);
        kitchen.submit_contact(ContactEvent::enter(s.pan, s.burner));
        kitchen.submit_contact(ContactEvent::enter(s.steak, s.pan));

        // 20°C -> 250°C at 15°C/s takes a little over 15 s
        for _ in 0..200 {
            kitchen.update(0.1);
        }
        let pan = kitchen.pan(s.pan).unwrap();
        assert_relative_eq!(*pan.temperature(), 250.0);
        assert_eq!(pan.state(), ConductorState::TooHot);
        assert_eq!(pan.smoke(), SmokeSignal::Heavy);

        let steak = kitchen.steak(s.steak).unwrap();
        assert!(steak.is_cooking());
        assert!(*steak.core_temp() > 20.0);
        assert!(steak.core_temp() <= pan.temperature());

        for _ in 0..1000 {
            kitchen.update(0.1);
        }
        assert_eq!(kitchen.steak(s.steak).unwrap().doneness(), Doneness::Burnt);
        assert_eq!(kitchen.stats().cooking, 1);
    }

    #[test]
    fn removing_burner_cools_pan() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        kitchen.set_intensity(s.burner, 1.0);
        kitchen.turn_on(s.burner);
        kitchen.submit_contact(ContactEvent::enter(s.pan, s.burner));
        kitchen.update(4.0);
        assert_relative_eq!(*kitchen.pan(s.pan).unwrap().temperature(), 80.0);

        assert!(kitchen.remove(s.burner));
        assert!(!kitchen.remove(s.burner));
        kitchen.update(1.0);
        let pan = kitchen.pan(s.pan).unwrap();
        assert!(!pan.is_in_contact());
        assert_relative_eq!(*pan.temperature(), 75.0);
    }

    #[test]
    fn transitions_report_edges_once() {
        let mut kitchen = Kitchen::new();
        let s = station(&mut kitchen);
        kitchen.set_intensity(s.burner, 0.5);
        kitchen.turn_on(s.burner);

        let report = kitchen.update(0.1);
        let flame: Vec<_> = report.for_object(s.burner).collect();
        assert_eq!(flame, vec![&SignalChange::Flame { active: true }]);

        let report = kitchen.update(0.1);
        assert!(report.transitions.is_empty());

        kitchen.turn_off(s.burner);
        let report = kitchen.update(0.1);
        assert_eq!(report.transitions.len(), 1);
        assert_eq!(report.transitions[0].change, SignalChange::Flame { active: false });
    }

    #[test]
    fn stats_and_reset() {
        let mut kitchen = Kitchen::new();
        station(&mut kitchen);
        kitchen.update(0.5);
        kitchen.update(-1.0);
        let stats = kitchen.stats();
        assert_eq!(stats.ticks, 2);
        assert_eq!(*stats.simulation_time, 0.5);
        assert_eq!((stats.burners, stats.pans, stats.steaks), (1, 1, 1));

        kitchen.reset();
        assert_eq!(kitchen.stats(), KitchenStats::default());
    }
}
