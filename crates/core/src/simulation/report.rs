//! Per-tick reports and aggregate statistics
//!
//! Queries on the objects are level-triggered and always authoritative.
//! Particle systems usually want play/stop edges instead, so every update
//! also diffs the signals against the previous tick.

use crate::core_types::identity::ObjectId;
use crate::core_types::units::Seconds;
use crate::thermal::{ConductorState, Doneness, HeatSource, SmokeSignal, ThermalConductor, ThermalLoad};
use serde::{Deserialize, Serialize};

/// A signal edge on one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalChange {
    Flame { active: bool },
    Smoke { from: SmokeSignal, to: SmokeSignal },
    PanState { from: ConductorState, to: ConductorState },
    Doneness { from: Doneness, to: Doneness },
    Cooking { active: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTransition {
    pub object: ObjectId,
    pub change: SignalChange,
}

/// Result of one [`Kitchen::update`](crate::simulation::Kitchen::update)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Simulation time after this tick
    pub time: Seconds,
    /// Sanitized step that was applied
    pub dt: Seconds,
    /// Signal edges, ordered by object id
    pub transitions: Vec<SignalTransition>,
}

impl TickReport {
    /// Edges reported for one object
    pub fn for_object(&self, id: ObjectId) -> impl Iterator<Item = &SignalChange> {
        self.transitions
            .iter()
            .filter(move |t| t.object == id)
            .map(|t| &t.change)
    }
}

/// Aggregate simulation statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenStats {
    pub simulation_time: Seconds,
    pub ticks: u64,
    pub burners: usize,
    pub pans: usize,
    pub steaks: usize,
    /// Steaks currently cooking
    pub cooking: usize,
}

/// Level signals of one object as of the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignalSnapshot {
    Burner {
        flame: bool,
    },
    Pan {
        state: ConductorState,
        smoke: SmokeSignal,
    },
    Steak {
        doneness: Doneness,
        cooking: bool,
    },
}

impl SignalSnapshot {
    pub fn of_burner(burner: &HeatSource) -> Self {
        SignalSnapshot::Burner {
            flame: burner.flame_active(),
        }
    }

    pub fn of_pan(pan: &ThermalConductor) -> Self {
        SignalSnapshot::Pan {
            state: pan.state(),
            smoke: pan.smoke(),
        }
    }

    pub fn of_steak(steak: &ThermalLoad) -> Self {
        SignalSnapshot::Steak {
            doneness: steak.doneness(),
            cooking: steak.is_cooking(),
        }
    }

    /// Append the edges between `previous` and `self`
    pub fn diff(self, previous: SignalSnapshot, object: ObjectId, out: &mut Vec<SignalTransition>) {
        let mut push = |change| out.push(SignalTransition { object, change });
        match (previous, self) {
            (SignalSnapshot::Burner { flame: was }, SignalSnapshot::Burner { flame: now }) => {
                if was != now {
                    push(SignalChange::Flame { active: now });
                }
            }
            (
                SignalSnapshot::Pan {
                    state: old_state,
                    smoke: old_smoke,
                },
                SignalSnapshot::Pan { state, smoke },
            ) => {
                if old_state != state {
                    push(SignalChange::PanState {
                        from: old_state,
                        to: state,
                    });
                }
                if old_smoke != smoke {
                    push(SignalChange::Smoke {
                        from: old_smoke,
                        to: smoke,
                    });
                }
            }
            (
                SignalSnapshot::Steak {
                    doneness: old_doneness,
                    cooking: was_cooking,
                },
                SignalSnapshot::Steak { doneness, cooking },
            ) => {
                if was_cooking != cooking {
                    push(SignalChange::Cooking { active: cooking });
                }
                if old_doneness != doneness {
                    push(SignalChange::Doneness {
                        from: old_doneness,
                        to: doneness,
                    });
                }
            }
            // Ids are never reused across kinds
            _ => {}
        }
    }
}
