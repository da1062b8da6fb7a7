//! Burner → pan → steak heat chain
//!
//! Each stage owns its own temperature and reads the stage upstream of it
//! through a narrow trait:
//! - [`HeatSupply`]: what a pan needs from a burner
//! - [`ContactSurface`]: what a steak needs from a pan
//!
//! Partners are tracked by [`ObjectId`](crate::core_types::ObjectId) only;
//! whoever owns the objects resolves the id before calling `update`.

pub mod conductor;
pub mod config;
pub mod contact;
pub mod heat_source;
pub mod integration;
pub mod load;

use crate::core_types::units::Celsius;

pub use conductor::{ConductorState, SmokeSignal, ThermalConductor};
pub use config::{ConductorConfig, ConfigIssue, HeatSourceConfig, KitchenPreset, LoadConfig};
pub use contact::{ContactLink, ContactPhase};
pub use heat_source::HeatSource;
pub use load::{Doneness, ThermalLoad};

/// Upstream view of a heat source
pub trait HeatSupply {
    fn is_on(&self) -> bool;
    fn effective_output(&self) -> Celsius;
}

/// Upstream view of a surface food rests on
pub trait ContactSurface {
    fn surface_temperature(&self) -> Celsius;
}

/// A surface pinned at a fixed temperature
impl ContactSurface for Celsius {
    fn surface_temperature(&self) -> Celsius {
        *self
    }
}
